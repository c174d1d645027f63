use super::{Entity, FieldKind, FieldSpec};
use crate::sql::SqlValue;
use serde::Serialize;
use sqlx::FromRow;

/// Stored favorite. The table keeps a nullable pair; only one side is set by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

impl Favorite {
    /// Planet wins when a legacy row carries both ids.
    pub fn target(&self) -> Option<FavoriteTarget> {
        self.planet_id
            .map(FavoriteTarget::Planet)
            .or(self.people_id.map(FavoriteTarget::Person))
    }
}

impl Entity for Favorite {
    const TABLE: &'static str = "favorite";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "planet_id", "people_id"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("user_id", FieldKind::Integer),
        FieldSpec::optional("planet_id", FieldKind::Integer),
        FieldSpec::optional("people_id", FieldKind::Integer),
    ];
    const NOT_FOUND: &'static str = "Favorito no encontrado";
}

/// What a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Person(i64),
}

impl FavoriteTarget {
    pub fn column(self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "planet_id",
            FavoriteTarget::Person(_) => "people_id",
        }
    }

    pub fn id(self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => id,
        }
    }

    /// Equality filter selecting `user_id`'s favorite of this target.
    pub fn filter(self, user_id: i64) -> [(&'static str, SqlValue); 2] {
        [("user_id", SqlValue::Integer(user_id)), (self.column(), SqlValue::Integer(self.id()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_follows_the_set_column() {
        let fav = Favorite { id: 1, user_id: 1, planet_id: None, people_id: Some(2) };
        assert_eq!(fav.target(), Some(FavoriteTarget::Person(2)));
        let fav = Favorite { id: 1, user_id: 1, planet_id: Some(5), people_id: Some(2) };
        assert_eq!(fav.target(), Some(FavoriteTarget::Planet(5)));
        let fav = Favorite { id: 1, user_id: 1, planet_id: None, people_id: None };
        assert_eq!(fav.target(), None);
    }

    #[test]
    fn serializes_raw_foreign_keys() {
        let fav = Favorite { id: 3, user_id: 1, planet_id: Some(5), people_id: None };
        assert_eq!(
            serde_json::to_value(&fav).unwrap(),
            serde_json::json!({"id": 3, "user_id": 1, "planet_id": 5, "people_id": null})
        );
    }
}
