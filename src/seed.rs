//! First-boot sample data. Each table is seeded only while it is empty, so repeated runs are no-ops.

use crate::error::AppError;
use crate::models::{Person, Planet, User};
use crate::service::{password::hash_password, CrudService};
use crate::sql::SqlValue;
use sqlx::SqlitePool;

const PEOPLE: &[[(&str, &str); 6]] = &[
    [
        ("name", "Luke Skywalker"),
        ("birth_year", "19BBY"),
        ("gender", "male"),
        ("height", "172"),
        ("skin_color", "fair"),
        ("eye_color", "blue"),
    ],
    [
        ("name", "Darth Vader"),
        ("birth_year", "41.9BBY"),
        ("gender", "male"),
        ("height", "202"),
        ("skin_color", "white"),
        ("eye_color", "yellow"),
    ],
];

const PLANETS: &[[(&str, &str); 4]] = &[
    [("name", "Tatooine"), ("climate", "arid"), ("diameter", "10465"), ("population", "200000")],
    [("name", "Alderaan"), ("climate", "temperate"), ("diameter", "12500"), ("population", "2000000000")],
];

/// (email, password)
const USERS: &[(&str, &str)] = &[("user1@example.com", "password1"), ("user2@example.com", "password2")];

/// Rows inserted per table by one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub people: usize,
    pub planets: usize,
    pub users: usize,
}

/// Populate empty tables with sample rows in a single transaction.
pub async fn populate(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    if CrudService::count::<Person, _>(&mut *tx).await? == 0 {
        for row in PEOPLE {
            CrudService::insert::<Person, _>(&mut *tx, &text_values(row)).await?;
        }
        report.people = PEOPLE.len();
    }

    if CrudService::count::<Planet, _>(&mut *tx).await? == 0 {
        for row in PLANETS {
            CrudService::insert::<Planet, _>(&mut *tx, &text_values(row)).await?;
        }
        report.planets = PLANETS.len();
    }

    if CrudService::count::<User, _>(&mut *tx).await? == 0 {
        for (email, password) in USERS {
            let values = [
                ("email", SqlValue::from(*email)),
                ("password_hash", SqlValue::Text(hash_password(password)?)),
                ("is_active", SqlValue::Bool(true)),
            ];
            CrudService::insert::<User, _>(&mut *tx, &values).await?;
        }
        report.users = USERS.len();
    }

    tx.commit().await?;
    tracing::info!(
        people = report.people,
        planets = report.planets,
        users = report.users,
        "seed complete"
    );
    Ok(report)
}

fn text_values<'a>(row: &[(&'a str, &str)]) -> Vec<(&'a str, SqlValue)> {
    row.iter().map(|(col, v)| (*col, SqlValue::from(*v))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::password::verify_password;
    use crate::test_utils::test_pool;

    #[tokio::test]
    async fn seeding_is_idempotent_per_table() {
        let pool = test_pool().await;
        let first = populate(&pool).await.unwrap();
        assert_eq!(first, SeedReport { people: 2, planets: 2, users: 2 });

        let second = populate(&pool).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(CrudService::count::<Person, _>(&pool).await.unwrap(), 2);
        assert_eq!(CrudService::count::<Planet, _>(&pool).await.unwrap(), 2);
        assert_eq!(CrudService::count::<User, _>(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn only_empty_tables_are_seeded() {
        let pool = test_pool().await;
        CrudService::insert::<Planet, _>(&pool, &[("name", SqlValue::from("Naboo"))]).await.unwrap();
        let report = populate(&pool).await.unwrap();
        assert_eq!(report.planets, 0);
        assert_eq!(report.people, 2);
        let planets = CrudService::list::<Planet>(&pool).await.unwrap();
        assert_eq!(planets.len(), 1);
    }

    #[tokio::test]
    async fn seeded_people_keep_insertion_order_and_users_get_hashes() {
        let pool = test_pool().await;
        populate(&pool).await.unwrap();
        let names: Vec<String> = CrudService::list::<Person>(&pool).await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Luke Skywalker", "Darth Vader"]);

        let users = CrudService::list::<User>(&pool).await.unwrap();
        assert_eq!(users[0].email, "user1@example.com");
        assert!(users.iter().all(|u| u.is_active));
        assert!(verify_password("password1", &users[0].password_hash).unwrap());
    }
}
