//! Builds parameterized INSERT, SELECT, DELETE statements for SQLite tables.

use crate::sql::params::SqlValue;

/// Quote identifier for SQLite (safe: only from entity definitions).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }
}

fn column_list(columns: &[&str]) -> String {
    columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

fn push_where(q: &mut QueryBuf, filters: &[(&str, SqlValue)]) {
    if filters.is_empty() {
        return;
    }
    let clauses: Vec<String> = filters
        .iter()
        .map(|(col, v)| {
            q.params.push(v.clone());
            format!("{} = ?", quoted(col))
        })
        .collect();
    q.sql.push_str(" WHERE ");
    q.sql.push_str(&clauses.join(" AND "));
}

/// SELECT columns FROM table [WHERE col = ? AND ...] ORDER BY id [LIMIT n].
pub fn select(table: &str, columns: &[&str], filters: &[(&str, SqlValue)], limit: Option<u32>) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", column_list(columns), quoted(table));
    push_where(&mut q, filters);
    q.sql.push_str(" ORDER BY \"id\"");
    if let Some(n) = limit {
        q.sql.push_str(&format!(" LIMIT {}", n));
    }
    q
}

/// INSERT INTO table (cols) VALUES (?, ...) RETURNING columns. Empty values insert defaults.
pub fn insert(table: &str, values: &[(&str, SqlValue)], returning: &[&str]) -> QueryBuf {
    let mut q = QueryBuf::new();
    if values.is_empty() {
        q.sql = format!("INSERT INTO {} DEFAULT VALUES", quoted(table));
    } else {
        let cols: Vec<&str> = values.iter().map(|(c, _)| *c).collect();
        let placeholders = vec!["?"; values.len()].join(", ");
        q.sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quoted(table),
            column_list(&cols),
            placeholders
        );
        q.params = values.iter().map(|(_, v)| v.clone()).collect();
    }
    q.sql.push_str(&format!(" RETURNING {}", column_list(returning)));
    q
}

/// DELETE FROM table WHERE id = ?.
pub fn delete_by_id(table: &str, id: i64) -> QueryBuf {
    QueryBuf {
        sql: format!("DELETE FROM {} WHERE \"id\" = ?", quoted(table)),
        params: vec![SqlValue::Integer(id)],
    }
}

/// SELECT COUNT(*) FROM table.
pub fn count(table: &str) -> QueryBuf {
    QueryBuf {
        sql: format!("SELECT COUNT(*) FROM {}", quoted(table)),
        params: Vec::new(),
    }
}
