//! Schema DDL for the entity tables. Idempotent: every table is CREATE TABLE IF NOT EXISTS.
//! Favorites reference users, planets and people; whether SQLite enforces that is a connection option.

use crate::error::AppError;
use sqlx::SqlitePool;

const DDL: &[(&str, &str)] = &[
    (
        "people",
        r#"
        CREATE TABLE IF NOT EXISTS "people" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "birth_year" TEXT,
            "gender" TEXT,
            "height" TEXT,
            "skin_color" TEXT,
            "eye_color" TEXT
        )
        "#,
    ),
    (
        "planet",
        r#"
        CREATE TABLE IF NOT EXISTS "planet" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "name" TEXT NOT NULL,
            "climate" TEXT,
            "diameter" TEXT,
            "population" TEXT
        )
        "#,
    ),
    (
        "user",
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "email" TEXT NOT NULL UNIQUE,
            "password_hash" TEXT NOT NULL,
            "is_active" BOOLEAN NOT NULL DEFAULT 1
        )
        "#,
    ),
    (
        "favorite",
        r#"
        CREATE TABLE IF NOT EXISTS "favorite" (
            "id" INTEGER PRIMARY KEY AUTOINCREMENT,
            "user_id" INTEGER NOT NULL REFERENCES "user" ("id"),
            "planet_id" INTEGER REFERENCES "planet" ("id"),
            "people_id" INTEGER REFERENCES "people" ("id")
        )
        "#,
    ),
];

/// Create all entity tables that do not exist yet. Run once at startup, before seeding.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for (table, ddl) in DDL {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table = %table, "table ensured");
    }
    Ok(())
}
