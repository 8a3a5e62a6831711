use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// DDL for the `constants` table.
///
/// Names compare byte for byte on every backend. `MySQL` needs an explicit
/// `NO PAD` binary collation; the server default is case-insensitive and
/// `utf8mb4_bin` still ignores trailing spaces.
fn create_table_sql(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            r"
CREATE TABLE IF NOT EXISTS constants (
    name VARCHAR(255) PRIMARY KEY NOT NULL,
    value DOUBLE PRECISION NOT NULL
);
            "
        }
        DatabaseBackend::MySql => {
            r"
CREATE TABLE IF NOT EXISTS constants (
    name VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin PRIMARY KEY NOT NULL,
    value DOUBLE NOT NULL
);
            "
        }
        DatabaseBackend::Sqlite => {
            r"
CREATE TABLE IF NOT EXISTS constants (
    name TEXT PRIMARY KEY NOT NULL,
    value REAL NOT NULL
);
            "
        }
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        conn.execute_unprepared(create_table_sql(backend)).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("DROP TABLE IF EXISTS constants;")
            .await?;
        Ok(())
    }
}
