#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for calc integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use calc::CalcModule;
use calc::config::CalcConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt as _;

/// Fresh in-memory `SQLite` database with migrations applied.
///
/// The pool holds a single connection so every statement sees the same
/// in-memory database.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    calc::infra::storage::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Replaces the `constants` table with one that has no key, so duplicate
/// names can be seeded.
///
/// # Panics
/// Panics if a statement fails.
pub async fn drop_key_constraint(db: &DatabaseConnection) {
    db.execute_unprepared("DROP TABLE constants;")
        .await
        .expect("Failed to drop constants table");
    db.execute_unprepared("CREATE TABLE constants (name TEXT NOT NULL, value REAL NOT NULL);")
        .await
        .expect("Failed to recreate constants table");
}

/// Inserts a row directly, bypassing the repository.
///
/// # Panics
/// Panics if the insert fails.
pub async fn seed_row(db: &DatabaseConnection, name: &str, value: f64) {
    db.execute_unprepared(&format!(
        "INSERT INTO constants (name, value) VALUES ('{name}', {value});"
    ))
    .await
    .expect("Failed to seed constant");
}

/// Module plus its router over a fresh database.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub module: CalcModule,
    pub app: Router,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_db(inmem_db().await)
    }

    pub fn with_db(db: DatabaseConnection) -> Self {
        let module = CalcModule::new(db.clone(), &CalcConfig::default());
        let app = module.router();
        Self { db, module, app }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// Extracts a JSON number, failing the test otherwise.
pub fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or_else(|| panic!("expected a number, got {value}"))
}
