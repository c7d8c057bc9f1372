//! Shared fixtures for integration tests.
//!
//! Every fixture gets its own SQLite in-memory database, migrated and
//! seeded with rooms 101 and 102 and the admin `admin@x` / `pw`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use tower::ServiceExt;

use pg_manager::api::{create_router, AppState};
use pg_manager::cli::args::SeedArgs;
use pg_manager::commands::seed::seed;
use pg_manager::config::Config;
use pg_manager::infra::{Database, Persistence};

pub const TOKEN: &str = "Rashid";

/// Migrated and seeded in-memory database.
pub async fn seeded_database() -> Arc<Database> {
    // A single pooled connection keeps the in-memory database alive and
    // shared by every query of the test.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Arc::new(migrate_and_seed(options).await)
}

/// SQLite file removed (with its journal) when dropped.
pub struct TempDatabaseFile {
    path: PathBuf,
}

impl TempDatabaseFile {
    fn new() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);

        let name = format!(
            "pg-manager-test-{}-{}.db",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        );
        Self {
            path: std::env::temp_dir().join(name),
        }
    }

    fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

impl Drop for TempDatabaseFile {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut path = self.path.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Seeded file-backed database served by a pool of `max_connections`.
///
/// Unlike the in-memory fixture, concurrent transactions here really
/// overlap. Keep the returned file guard alive for the whole test.
pub async fn seeded_shared_database(max_connections: u32) -> (Arc<Database>, TempDatabaseFile) {
    let file = TempDatabaseFile::new();

    let mut options = ConnectOptions::new(file.url());
    options
        .max_connections(max_connections)
        .sqlx_logging(false);

    (Arc::new(migrate_and_seed(options).await), file)
}

async fn migrate_and_seed(options: ConnectOptions) -> Database {
    let database = Database::connect_with(options).await.unwrap();
    database.run_migrations().await.unwrap();

    let args = SeedArgs {
        rooms: vec![101, 102],
        admin_email: Some("admin@x".to_string()),
        admin_password: Some("pw".to_string()),
    };
    seed(&Persistence::new(database.get_connection()), &args)
        .await
        .unwrap();

    database
}

/// Unit of work over a freshly seeded database.
pub async fn seeded_persistence() -> Arc<Persistence> {
    let database = seeded_database().await;
    Arc::new(Persistence::new(database.get_connection()))
}

/// Full application router over a freshly seeded database.
pub async fn test_app() -> Router {
    let database = seeded_database().await;
    create_router(AppState::from_config(database, &Config::default()))
}

/// Send one request and collect status and body text.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    json: Option<&str>,
) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, token);
    }
    let body = match json {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
