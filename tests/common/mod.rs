#![allow(dead_code)]

use reqwest::Client;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Once,
};

static INIT: Once = Once::new();
static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn init_env() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
        // Rate limits would make parallel tests order-dependent.
        std::env::set_var("RATE_LIMIT_ENABLED", "false");
    });
}

/// A fresh SQLite file per test keeps parallel tests isolated from each
/// other's rows.
pub fn unique_database_url() -> String {
    let n = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "mutabaa_test_{}_{}.db",
        std::process::id(),
        n
    ));
    let _ = std::fs::remove_file(&path);
    format!("sqlite://{}?mode=rwc", path.display())
}

pub struct TestApp {
    pub addr: String,
    pub db: DatabaseConnection,
    pub hub: mutabaa::websocket::hub::ReportHub,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    init_env();

    let database_url = unique_database_url();

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    mutabaa::migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let hub = mutabaa::websocket::hub::ReportHub::new();

    let app = axum::Router::new()
        .route("/", axum::routing::get(|| async { "ok" }))
        .merge(mutabaa::routes::create_routes())
        .layer(axum::middleware::from_fn(
            mutabaa::middleware::security::security_headers_middleware,
        ))
        .layer(axum::extract::Extension(db.clone()))
        .layer(axum::extract::Extension(hub.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    TestApp {
        addr: format!("http://{}", addr),
        db,
        hub,
        client: Client::new(),
    }
}

/// Submit a report and return the response body. Panics on a non-success
/// status so tests fail at the point of submission.
pub async fn create_report(app: &TestApp, payload: serde_json::Value) -> serde_json::Value {
    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    resp.json().await.unwrap()
}

pub async fn list_reports(app: &TestApp) -> serde_json::Value {
    let resp = app
        .client
        .get(app.url("/reports"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    resp.json().await.unwrap()
}
