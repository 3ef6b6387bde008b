use crate::config::rate_limit::{RateLimitConfig, RateLimitRule};
use crate::handlers;
use crate::websocket;
use axum::{extract::DefaultBodyLimit, routing, Router};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

/// Photo and file attachments arrive embedded as data URLs, so report
/// payloads can be megabytes.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn create_routes() -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Live update channel (subscribers only listen)
        .route("/ws", routing::get(websocket::live::ws_handler))
}

fn api_routes() -> Router {
    let rate_limit_config = RateLimitConfig::from_env();

    let read = read_routes(&rate_limit_config);
    let submit = submit_routes(&rate_limit_config);

    read.merge(submit)
}

/// Read routes: the archive list.
fn read_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new().route("/reports", routing::get(handlers::report::list_reports));

    with_optional_rate_limit(router, config.enabled, config.read)
}

/// Submit routes: report creation and status changes.
fn submit_routes(config: &RateLimitConfig) -> Router {
    let router = Router::new()
        .route("/reports", routing::post(handlers::report::create_report))
        .route(
            "/reports/{id}",
            routing::patch(handlers::report::update_report_status),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    with_optional_rate_limit(router, config.enabled, config.submit)
}

fn with_optional_rate_limit(router: Router, enabled: bool, rule: RateLimitRule) -> Router {
    if !enabled {
        return router;
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rule.per_second)
        .burst_size(rule.burst_size)
        .finish()
        .expect("Invalid rate limit configuration");

    router.layer(GovernorLayer::new(governor_conf))
}
