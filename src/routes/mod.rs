use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use frontier_contact::{ContactSessions, ContactWorkflow, Inbox};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::template::{NotFoundTemplate, Template};

mod about;
mod api;
mod contact;
mod health;
mod index;
mod services;
mod thank_you;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub workflow: ContactWorkflow,
    pub sessions: ContactSessions,
    pub inbox: Inbox,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            site: template.site(),
        }),
    )
}

fn api_router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/", get(api::root))
        .route("/api/health", get(api::health))
        .route("/api/services", get(api::services))
        .route("/api/contact", get(api::list).post(api::submit))
        .route("/api/contact/{id}/status", put(api::update_status))
        .route("/api/analytics", get(api::analytics))
        .route(
            "/api/status",
            get(api::status_checks).post(api::create_status_check),
        )
        .layer(cors)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/thank-you", get(thank_you::page))
        .merge(api_router())
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
