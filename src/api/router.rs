use crate::api::{self, middleware::AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    // Routes that need a user session
    let user_protected = Router::new()
        .route("/api/actions/logout", post(api::auth::logout))
        .route("/api/users/me", get(api::users::get_me))
        .route(
            "/api/events/:id/actions/reserve",
            post(api::reservations::reserve),
        )
        .route(
            "/api/events/:id/sheets/:rank/:num/reservation",
            delete(api::reservations::cancel),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            api::middleware::require_user,
        ));

    // Routes that need an administrator session
    let admin_protected = Router::new()
        .route("/api/admin/actions/logout", post(api::auth::admin_logout))
        .route("/api/admin/events", get(api::admin::list_events))
        .route("/api/admin/events", post(api::admin::create_event))
        .route("/api/admin/events/:id", get(api::admin::get_event))
        .route(
            "/api/admin/events/:id/actions/edit",
            post(api::admin::edit_event),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            api::middleware::require_administrator,
        ));

    // Event views are public but resolve the viewer when a session is
    // present, so reserved seats can be flagged as theirs.
    let event_views = Router::new()
        .route("/api/events", get(api::events::list_events))
        .route("/api/events/:id", get(api::events::get_event))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            api::middleware::fill_user,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/users", post(api::users::signup))
        .route("/api/actions/login", post(api::auth::login))
        .route("/api/admin/actions/login", post(api::auth::admin_login))
        .merge(event_views)
        .merge(user_protected)
        .merge(admin_protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
