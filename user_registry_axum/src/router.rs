//! Router for the user record endpoints

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use user_registry::UserService;

use super::user::{create_user, delete_user, get_user, list_users, update_user};

/// Create a router for the user record endpoints
///
/// The endpoints are served at:
/// - POST   /users
/// - GET    /users
/// - GET    /users/{id}
/// - PUT    /users/{id}
/// - DELETE /users/{id}
///
/// The service handle is injected as router state, so the returned router
/// is self-contained and can be mounted or merged into a larger application.
pub fn user_registry_router(service: UserService) -> Router {
    user_registry_router_no_trace(service).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create a router for the user record endpoints without HTTP tracing
///
/// This is the same as `user_registry_router()` but without the HTTP tracing
/// middleware. Use this if you want to add your own tracing middleware or if
/// you don't need HTTP request tracing.
pub fn user_registry_router_no_trace(service: UserService) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(service)
}
