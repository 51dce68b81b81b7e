pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use sqlx::PgPool;
use std::{any::Any, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    auth::{API_KEY_HEADER, ApiKeyGate},
    config::{Config, CorsOrigins},
    error::AppError,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(state: AppState) -> Router {
    let gate = Arc::new(ApiKeyGate::from_config(&state.config));
    if gate.is_bypassed() {
        tracing::warn!("API key gate is bypassed; do not run this configuration in production");
    }

    // Everything under /api, including both fallbacks, sits behind the gate
    let api_routes = Router::new()
        .route("/ping-public", get(handlers::ping::ping_public))
        .route("/ping", get(handlers::ping::ping))
        // Product routes
        .route("/productos", get(handlers::products::list_demo_products))
        .route("/productos-db", get(handlers::products::list_products))
        .route(
            "/productos-db/id",
            get(handlers::products::list_products_with_id),
        )
        .route(
            "/productos-db/id/{id}",
            get(handlers::products::get_product),
        )
        .route(
            "/productos-db/votar/{name}",
            put(handlers::products::vote_product),
        )
        // User routes
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/email/{email}",
            get(handlers::users::get_user_by_email),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        // Vote routes
        .route("/votos", post(handlers::votes::create_vote))
        .route(
            "/votos/usuario/{voter_id}",
            get(handlers::votes::list_votes_by_voter),
        )
        .fallback(handlers::ping::api_not_found)
        .method_not_allowed_fallback(handlers::ping::api_not_found)
        .layer(middleware::from_fn_with_state(gate, auth::require_api_key));

    let static_files = ServeDir::new(&state.config.static_dir);
    let cors = cors_layer(&state.config.cors_origins);

    let app = Router::new()
        .route("/health", get(handlers::ping::health))
        .nest("/api", api_routes)
        .fallback_service(static_files);

    with_global_layers(app, cors).with_state(state)
}

// CORS stays outermost so panics and gate rejections still carry its headers
fn with_global_layers<S>(router: Router<S>, cors: CorsLayer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(cors)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http()),
    )
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| tracing::warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(API_KEY_HEADER),
        ])
        .allow_credentials(false)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
