use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::get_current_user;
use super::handlers::auth::login;
use super::handlers::posts::add_comment;
use super::handlers::posts::create_post;
use super::handlers::posts::delete_post;
use super::handlers::posts::get_post;
use super::handlers::posts::like_post;
use super::handlers::posts::list_posts;
use super::handlers::posts::remove_comment;
use super::handlers::posts::unlike_post;
use super::handlers::profiles::add_education;
use super::handlers::profiles::add_experience;
use super::handlers::profiles::delete_account;
use super::handlers::profiles::get_my_profile;
use super::handlers::profiles::get_profile_by_user;
use super::handlers::profiles::list_profiles;
use super::handlers::profiles::upsert_profile;
use super::handlers::users::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::post::service::PostService;
use crate::domain::profile::service::ProfileService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::post::PostgresPostRepository;
use crate::outbound::repositories::profile::PostgresProfileRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub profile_service: Arc<ProfileService<PostgresProfileRepository, PostgresUserRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository, PostgresUserRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    profile_service: Arc<ProfileService<PostgresProfileRepository, PostgresUserRepository>>,
    post_service: Arc<PostService<PostgresPostRepository, PostgresUserRepository>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        profile_service,
        post_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login))
        .route("/api/profile", get(list_profiles))
        .route("/api/profile/user/:user_id", get(get_profile_by_user));

    let protected_routes = Router::new()
        .route("/api/auth", get(get_current_user))
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile", post(upsert_profile))
        .route("/api/profile", delete(delete_account))
        .route("/api/profile/experience", put(add_experience))
        .route("/api/profile/education", put(add_education))
        .route("/api/posts", post(create_post))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_id", get(get_post))
        .route("/api/posts/:post_id", delete(delete_post))
        .route("/api/posts/like/:post_id", put(like_post))
        .route("/api/posts/unlike/:post_id", put(unlike_post))
        .route("/api/posts/comment/:post_id", post(add_comment))
        .route(
            "/api/posts/comment/:post_id/:comment_id",
            delete(remove_comment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
