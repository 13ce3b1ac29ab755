//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, kings, users, videos};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (mounted outside /api)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(video_routes())
        .merge(kings_routes())
}

/// User account, favorites and friends routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users", put(users::update_user))
        .route("/users/login", post(users::login))
        .route("/users/:id", get(users::get_profile))
        .route("/users/:id", delete(users::delete_user))
        .route("/users/:id/favorites", get(users::get_favorites))
        .route("/users/:id/favorites", post(users::add_favorite))
        .route("/users/:id/favorites/:video_id", delete(users::remove_favorite))
        .route("/users/:id/friends", get(users::get_friends))
        .route("/users/:id/friends", post(users::add_friend))
        .route("/users/:id/friends/:friend_id", delete(users::remove_friend))
}

/// Video and channel routes
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(videos::get_all_videos))
        .route("/channels/:id/videos", get(videos::get_channel_videos))
        .route("/channels/:id/videos", post(videos::add_video))
        .route("/channels/:id/videos/:video_id", delete(videos::delete_video))
}

/// Kings routes
fn kings_routes() -> Router<AppState> {
    Router::new().route("/kings", get(kings::get_all_kings))
}
