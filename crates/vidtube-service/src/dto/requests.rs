//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with field rules also
//! implement `Validate` so the adapter can reject bad input with 400.

use serde::Deserialize;
use validator::Validate;

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    #[serde(default)]
    pub email: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Account update request
///
/// All three fields are overwritten; there is no partial update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    #[serde(default)]
    pub email: String,
}

/// Video upload request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
}

/// Add a video to a user's favorites
#[derive(Debug, Clone, Deserialize)]
pub struct AddFavoriteRequest {
    pub video_id: i32,
}

/// Add a user to a user's close friends
#[derive(Debug, Clone, Deserialize)]
pub struct AddFriendRequest {
    pub friend_id: i32,
}
