//! Response DTOs for API endpoints

use serde::Serialize;
use vidtube_core::{King, User, Video};

/// Public user representation (no credentials)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Account creation response; carries the session token the client will
/// authenticate with from now on.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl From<&User> for CreatedUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            token: user.token.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VideoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<&Video> for VideoResponse {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            description: video.description.clone(),
        }
    }
}

/// Full profile: identity plus favorites and close friends, both in
/// insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub favorite_videos: Vec<VideoResponse>,
    pub close_friends: Vec<UserResponse>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KingResponse {
    pub id: i32,
    pub name: String,
    pub info: String,
}

impl From<&King> for KingResponse {
    fn from(king: &King) -> Self {
        Self {
            id: king.id,
            name: king.name.clone(),
            info: king.info.clone(),
        }
    }
}
