//! Request and response DTOs

mod requests;
mod responses;

pub use requests::{
    AddFavoriteRequest, AddFriendRequest, CreateUserRequest, CreateVideoRequest, LoginRequest,
    UpdateUserRequest,
};
pub use responses::{
    CreatedUserResponse, KingResponse, ProfileResponse, TokenResponse, UserResponse, VideoResponse,
};
