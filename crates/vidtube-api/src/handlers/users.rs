//! User handlers
//!
//! Account lifecycle plus profile, favorites and friends endpoints.
//!
//! Read endpoints only require a known token (401 otherwise), while list
//! mutations require the token to own the targeted account (403 otherwise).

use axum::{
    extract::{Path, State},
    Json,
};
use vidtube_db::UnitOfWork;
use vidtube_service::{
    AddFavoriteRequest, AddFriendRequest, CreateUserRequest, CreatedUserResponse, LoginRequest,
    ProfileResponse, ServiceError, TokenResponse, UpdateUserRequest, UserResponse, UserService,
    VideoResponse,
};

use crate::extractors::{AuthToken, ValidatedJson};
use crate::response::{Accepted, ApiError, ApiResult, Created, CreatedAt};
use crate::state::AppState;

/// Create a user account
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<CreatedAt<CreatedUserResponse>> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);
    let created = service.create_user(request)?;

    Ok(CreatedAt {
        location: format!("/api/users/{}", created.id),
        body: created,
    })
}

/// Exchange credentials for the session token
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);
    let token = service.log_in(&request)?;
    Ok(Json(TokenResponse { token }))
}

/// Overwrite the authenticated user's name, password and email
///
/// PUT /api/users
///
/// A token matching no account is reported as 412, per the API contract.
pub async fn update_user(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Accepted> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    match service.update_user(&token, request) {
        Err(ServiceError::NotFound { .. }) => Err(ApiError::PreconditionFailed(
            "no account matches this token".to_string(),
        )),
        other => other.map_err(ApiError::from),
    }?;

    Ok(Accepted)
}

/// Delete a user account
///
/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Accepted> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);
    service.delete_user(id)?;
    Ok(Accepted)
}

/// Get a user's profile with favorites and close friends
///
/// GET /api/users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProfileResponse>> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_authenticated(&token) {
        return Err(ApiError::Unauthenticated);
    }

    Ok(Json(service.get_profile(id)?))
}

/// List a user's favorite videos
///
/// GET /api/users/{id}/favorites
pub async fn get_favorites(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_authenticated(&token) {
        return Err(ApiError::Unauthenticated);
    }

    Ok(Json(service.get_favorites(id)?))
}

/// Add a video to a user's favorites
///
/// POST /api/users/{id}/favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
    Json(request): Json<AddFavoriteRequest>,
) -> ApiResult<Created> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_allowed(&token, id) {
        return Err(ApiError::Forbidden);
    }

    service.add_favorite(id, request.video_id)?;
    Ok(Created)
}

/// Remove a video from a user's favorites
///
/// DELETE /api/users/{id}/favorites/{video_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path((id, video_id)): Path<(i32, i32)>,
) -> ApiResult<Accepted> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_allowed(&token, id) {
        return Err(ApiError::Forbidden);
    }

    service.remove_favorite(id, video_id)?;
    Ok(Accepted)
}

/// List a user's close friends
///
/// GET /api/users/{id}/friends
pub async fn get_friends(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_authenticated(&token) {
        return Err(ApiError::Unauthenticated);
    }

    Ok(Json(service.get_friends(id)?))
}

/// Add a user to the close friends list
///
/// POST /api/users/{id}/friends
pub async fn add_friend(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
    Json(request): Json<AddFriendRequest>,
) -> ApiResult<Created> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_allowed(&token, id) {
        return Err(ApiError::Forbidden);
    }

    service.add_friend(id, request.friend_id)?;
    Ok(Created)
}

/// Remove a user from the close friends list
///
/// DELETE /api/users/{id}/friends/{friend_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path((id, friend_id)): Path<(i32, i32)>,
) -> ApiResult<Accepted> {
    let uow = UnitOfWork::new(state.db());
    let service = UserService::new(&uow);

    if !service.is_allowed(&token, id) {
        return Err(ApiError::Forbidden);
    }

    service.remove_friend(id, friend_id)?;
    Ok(Accepted)
}
