//! Video and channel handlers

use axum::{
    extract::{Path, State},
    Json,
};
use vidtube_db::UnitOfWork;
use vidtube_service::{CreateVideoRequest, UserService, VideoResponse, VideoService};

use crate::extractors::{AuthToken, ValidatedJson};
use crate::response::{Accepted, ApiError, ApiResult, CreatedAt};
use crate::state::AppState;

/// List all videos; no authentication required
///
/// GET /api/videos
pub async fn get_all_videos(State(state): State<AppState>) -> ApiResult<Json<Vec<VideoResponse>>> {
    let uow = UnitOfWork::new(state.db());
    let service = VideoService::new(&uow);
    Ok(Json(service.get_all_videos()))
}

/// List the videos in a channel
///
/// GET /api/channels/{id}/videos
pub async fn get_channel_videos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let uow = UnitOfWork::new(state.db());
    let service = VideoService::new(&uow);
    Ok(Json(service.get_videos_in_channel(id)?))
}

/// Add a video to a channel
///
/// POST /api/channels/{id}/videos
pub async fn add_video(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> ApiResult<CreatedAt<VideoResponse>> {
    let uow = UnitOfWork::new(state.db());

    if !UserService::new(&uow).is_authenticated(&token) {
        return Err(ApiError::Unauthenticated);
    }

    let service = VideoService::new(&uow);
    let video = service.add_video_to_channel(id, request)?;

    Ok(CreatedAt {
        location: format!("/api/channels/{id}/videos"),
        body: video,
    })
}

/// Delete a video from a channel (and the store)
///
/// DELETE /api/channels/{id}/videos/{video_id}
///
/// Only the admin token may delete videos.
pub async fn delete_video(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path((id, video_id)): Path<(i32, i32)>,
) -> ApiResult<Accepted> {
    if token != state.admin_token() {
        return Err(ApiError::Forbidden);
    }

    let uow = UnitOfWork::new(state.db());
    let service = VideoService::new(&uow);
    service.delete_video_from_channel(id, video_id)?;
    Ok(Accepted)
}
