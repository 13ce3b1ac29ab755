//! Kings handler

use axum::{extract::State, Json};
use vidtube_db::UnitOfWork;
use vidtube_service::{KingResponse, KingsService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List all kings
///
/// GET /api/kings
pub async fn get_all_kings(State(state): State<AppState>) -> ApiResult<Json<Vec<KingResponse>>> {
    let uow = UnitOfWork::new(state.db());
    let service = KingsService::new(&uow);
    Ok(Json(service.get_all_kings()))
}
