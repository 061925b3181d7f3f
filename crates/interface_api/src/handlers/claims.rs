//! Claims handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use core_kernel::ClaimId;

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Lists claims whose references resolve
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimSummaryResponse>>, ApiError> {
    Ok(Json(state.dashboard.list_claims().await?))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    id: Result<Path<ClaimId>, PathRejection>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.dashboard.claim_detail(id).await?))
}
