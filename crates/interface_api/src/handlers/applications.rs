//! Application handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use core_kernel::ApplicationId;

use crate::dto::applications::*;
use crate::{error::ApiError, AppState};

/// Lists applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationSummaryResponse>>, ApiError> {
    Ok(Json(state.dashboard.list_applications().await?))
}

/// Gets an application with its risk assessment
pub async fn get_application(
    State(state): State<AppState>,
    id: Result<Path<ApplicationId>, PathRejection>,
) -> Result<Json<ApplicationDetailResponse>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.dashboard.application_detail(id).await?))
}
