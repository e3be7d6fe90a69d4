//! App version routes

use axum::Json;
use common::models::VersionInfo;
use common::release;

use crate::error::{ApiError, ApiResult};

/// Latest app version, per-platform download URLs and release notes
pub async fn get() -> ApiResult<Json<VersionInfo>> {
    let info = release::current().map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(info))
}
