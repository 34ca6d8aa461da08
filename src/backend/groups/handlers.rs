//! HTTP handlers for `/groups`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::groups::service::GroupService;
use crate::backend::validation::Validate;
use crate::shared::{Group, GroupRequest};

/// POST /groups
pub async fn create_group(
    State(groups): State<GroupService>,
    payload: Result<Json<GroupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Group>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let group = groups.create(request).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /groups
pub async fn list_groups(
    State(groups): State<GroupService>,
) -> Result<Json<Vec<Group>>, BackendError> {
    Ok(Json(groups.list().await?))
}

/// GET /groups/{group_id}
///
/// Ids that are not UUIDs are reported as not found.
pub async fn get_group(
    State(groups): State<GroupService>,
    Path(group_id): Path<String>,
) -> Result<Json<Group>, BackendError> {
    let id = Uuid::parse_str(&group_id)
        .map_err(|_| BackendError::not_found("The Group is not found"))?;
    Ok(Json(groups.get(id).await?))
}
