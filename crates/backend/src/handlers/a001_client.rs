use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list::{ListRequest, ListResponse};

use crate::domain::a001_client::service;
use crate::shared::data::store::get_store;
use crate::shared::error::{parse_uuid, ApiError};

/// GET /api/client
pub async fn list(Query(req): Query<ListRequest>) -> Result<Json<ListResponse<Client>>, ApiError> {
    let store = get_store()?;
    Ok(Json(service::list(store, &req)))
}

/// GET /api/client/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Client>, ApiError> {
    let uuid = parse_uuid(&id)?;
    let store = get_store()?;
    service::get_by_id(store, uuid)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("client {}", id)))
}
