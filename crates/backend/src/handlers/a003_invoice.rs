use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::shared::list::{ListRequest, ListResponse};

use crate::domain::a003_invoice::service;
use crate::shared::data::store::get_store;
use crate::shared::error::{parse_uuid, ApiError};

/// GET /api/invoice
pub async fn list(Query(req): Query<ListRequest>) -> Result<Json<ListResponse<Invoice>>, ApiError> {
    let store = get_store()?;
    Ok(Json(service::list(store, &req)))
}

/// GET /api/invoice/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Invoice>, ApiError> {
    let uuid = parse_uuid(&id)?;
    let store = get_store()?;
    service::get_by_id(store, uuid)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("invoice {}", id)))
}
