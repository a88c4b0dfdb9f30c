//! Access workflow endpoints.
//!
//! POST /api/request-access                       {email}
//! POST /api/approve-access/:request_id?moderator_email=...
//! GET  /api/access-status?email=...

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    Json,
};
use serde::Deserialize;

use crate::domains::access::{AccessResponse, ApprovalResponse, StandingResponse};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Deserialize)]
pub struct AccessRequestBody {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ApproveQuery {
    pub moderator_email: String,
}

#[derive(Deserialize)]
pub struct StandingQuery {
    pub email: String,
}

pub async fn request_access_handler(
    Extension(state): Extension<AxumAppState>,
    body: Result<Json<AccessRequestBody>, JsonRejection>,
) -> Result<Json<AccessResponse>, ApiError> {
    let Json(body) = body?;
    let outcome = state.access.submit_request(&body.email)?;
    Ok(Json(outcome.into()))
}

pub async fn approve_access_handler(
    Extension(state): Extension<AxumAppState>,
    Path(request_id): Path<String>,
    query: Result<Query<ApproveQuery>, QueryRejection>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let Query(query) = query?;
    let response = state
        .access
        .approve_request(&request_id, &query.moderator_email)?;
    Ok(Json(response))
}

pub async fn access_status_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<StandingQuery>, QueryRejection>,
) -> Result<Json<StandingResponse>, ApiError> {
    let Query(query) = query?;
    let has_access = state.access.check_standing(&query.email)?;
    Ok(Json(StandingResponse {
        email: crate::common::normalize_email(&query.email),
        has_access,
    }))
}
