//! Mock data endpoints.
//!
//! Each request draws from a fresh entropy-seeded RNG.

use axum::{
    extract::{rejection::QueryRejection, Query},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

use crate::domains::geophysics::{
    elf_anomaly_collection, estimate_zeta_c, read_schumann, zeta_c_collection,
    ElfAnomalyProperties, FeatureCollection, SchumannReading,
};
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ZetaCQuery {
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

pub async fn schumann_handler() -> Json<SchumannReading> {
    let mut rng = StdRng::from_entropy();
    Json(read_schumann(&mut rng, Utc::now()))
}

/// Point estimate when both `lng` and `lat` are given, otherwise the
/// collection for every risk region
pub async fn zeta_c_handler(
    query: Result<Query<ZetaCQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let mut rng = StdRng::from_entropy();
    let response = match (query.lng, query.lat) {
        (Some(lng), Some(lat)) => {
            tracing::debug!(lng, lat, "Point zeta_c estimate requested");
            Json(estimate_zeta_c(&mut rng)).into_response()
        }
        _ => Json(zeta_c_collection(&mut rng)).into_response(),
    };
    Ok(response)
}

pub async fn elf_anomalies_handler() -> Json<FeatureCollection<ElfAnomalyProperties>> {
    Json(elf_anomaly_collection())
}
