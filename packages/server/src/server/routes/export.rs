//! Export endpoints.
//!
//! POST /api/export      ["Kyiv", ...] -> PDF risk brief
//! POST /api/export/kml  ["Kyiv", ...] -> KML placemarks

use axum::{
    extract::rejection::JsonRejection,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};

use crate::domains::export::{build_report, render_kml, render_pdf, resolve_regions};
use crate::server::error::ApiError;

const PDF_FILENAME: &str = "cpz-atlas-report.pdf";
const KML_FILENAME: &str = "cpz-atlas-report.kml";
const KML_CONTENT_TYPE: &str = "application/vnd.google-earth.kml+xml";

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", filename)
}

pub async fn export_pdf_handler(
    regions: Result<Json<Vec<String>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(regions) = regions?;
    let mut rng = StdRng::from_entropy();
    let report = build_report(&regions, &mut rng)?;
    let bytes = render_pdf(&report, Utc::now())?;

    tracing::info!(regions = report.len(), bytes = bytes.len(), "PDF export rendered");

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, attachment(PDF_FILENAME)),
        ],
        bytes,
    )
        .into_response())
}

pub async fn export_kml_handler(
    regions: Result<Json<Vec<String>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(regions) = regions?;
    let regions = resolve_regions(&regions)?;
    let kml = render_kml(&regions);

    Ok((
        [
            (CONTENT_TYPE, KML_CONTENT_TYPE.to_string()),
            (CONTENT_DISPOSITION, attachment(KML_FILENAME)),
        ],
        kml,
    )
        .into_response())
}
