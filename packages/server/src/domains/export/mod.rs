//! Export domain - risk brief artifacts for a selection of regions
//!
//! Handlers resolve the selection with [`build_report`] and hand the rows to
//! a renderer ([`render_pdf`], [`render_kml`]). Renderers are pure formatting.

pub mod errors;
pub mod kml;
pub mod pdf;

use rand::Rng;

use crate::domains::geophysics::{estimate_zeta_c, find_region, Region, ZetaCEstimate};

pub use errors::ExportError;
pub use kml::render_kml;
pub use pdf::render_pdf;

/// One row of an export
#[derive(Debug, Clone, Copy)]
pub struct RegionReport {
    pub region: &'static Region,
    pub estimate: ZetaCEstimate,
}

/// Map requested names onto known regions, preserving order
pub fn resolve_regions(names: &[String]) -> Result<Vec<&'static Region>, ExportError> {
    if names.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    names
        .iter()
        .map(|name| find_region(name).ok_or_else(|| ExportError::UnknownRegion(name.clone())))
        .collect()
}

/// Resolve the selection and draw a ζ_c estimate for each region
pub fn build_report<R: Rng + ?Sized>(
    names: &[String],
    rng: &mut R,
) -> Result<Vec<RegionReport>, ExportError> {
    Ok(resolve_regions(names)?
        .into_iter()
        .map(|region| RegionReport {
            region,
            estimate: estimate_zeta_c(rng),
        })
        .collect())
}
