//! Geophysics domain - mock readings served by the public data endpoints
//!
//! Nothing here is measured or inferred. Values come from the caller's RNG so
//! handlers can use entropy and tests can use a seeded generator.

pub mod elf;
pub mod geojson;
pub mod regions;
pub mod schumann;
pub mod zeta_c;

pub use elf::{elf_anomaly_collection, ElfAnomalyProperties};
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use regions::{find_region, Region, ELF_REGIONS, RISK_REGIONS};
pub use schumann::{read_schumann, InterferenceLevel, ModeValues, SchumannReading};
pub use zeta_c::{estimate_zeta_c, risk_tier, zeta_c_collection, RiskProperties, ZetaCEstimate};
