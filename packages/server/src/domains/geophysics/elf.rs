use serde::Serialize;

use super::{Feature, FeatureCollection, ELF_REGIONS};

#[derive(Debug, Clone, Serialize)]
pub struct ElfAnomalyProperties {
    pub id: &'static str,
}

/// Locations with reported ELF anomalies
pub fn elf_anomaly_collection() -> FeatureCollection<ElfAnomalyProperties> {
    FeatureCollection::new(
        ELF_REGIONS
            .iter()
            .map(|region| Feature::at_region(region, ElfAnomalyProperties { id: region.id }))
            .collect(),
    )
}
