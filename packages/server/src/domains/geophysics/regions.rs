/// A named monitoring location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub lng: f64,
    pub lat: f64,
}

pub const KYIV: Region = Region {
    id: "Kyiv",
    lng: 30.52,
    lat: 50.45,
};

pub const TAIPEI: Region = Region {
    id: "Taipei",
    lng: 121.56,
    lat: 25.03,
};

pub const ANCHORAGE: Region = Region {
    id: "Anchorage",
    lng: -149.90,
    lat: 61.22,
};

/// Regions covered by the default ζ_c collection and by exports
pub const RISK_REGIONS: [Region; 3] = [KYIV, TAIPEI, ANCHORAGE];

/// Regions with reported ELF (0.1–0.5 Hz) anomalies
pub const ELF_REGIONS: [Region; 2] = [KYIV, ANCHORAGE];

/// Look up a region by name, ignoring ASCII case
pub fn find_region(name: &str) -> Option<&'static Region> {
    let name = name.trim();
    RISK_REGIONS
        .iter()
        .find(|region| region.id.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_region_is_case_insensitive() {
        assert_eq!(find_region("kyiv"), Some(&KYIV));
        assert_eq!(find_region(" TAIPEI "), Some(&TAIPEI));
        assert_eq!(find_region("Atlantis"), None);
    }
}
