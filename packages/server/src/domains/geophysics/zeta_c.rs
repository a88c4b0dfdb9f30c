//! Synthetic ζ_c risk index.
//!
//! ζ = 0.5·ξ + 0.3·η + 0.2·u with ξ, η ~ N(0, 1) redrawn per sample and
//! u ~ U[0, 1) drawn once per estimate. The estimate is the sample mean;
//! confidence is the coefficient of variation (std / |mean|).

use std::f64::consts::PI;

use rand::Rng;
use serde::Serialize;

use super::{Feature, FeatureCollection, RISK_REGIONS};

/// Monte-Carlo draws per estimate
pub const SAMPLE_COUNT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZetaCEstimate {
    #[serde(rename = "ζ_c")]
    pub zeta_c: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskProperties {
    pub id: &'static str,
    #[serde(rename = "ζ_c")]
    pub zeta_c: f64,
    pub confidence: f64,
    pub tier: &'static str,
}

/// Box-Muller transform over two uniforms
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 1 - U[0,1) is in (0, 1], keeping ln() finite
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Draw one ζ_c estimate
pub fn estimate_zeta_c<R: Rng + ?Sized>(rng: &mut R) -> ZetaCEstimate {
    let offset = rng.gen::<f64>() * 0.2;
    let samples: Vec<f64> = (0..SAMPLE_COUNT)
        .map(|_| standard_normal(rng) * 0.5 + standard_normal(rng) * 0.3 + offset)
        .collect();

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let confidence = if mean == 0.0 { 0.0 } else { std_dev / mean.abs() };

    ZetaCEstimate {
        zeta_c: mean,
        confidence,
    }
}

/// "1" above 0.8, "2" above 0.6, otherwise "3"
pub fn risk_tier(zeta_c: f64) -> &'static str {
    if zeta_c > 0.8 {
        "1"
    } else if zeta_c > 0.6 {
        "2"
    } else {
        "3"
    }
}

/// ζ_c for every risk region as a GeoJSON collection
pub fn zeta_c_collection<R: Rng + ?Sized>(rng: &mut R) -> FeatureCollection<RiskProperties> {
    FeatureCollection::new(
        RISK_REGIONS
            .iter()
            .map(|region| {
                let estimate = estimate_zeta_c(rng);
                Feature::at_region(
                    region,
                    RiskProperties {
                        id: region.id,
                        zeta_c: estimate.zeta_c,
                        confidence: estimate.confidence,
                        tier: risk_tier(estimate.zeta_c),
                    },
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_risk_tier_thresholds() {
        assert_eq!(risk_tier(0.95), "1");
        assert_eq!(risk_tier(0.8), "2");
        assert_eq!(risk_tier(0.61), "2");
        assert_eq!(risk_tier(0.6), "3");
        assert_eq!(risk_tier(-0.2), "3");
    }

    #[test]
    fn test_estimate_is_deterministic_for_seed() {
        let a = estimate_zeta_c(&mut StdRng::seed_from_u64(42));
        let b = estimate_zeta_c(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_estimate_mean_near_offset() {
        // Sample std is ~0.58, so the mean of 1000 draws sits well within 0.2
        // of the offset, which itself is in [0, 0.2)
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let estimate = estimate_zeta_c(&mut rng);
            assert!(estimate.zeta_c > -0.2 && estimate.zeta_c < 0.4);
            assert!(estimate.confidence >= 0.0);
            assert!(estimate.confidence.is_finite());
        }
    }

    #[test]
    fn test_collection_has_tier_per_region() {
        let mut rng = StdRng::seed_from_u64(3);
        let collection = zeta_c_collection(&mut rng);
        let ids: Vec<_> = collection.features.iter().map(|f| f.properties.id).collect();
        assert_eq!(ids, vec!["Kyiv", "Taipei", "Anchorage"]);

        for feature in &collection.features {
            assert_eq!(feature.properties.tier, risk_tier(feature.properties.zeta_c));
        }

        let value = serde_json::to_value(&collection).unwrap();
        assert!(value["features"][0]["properties"]["ζ_c"].is_number());
    }
}
