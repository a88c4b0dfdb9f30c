use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// One value per resonance mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeValues {
    pub fundamental: f64,
    pub second_harmonic: f64,
    pub third_harmonic: f64,
    pub fourth_harmonic: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InterferenceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchumannReading {
    pub timestamp: DateTime<Utc>,
    /// Hz
    pub frequencies: ModeValues,
    pub amplitudes: ModeValues,
    /// Normalized to [0, 1)
    pub anomaly_score: f64,
    pub interference_level: InterferenceLevel,
}

// Mode bands, Hz
const FUNDAMENTAL_HZ: (f64, f64) = (7.8, 8.2);
const SECOND_HZ: (f64, f64) = (14.1, 14.4);
const THIRD_HZ: (f64, f64) = (20.3, 20.9);
const FOURTH_HZ: (f64, f64) = (26.4, 27.3);

const FUNDAMENTAL_AMP: (f64, f64) = (0.5, 2.0);
const SECOND_AMP: (f64, f64) = (0.2, 0.8);
const THIRD_AMP: (f64, f64) = (0.1, 0.5);
const FOURTH_AMP: (f64, f64) = (0.05, 0.3);

fn draw<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..high)
}

/// Generate a mock Schumann resonance reading
pub fn read_schumann<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> SchumannReading {
    let frequencies = ModeValues {
        fundamental: draw(rng, FUNDAMENTAL_HZ),
        second_harmonic: draw(rng, SECOND_HZ),
        third_harmonic: draw(rng, THIRD_HZ),
        fourth_harmonic: draw(rng, FOURTH_HZ),
    };
    let amplitudes = ModeValues {
        fundamental: draw(rng, FUNDAMENTAL_AMP),
        second_harmonic: draw(rng, SECOND_AMP),
        third_harmonic: draw(rng, THIRD_AMP),
        fourth_harmonic: draw(rng, FOURTH_AMP),
    };
    let interference_level = match rng.gen_range(0..3) {
        0 => InterferenceLevel::Low,
        1 => InterferenceLevel::Medium,
        _ => InterferenceLevel::High,
    };

    SchumannReading {
        timestamp: now,
        frequencies,
        amplitudes,
        anomaly_score: rng.gen::<f64>(),
        interference_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_band(value: f64, (low, high): (f64, f64)) -> bool {
        value >= low && value < high
    }

    #[test]
    fn test_readings_stay_in_mode_bands() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let reading = read_schumann(&mut rng, Utc::now());
            assert!(in_band(reading.frequencies.fundamental, FUNDAMENTAL_HZ));
            assert!(in_band(reading.frequencies.second_harmonic, SECOND_HZ));
            assert!(in_band(reading.frequencies.third_harmonic, THIRD_HZ));
            assert!(in_band(reading.frequencies.fourth_harmonic, FOURTH_HZ));
            assert!(in_band(reading.amplitudes.fundamental, FUNDAMENTAL_AMP));
            assert!(in_band(reading.amplitudes.fourth_harmonic, FOURTH_AMP));
            assert!(in_band(reading.anomaly_score, (0.0, 1.0)));
        }
    }

    #[test]
    fn test_interference_level_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&InterferenceLevel::Medium).unwrap(),
            "\"MEDIUM\""
        );
    }
}
