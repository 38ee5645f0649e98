//! Abtast-Parameter für den Pfad-Aufbau.

use crate::error::PathError;
use serde::{Deserialize, Serialize};

/// Standard-Anzahl Abtastpunkte pro Segment.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;
/// Standard-Spannung für die Catmull-Rom→Bézier-Umrechnung.
pub const DEFAULT_TENSION: f64 = 0.5;
/// Feste Gesamt-Punktzahl im N-Punkt-Modus.
pub const DEFAULT_APPROX_SAMPLES: usize = 100;
/// Obergrenze für `samples_per_segment`.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;
/// Obergrenze für `approx_samples`.
pub const MAX_APPROX_SAMPLES: usize = 100_000;

/// Parameter-Bundle für `build_path`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// Abtastpunkte pro Segment (t ∈ (0, 1])
    pub samples_per_segment: usize,
    /// Spannung der Gravity-Kontrollpunkte
    pub tension: f64,
    /// Gesamtzahl der Punkte im N-Punkt-Modus (unabhängig von der Punktzahl)
    pub approx_samples: usize,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            tension: DEFAULT_TENSION,
            approx_samples: DEFAULT_APPROX_SAMPLES,
        }
    }
}

impl PathParams {
    /// Setzt `samples_per_segment` (Builder-Stil).
    pub fn with_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples;
        self
    }

    /// Setzt die Spannung (Builder-Stil).
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Setzt die Punktzahl des N-Punkt-Modus (Builder-Stil).
    pub fn with_approx_samples(mut self, samples: usize) -> Self {
        self.approx_samples = samples;
        self
    }

    pub fn validate(&self) -> Result<(), PathError> {
        if !(1..=MAX_SAMPLES_PER_SEGMENT).contains(&self.samples_per_segment) {
            return Err(PathError::InvalidParams(format!(
                "samples_per_segment muss zwischen 1 und {} liegen, erhalten: {}",
                MAX_SAMPLES_PER_SEGMENT, self.samples_per_segment
            )));
        }
        if !(2..=MAX_APPROX_SAMPLES).contains(&self.approx_samples) {
            return Err(PathError::InvalidParams(format!(
                "approx_samples muss zwischen 2 und {} liegen, erhalten: {}",
                MAX_APPROX_SAMPLES, self.approx_samples
            )));
        }
        if !self.tension.is_finite() {
            return Err(PathError::InvalidParams(format!(
                "tension muss endlich sein, erhalten: {}",
                self.tension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = PathParams::default();
        assert_eq!(params.samples_per_segment, 20);
        assert_eq!(params.approx_samples, 100);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let params = PathParams::default().with_samples_per_segment(0);
        assert!(matches!(
            params.validate(),
            Err(PathError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_oversized_sample_counts_rejected() {
        let params = PathParams::default().with_samples_per_segment(usize::MAX / 2);
        assert!(matches!(
            params.validate(),
            Err(PathError::InvalidParams(_))
        ));
        let params = PathParams::default().with_approx_samples(MAX_APPROX_SAMPLES + 1);
        assert!(params.validate().is_err());

        let at_limit = PathParams::default()
            .with_samples_per_segment(MAX_SAMPLES_PER_SEGMENT)
            .with_approx_samples(MAX_APPROX_SAMPLES);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_non_finite_tension_rejected() {
        let params = PathParams::default().with_tension(f64::NAN);
        assert!(params.validate().is_err());
    }
}
