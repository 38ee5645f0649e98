//! Interpolationsmodus: bestimmt, wie aus den Wegpunkten ein Pfad wird.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpolationsmodus des Pfads.
///
/// Der Modus ist unabhängig von den Wegpunkten: dieselben Punkte ergeben je
/// nach Modus einen anderen Pfad. Wird bei jedem Aufruf explizit übergeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterpolationMode {
    /// Gerade Polyline durch alle Wegpunkte (keine Abtastung)
    Linear,
    /// Catmull-Rom: Kurve läuft exakt durch jeden Wegpunkt
    #[default]
    PassThrough,
    /// Bézier-Zug: Zwischenpunkte ziehen die Kurve an, ohne sie zu berühren
    Gravity,
    /// Eine einzige Bézier-Kurve vom Grad n-1 über alle Wegpunkte
    NPointApprox,
}

impl InterpolationMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [Self; 4] = [
        Self::Linear,
        Self::PassThrough,
        Self::Gravity,
        Self::NPointApprox,
    ];

    /// Tag wie im gespeicherten Dokument.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::PassThrough => "passthrough",
            Self::Gravity => "gravity",
            Self::NPointApprox => "approx",
        }
    }

    /// Toleranter Parser: unbekannte Tags fallen auf `PassThrough` zurück.
    pub fn from_tag_lenient(tag: &str) -> Self {
        match tag.parse::<Self>() {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("{}, verwende '{}'", e, Self::PassThrough.as_tag());
                Self::PassThrough
            }
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_tag() == tag)
            .ok_or_else(|| PathError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<String> for InterpolationMode {
    fn from(tag: String) -> Self {
        Self::from_tag_lenient(&tag)
    }
}

impl From<InterpolationMode> for String {
    fn from(mode: InterpolationMode) -> Self {
        mode.as_tag().to_string()
    }
}
