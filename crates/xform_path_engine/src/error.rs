//! Fehler-Taxonomie des Interpolations-Kerns.

use thiserror::Error;

/// Fehler bei der Pfad-Berechnung.
///
/// Alle Fehler sind deterministisch: ein erneuter Aufruf mit identischer
/// Eingabe liefert denselben Fehler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Weniger als 2 Wegpunkte übergeben
    #[error("mindestens 2 Wegpunkte erforderlich, erhalten: {count}")]
    InsufficientPoints { count: usize },
    /// Wegpunkt mit nicht-endlichen Koordinaten (NaN/Infinity)
    #[error("Wegpunkt {index} ist ungültig: ({x}, {y})")]
    InvalidPoint { index: usize, x: f64, y: f64 },
    /// Unbekannter Modus-Tag (nur bei strikter Auswertung)
    #[error("unbekannter Interpolationsmodus: '{0}'")]
    UnknownMode(String),
    /// Ungültige Abtast-Parameter
    #[error("ungültige Pfad-Parameter: {0}")]
    InvalidParams(String),
}
