//! Ausgabe-Adapter für abgetastete Pfade: SVG-Pfaddaten und CSS-Keyframes.
//!
//! Die Adapter kennen nur die fertige Punktliste, nicht die Kurven-Berechnung.

pub mod keyframes;
pub mod svg_path;

pub use keyframes::{Keyframe, KeyframeSpec, css_keyframes, project_keyframes};
pub use svg_path::svg_path_data;

/// Formatiert eine Zahl mit max. `precision` Nachkommastellen, ohne Null-Auffüllung.
///
/// `-0` wird als `0` ausgegeben.
pub(crate) fn format_number(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
