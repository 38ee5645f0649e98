//! Keyframe-Projektion: Pfad → prozentuale Transform-Keyframes → CSS `@keyframes`.
//!
//! Rotation und Skalierung werden linear über den Pfad-Index interpoliert
//! (nicht über die Bogenlänge). Dadurch ist der Abstand der Prozentwerte allein
//! durch die Pfadlänge bestimmt.

use super::format_number;
use crate::core::{Rotation, XForm};
use std::fmt::Write as _;
use xform_path_engine::Point2D;

/// Start- und Endwerte, die unabhängig vom Pfad interpoliert werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeSpec {
    pub start_rotation: Rotation,
    pub end_rotation: Rotation,
    /// Größe des Start-Rechtecks (Breite, Höhe)
    pub start_size: Point2D,
    /// Größe des End-Rechtecks (Breite, Höhe)
    pub end_size: Point2D,
}

impl KeyframeSpec {
    pub fn from_xform(xform: &XForm) -> Self {
        Self {
            start_rotation: xform.start_rotation,
            end_rotation: xform.end_rotation,
            start_size: xform.start_rect.size(),
            end_size: xform.end_rect.size(),
        }
    }

    /// Skalierung des End-Rechtecks relativ zum Start (Achse mit Startgröße 0 → 1).
    fn end_scale(&self) -> Point2D {
        let axis = |start: f64, end: f64| if start == 0.0 { 1.0 } else { end / start };
        Point2D::new(
            axis(self.start_size.x, self.end_size.x),
            axis(self.start_size.y, self.end_size.y),
        )
    }
}

/// Ein Keyframe der Animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Position in der Animation, 0..=100
    pub percent: f64,
    /// Verschiebung relativ zum ersten Pfadpunkt
    pub translate: Point2D,
    pub rotation: Rotation,
    pub scale: Point2D,
}

/// Projiziert den Pfad auf Keyframes, ein Keyframe pro Pfadpunkt.
///
/// Ein einzelner Punkt ergibt genau einen Keyframe bei 0 %.
pub fn project_keyframes(path: &[Point2D], spec: &KeyframeSpec) -> Vec<Keyframe> {
    let Some(&origin) = path.first() else {
        return Vec::new();
    };
    let last_index = (path.len() - 1).max(1) as f64;
    let end_scale = spec.end_scale();

    path.iter()
        .enumerate()
        .map(|(i, &p)| {
            let progress = i as f64 / last_index;
            Keyframe {
                percent: progress * 100.0,
                translate: p - origin,
                rotation: spec.start_rotation.lerp(&spec.end_rotation, progress),
                scale: Point2D::ONE.lerp(end_scale, progress),
            }
        })
        .collect()
}

/// Formatiert Keyframes als CSS-`@keyframes`-Block.
pub fn css_keyframes(name: &str, frames: &[Keyframe], precision: usize) -> String {
    let num = |v: f64| format_number(v, precision);
    let mut css = String::with_capacity(frames.len() * 96 + name.len() + 16);
    // Schreiben in einen String schlägt nie fehl
    let _ = writeln!(css, "@keyframes {} {{", name);
    for kf in frames {
        let _ = writeln!(
            css,
            "  {}% {{ transform: translate({}px, {}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg) scale({}, {}); }}",
            num(kf.percent),
            num(kf.translate.x),
            num(kf.translate.y),
            num(kf.rotation.x),
            num(kf.rotation.y),
            num(kf.rotation.z),
            num(kf.scale.x),
            num(kf.scale.y),
        );
    }
    css.push_str("}\n");
    css
}
