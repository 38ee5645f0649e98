//! XForm-Dokument: Start-/End-Rechteck, Zwischenpunkte, Rotation, Modus.

use serde::{Deserialize, Serialize};
use xform_path_engine::{InterpolationMode, Point2D};

/// Standard-Animationsdauer in Millisekunden.
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Achsenparalleles Rechteck im Canvas-Raum (Pixel).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Mittelpunkt des Rechtecks
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Größe als Vektor (Breite, Höhe)
    pub fn size(&self) -> Point2D {
        Point2D::new(self.width, self.height)
    }
}

/// Rotation je Achse in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lineare Interpolation je Achse
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Zwischenpunkt im Dokument (`{"x": .., "y": ..}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
}

impl From<Waypoint> for Point2D {
    fn from(wp: Waypoint) -> Self {
        Point2D::new(wp.x, wp.y)
    }
}

impl From<Point2D> for Waypoint {
    fn from(p: Point2D) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Eine gespeicherte Transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XForm {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub start_rect: Rect,
    pub end_rect: Rect,
    /// Nur die Zwischenpunkte, in Einfüge-/Drag-Reihenfolge
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub start_rotation: Rotation,
    #[serde(default)]
    pub end_rotation: Rotation,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Interpolationsmodus; `None` → Standardmodus aus den Optionen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<InterpolationMode>,
    /// Zeitstempel der letzten Änderung (ms seit Epoche)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// Serde-Default für `duration_ms` (ältere Exporte ohne Dauer).
fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl XForm {
    /// Neue Transformation ohne Zwischenpunkte.
    pub fn new(id: u64, name: impl Into<String>, start_rect: Rect, end_rect: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            start_rect,
            end_rect,
            waypoints: Vec::new(),
            start_rotation: Rotation::default(),
            end_rotation: Rotation::default(),
            duration_ms: DEFAULT_DURATION_MS,
            mode: None,
            timestamp: None,
        }
    }

    /// Vollständige Wegpunkt-Sequenz: Start-Mittelpunkt, Zwischenpunkte, End-Mittelpunkt.
    pub fn waypoint_sequence(&self) -> Vec<Point2D> {
        let mut seq = Vec::with_capacity(self.waypoints.len() + 2);
        seq.push(self.start_rect.center());
        seq.extend(self.waypoints.iter().copied().map(Point2D::from));
        seq.push(self.end_rect.center());
        seq
    }

    /// Wirksamer Modus: eigener Modus oder `fallback`.
    pub fn effective_mode(&self, fallback: InterpolationMode) -> InterpolationMode {
        self.mode.unwrap_or(fallback)
    }

    /// Hängt einen Zwischenpunkt an.
    pub fn add_waypoint(&mut self, point: Point2D) {
        self.waypoints.push(point.into());
    }

    /// Entfernt einen Zwischenpunkt; `None` bei ungültigem Index.
    pub fn remove_waypoint(&mut self, index: usize) -> Option<Point2D> {
        (index < self.waypoints.len()).then(|| self.waypoints.remove(index).into())
    }

    /// Verschiebt einen Zwischenpunkt (Drag); `false` bei ungültigem Index.
    pub fn move_waypoint(&mut self, index: usize, position: Point2D) -> bool {
        match self.waypoints.get_mut(index) {
            Some(wp) => {
                *wp = position.into();
                true
            }
            None => false,
        }
    }
}
