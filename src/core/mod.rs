//! Core-Domänentypen: Transformation, Rechteck, Rotation, Wegpunkt.

pub mod xform;

pub use xform::{DEFAULT_DURATION_MS, Rect, Rotation, Waypoint, XForm};
