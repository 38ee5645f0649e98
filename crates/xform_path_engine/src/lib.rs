//! Interpolations-Kern des XForm Makers.
//!
//! Nimmt eine geordnete Wegpunkt-Liste (Start, Zwischenpunkte, Ende) und einen
//! Interpolationsmodus entgegen und liefert eine abgetastete Punktliste.
//! Kein Wissen über DOM, Speicher oder Rendering.

pub mod curves;
pub mod error;
pub mod mode;
pub mod params;
pub mod path;
pub mod point;

pub use curves::{
    ControlPointPair, binomial_coefficient, catmull_rom, control_points_from_catmull_rom,
    cubic_bezier, generalized_bezier, quadratic_bezier,
};
pub use error::PathError;
pub use mode::InterpolationMode;
pub use params::PathParams;
pub use path::{build_path, expected_path_len};
pub use point::{Point2D, validate_waypoints};
