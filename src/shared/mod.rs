//! Geteilte Typen und Konfiguration.

pub mod options;

pub use options::XformOptions;
pub use options::{ANIMATION_NAME_PREFIX, KEYFRAME_PRECISION};
