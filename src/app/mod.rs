//! Use-Cases über dem Interpolations-Kern.

pub mod preview;

pub use preview::{Preview, build_preview, try_build_preview};
