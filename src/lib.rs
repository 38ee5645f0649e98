//! XForm Maker Library.
//! Dokument-Modell, JSON-Lines-Format und Ausgabe-Adapter rund um den
//! Interpolations-Kern `xform_path_engine`.

pub mod app;
pub mod core;
pub mod jsonl;
pub mod render;
pub mod shared;

pub use crate::core::{Rect, Rotation, Waypoint, XForm};
pub use app::{Preview, build_preview, try_build_preview};
pub use jsonl::{parse_xforms_jsonl, write_xforms_jsonl};
pub use render::{Keyframe, KeyframeSpec, css_keyframes, project_keyframes, svg_path_data};
pub use shared::XformOptions;
pub use xform_path_engine::{InterpolationMode, PathError, PathParams, Point2D, build_path};
