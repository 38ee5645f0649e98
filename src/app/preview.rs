//! Use-Case: Vorschau einer Transformation (Pfad, SVG-Daten, CSS-Keyframes).

use crate::core::XForm;
use crate::render::{Keyframe, KeyframeSpec, css_keyframes, project_keyframes, svg_path_data};
use crate::shared::XformOptions;
use anyhow::{Context, Result};
use xform_path_engine::{InterpolationMode, Point2D, build_path};

/// Ergebnis einer Vorschau-Berechnung.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Tatsächlich verwendeter Modus
    pub mode: InterpolationMode,
    pub path: Vec<Point2D>,
    /// `d`-Attribut für SVG
    pub svg_path: String,
    pub keyframes: Vec<Keyframe>,
    /// `@keyframes`-Block
    pub css: String,
}

/// Berechnet die Vorschau einer Transformation.
///
/// Modus-Priorität: `mode_override` → Modus des Dokuments → `options.default_mode`.
pub fn build_preview(
    xform: &XForm,
    options: &XformOptions,
    mode_override: Option<InterpolationMode>,
) -> Result<Preview> {
    let mode = mode_override.unwrap_or_else(|| xform.effective_mode(options.default_mode));
    let waypoints = xform.waypoint_sequence();

    let path = build_path(&waypoints, mode, &options.path_params()).with_context(|| {
        format!(
            "Pfad für XForm {} ('{}') konnte nicht berechnet werden",
            xform.id, xform.name
        )
    })?;

    let keyframes = project_keyframes(&path, &KeyframeSpec::from_xform(xform));
    let css = css_keyframes(
        &options.animation_name(xform.id),
        &keyframes,
        options.keyframe_precision,
    );

    Ok(Preview {
        mode,
        svg_path: svg_path_data(&path),
        path,
        keyframes,
        css,
    })
}

/// Wie `build_preview`, aber Fehler werden nur geloggt.
///
/// `None` bedeutet: Pfad nicht zeichnen, bisherige Darstellung beibehalten.
pub fn try_build_preview(
    xform: &XForm,
    options: &XformOptions,
    mode_override: Option<InterpolationMode>,
) -> Option<Preview> {
    match build_preview(xform, options, mode_override) {
        Ok(preview) => Some(preview),
        Err(e) => {
            log::warn!("Vorschau übersprungen: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rect, Rotation};

    fn arc() -> XForm {
        let mut xform = XForm::new(
            3,
            "Bogen",
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(200.0, 0.0, 20.0, 20.0),
        );
        xform.add_waypoint(Point2D::new(110.0, -90.0));
        xform.end_rotation = Rotation::new(0.0, 0.0, 180.0);
        xform
    }

    #[test]
    fn test_preview_uses_options_default_mode() {
        let mut options = XformOptions::default();
        options.default_mode = InterpolationMode::Gravity;
        options.samples_per_segment = 4;

        let preview = build_preview(&arc(), &options, None).unwrap();
        assert_eq!(preview.mode, InterpolationMode::Gravity);
        assert_eq!(preview.path.len(), 5);
        assert_eq!(preview.keyframes.len(), 5);
        assert!(preview.svg_path.starts_with("M 10,10 L "));
        assert!(preview.css.starts_with("@keyframes xform-3 {"));
        assert!(preview.css.contains("rotateZ(180deg)"));
    }

    #[test]
    fn test_override_beats_document_mode() {
        let mut xform = arc();
        xform.mode = Some(InterpolationMode::Gravity);
        let preview = build_preview(
            &xform,
            &XformOptions::default(),
            Some(InterpolationMode::Linear),
        )
        .unwrap();
        assert_eq!(preview.mode, InterpolationMode::Linear);
        assert_eq!(preview.path, xform.waypoint_sequence());
    }

    #[test]
    fn test_invalid_geometry_is_skipped() {
        let mut xform = arc();
        xform.add_waypoint(Point2D::new(f64::NAN, 0.0));
        assert!(build_preview(&xform, &XformOptions::default(), None).is_err());
        assert!(try_build_preview(&xform, &XformOptions::default(), None).is_none());
    }
}
