//! Pfad-Aufbau: Modus-Dispatch, Segment-Zerlegung und Endpunkt-Snap.
//!
//! Jeder Aufruf bekommt die vollständige Wegpunkt-Liste und den Modus und
//! liefert einen frischen Pfad. Es wird kein Zustand zwischen Aufrufen gehalten.

use crate::curves::{
    catmull_rom, control_points_from_catmull_rom, cubic_bezier, generalized_bezier,
    quadratic_bezier,
};
use crate::error::PathError;
use crate::mode::InterpolationMode;
use crate::params::PathParams;
use crate::point::{Point2D, validate_waypoints};

/// Auswertbare Kurve eines einzelnen Segments `waypoints[i] → waypoints[i + 1]`.
#[derive(Debug, Clone, Copy)]
enum SegmentCurve {
    /// Catmull-Rom mit geklemmten Nachbarn
    CatmullRom([Point2D; 4]),
    /// Kubische Bézier mit aus Catmull-Rom abgeleiteten Kontrollpunkten
    Cubic {
        start: Point2D,
        cp1: Point2D,
        cp2: Point2D,
        end: Point2D,
    },
}

impl SegmentCurve {
    fn eval(&self, t: f64) -> Point2D {
        match *self {
            Self::CatmullRom([p0, p1, p2, p3]) => catmull_rom(p0, p1, p2, p3, t),
            Self::Cubic {
                start,
                cp1,
                cp2,
                end,
            } => cubic_bezier(start, cp1, cp2, end, t),
        }
    }
}

/// Vier-Punkt-Fenster für Segment `seg`, Indizes an den Rändern geklemmt.
///
/// `i0 = max(0, seg-1)`, `i1 = seg`, `i2 = seg+1`, `i3 = min(n-1, seg+2)`
fn neighbor_window(waypoints: &[Point2D], seg: usize) -> [Point2D; 4] {
    let last = waypoints.len() - 1;
    [
        waypoints[seg.saturating_sub(1)],
        waypoints[seg],
        waypoints[seg + 1],
        waypoints[(seg + 2).min(last)],
    ]
}

/// Berechnet den abgetasteten Pfad für `waypoints` im Modus `mode`.
///
/// - `n == 2`: immer `[p0, p1]`, unabhängig vom Modus
/// - `Linear`: Wegpunkte unverändert
/// - `NPointApprox`: eine Bézier-Kurve über alle Punkte, `approx_samples` Punkte
/// - `Gravity` mit `n == 3`: quadratische Bézier, Mittelpunkt = Kontrollpunkt
/// - `Gravity` sonst: kubische Bézier je Segment (Catmull-Rom-Kontrollpunkte)
/// - `PassThrough`: Catmull-Rom je Segment
///
/// Der erste Punkt ist immer der rohe erste Wegpunkt, jedes Segment liefert
/// nur `t ∈ (0, 1]`, der letzte Punkt wird exakt auf den letzten Wegpunkt gesetzt.
pub fn build_path(
    waypoints: &[Point2D],
    mode: InterpolationMode,
    params: &PathParams,
) -> Result<Vec<Point2D>, PathError> {
    validate_waypoints(waypoints)?;
    params.validate()?;

    let n = waypoints.len();
    let mut path = if n == 2 {
        waypoints.to_vec()
    } else {
        match mode {
            InterpolationMode::Linear => waypoints.to_vec(),
            InterpolationMode::NPointApprox => sample_generalized(waypoints, params.approx_samples),
            InterpolationMode::Gravity if n == 3 => sample_quadratic(
                waypoints[0],
                waypoints[1],
                waypoints[2],
                params.samples_per_segment,
            ),
            InterpolationMode::Gravity => {
                sample_segments(waypoints, params.samples_per_segment, |window| {
                    let [p0, p1, p2, p3] = window;
                    let cps = control_points_from_catmull_rom(p0, p1, p2, p3, params.tension);
                    SegmentCurve::Cubic {
                        start: p1,
                        cp1: cps.cp1,
                        cp2: cps.cp2,
                        end: p2,
                    }
                })
            }
            InterpolationMode::PassThrough => {
                sample_segments(waypoints, params.samples_per_segment, SegmentCurve::CatmullRom)
            }
        }
    };

    snap_end(&mut path, waypoints[n - 1]);

    log::debug!(
        "Pfad berechnet: {} Wegpunkte, Modus '{}', {} Punkte",
        n,
        mode,
        path.len()
    );
    Ok(path)
}

/// Länge des Pfads, den `build_path` für diese Eingabe liefert.
///
/// Hängt nur von Punktzahl, Modus und Parametern ab, nicht von den Koordinaten.
/// Für `waypoint_count < 2` wird 0 geliefert.
pub fn expected_path_len(
    waypoint_count: usize,
    mode: InterpolationMode,
    params: &PathParams,
) -> usize {
    match (waypoint_count, mode) {
        (0 | 1, _) => 0,
        (2, _) => 2,
        (n, InterpolationMode::Linear) => n,
        (_, InterpolationMode::NPointApprox) => params.approx_samples,
        (3, InterpolationMode::Gravity) => 1 + params.samples_per_segment,
        (n, _) => (n - 1)
            .saturating_mul(params.samples_per_segment)
            .saturating_add(1),
    }
}

/// Tastet alle Segmente ab; `make_curve` baut die Kurve aus dem Nachbar-Fenster.
fn sample_segments(
    waypoints: &[Point2D],
    samples_per_segment: usize,
    make_curve: impl Fn([Point2D; 4]) -> SegmentCurve,
) -> Vec<Point2D> {
    let segments = waypoints.len() - 1;
    let mut result =
        Vec::with_capacity(segments.saturating_mul(samples_per_segment).saturating_add(1));
    result.push(waypoints[0]);

    for seg in 0..segments {
        let curve = make_curve(neighbor_window(waypoints, seg));
        // t = 0 liefert das Ende des Vorgänger-Segments, daher ab Schritt 1
        for step in 1..=samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            result.push(curve.eval(t));
        }
    }

    result
}

fn sample_quadratic(p0: Point2D, control: Point2D, p2: Point2D, samples: usize) -> Vec<Point2D> {
    let mut result = Vec::with_capacity(samples + 1);
    result.push(p0);
    for step in 1..=samples {
        let t = step as f64 / samples as f64;
        result.push(quadratic_bezier(p0, control, p2, t));
    }
    result
}

fn sample_generalized(waypoints: &[Point2D], samples: usize) -> Vec<Point2D> {
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| generalized_bezier(waypoints, i as f64 / last))
        .collect()
}

/// Setzt den letzten Pfadpunkt exakt auf `end` (Schutz gegen Rundungsfehler).
fn snap_end(path: &mut Vec<Point2D>, end: Point2D) {
    match path.last_mut() {
        Some(last) if *last != end => {
            log::trace!("Endpunkt-Snap: {:?} -> {:?}", *last, end);
            *last = end;
        }
        Some(_) => {}
        None => path.push(end),
    }
}
