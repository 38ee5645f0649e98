//! 2D-Punkt und Validierung von Wegpunkt-Sequenzen.

use crate::error::PathError;

/// Punkt im Canvas-Raum (Pixel, f64).
pub type Point2D = glam::DVec2;

/// Prüft eine Wegpunkt-Sequenz vor der Kurven-Berechnung.
///
/// - weniger als 2 Punkte → `InsufficientPoints`
/// - NaN/Infinity in einer Koordinate → `InvalidPoint` (erster Treffer)
pub fn validate_waypoints(waypoints: &[Point2D]) -> Result<(), PathError> {
    if waypoints.len() < 2 {
        return Err(PathError::InsufficientPoints {
            count: waypoints.len(),
        });
    }
    if let Some((index, p)) = waypoints.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(PathError::InvalidPoint {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_single_point() {
        let err = validate_waypoints(&[Point2D::ZERO]).unwrap_err();
        assert_eq!(err, PathError::InsufficientPoints { count: 1 });
    }

    #[test]
    fn test_validate_reports_first_non_finite_index() {
        let pts = [
            Point2D::ZERO,
            Point2D::new(f64::NAN, 1.0),
            Point2D::new(2.0, f64::INFINITY),
        ];
        match validate_waypoints(&pts) {
            Err(PathError::InvalidPoint { index, .. }) => assert_eq!(index, 1),
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_two_finite_points() {
        assert!(validate_waypoints(&[Point2D::ZERO, Point2D::new(1.0, 1.0)]).is_ok());
    }
}
