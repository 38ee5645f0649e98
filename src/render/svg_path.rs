//! SVG-Pfaddaten (`M x,y L x,y ...`) für die Pfad-Visualisierung.

use super::format_number;
use std::fmt::Write as _;
use xform_path_engine::Point2D;

/// Nachkommastellen der SVG-Koordinaten.
const SVG_PRECISION: usize = 2;

/// Baut das `d`-Attribut eines SVG-`<path>` aus einer Punktliste.
///
/// Leere Eingabe liefert einen leeren String.
pub fn svg_path_data(path: &[Point2D]) -> String {
    let mut d = String::with_capacity(path.len() * 16);
    for (i, p) in path.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        // Schreiben in einen String schlägt nie fehl
        let _ = write!(
            d,
            "{} {},{}",
            cmd,
            format_number(p.x, SVG_PRECISION),
            format_number(p.y, SVG_PRECISION)
        );
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        assert_eq!(svg_path_data(&[]), "");
    }

    #[test]
    fn test_move_then_lines() {
        let path = [
            Point2D::new(0.0, 0.0),
            Point2D::new(50.5, 10.0),
            Point2D::new(100.0, 1.0 / 3.0),
        ];
        assert_eq!(svg_path_data(&path), "M 0,0 L 50.5,10 L 100,0.33");
    }
}
