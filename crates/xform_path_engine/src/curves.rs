//! Reine Kurven-Auswertung: Bézier (Grad 2, 3, n) und Catmull-Rom.
//!
//! Alle Funktionen sind zustandslos und liefern an `t = 0` bzw. `t = 1`
//! exakt den Start- bzw. Endpunkt der jeweiligen Kurve.

use crate::point::Point2D;

/// Zwei Bézier-Kontrollpunkte, abgeleitet aus einem Catmull-Rom-Fenster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointPair {
    pub cp1: Point2D,
    pub cp2: Point2D,
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Point2D, p1: Point2D, p2: Point2D, t: f64) -> Point2D {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·CP1 + 3(1-t)t²·CP2 + t³·P1
pub fn cubic_bezier(p0: Point2D, cp1: Point2D, cp2: Point2D, p1: Point2D, t: f64) -> Point2D {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * cp1 + 3.0 * inv * t2 * cp2 + t2 * t * p1
}

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// Die Kurve verläuft von `p1` nach `p2`; `p0` und `p3` bestimmen nur die
/// Tangenten. An den Rändern der Sequenz übergibt der Aufrufer den Randpunkt
/// selbst als Nachbarn (geklemmt, kein Wraparound, keine Spiegelung). Das
/// ergibt am Rand eine flachere Tangente als ein offener Spline.
pub fn catmull_rom(p0: Point2D, p1: Point2D, p2: Point2D, p3: Point2D, t: f64) -> Point2D {
    // Randwerte direkt zurückgeben: die Polynomform trifft p1/p2 sonst nur bis auf Rundung
    if t <= 0.0 {
        return p1;
    }
    if t >= 1.0 {
        return p2;
    }
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Wandelt ein Catmull-Rom-Fenster in kubische Bézier-Kontrollpunkte um.
///
/// `cp1 = p1 + (p2 - p0) · tension / 3`
/// `cp2 = p2 - (p3 - p1) · tension / 3`
///
/// Bei `tension = 0.5` entspricht das exakt dem Catmull-Rom-Segment p1→p2.
pub fn control_points_from_catmull_rom(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    tension: f64,
) -> ControlPointPair {
    let k = tension / 3.0;
    ControlPointPair {
        cp1: p1 + (p2 - p0) * k,
        cp2: p2 - (p3 - p1) * k,
    }
}

/// Binomialkoeffizient C(n, k) über die multiplikative Formel.
///
/// Nutzt die Symmetrie C(n, k) = C(n, n-k) für k > n/2. Jedes Zwischenergebnis
/// ist selbst ein Binomialkoeffizient und wird auf die nächste Ganzzahl
/// gerundet, das Ergebnis ist daher immer ganzzahlig (exakt bis 2^53).
/// Für k > n wird 0 geliefert.
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = if k > n / 2 { n - k } else { k };
    (1..=k).fold(1.0, |acc, i| (acc * (n + 1 - i) as f64 / i as f64).round())
}

/// Bézier-Kurve vom Grad n-1 über alle Kontrollpunkte.
///
/// Ausgewertet per de Casteljau (nur Konvexkombinationen), daher auch bei
/// hohem Grad endlich. Identisch zur Bernstein-Form mit `binomial_coefficient`,
/// deren Koeffizienten ab ca. 1030 Punkten über f64 hinauswachsen.
/// Leere Eingabe liefert den Ursprung, ein einzelner Punkt sich selbst.
pub fn generalized_bezier(control_points: &[Point2D], t: f64) -> Point2D {
    let Some((&first, rest)) = control_points.split_first() else {
        return Point2D::ZERO;
    };
    let Some(&last) = rest.last() else {
        return first;
    };
    if t <= 0.0 {
        return first;
    }
    if t >= 1.0 {
        return last;
    }

    let inv = 1.0 - t;
    let mut work = control_points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i] * inv + work[i + 1] * t;
        }
    }
    work[0]
}
