use super::distance_2d::point_to_segment_dist;
use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns true if `p` lies within `TOLERANCE` of any edge of the closed polygon.
#[must_use]
pub fn point_on_boundary(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 2 {
        return false;
    }
    for i in 0..n {
        let j = (i + 1) % n;
        if point_to_segment_dist(p, &polygon[i], &polygon[j]) < TOLERANCE {
            return true;
        }
    }
    false
}

/// Tests whether `p` lies inside the closed polygon.
///
/// Boundary convention: points on (within `TOLERANCE` of) an edge are
/// classified **inside**. Interior classification uses a ray cast with the
/// half-open edge rule `(y_i > p.y) != (y_j > p.y)`, so each horizontal
/// sweep line crosses every edge at most once and vertex touches are never
/// double-counted.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    if point_on_boundary(p, polygon) {
        return true;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    // ── signed_area tests ──

    #[test]
    fn area_ccw_square() {
        let area = signed_area(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn area_degenerate() {
        assert!(signed_area(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    // ── point_in_polygon tests ──

    #[test]
    fn interior_point() {
        assert!(point_in_polygon(&Point2::new(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn exterior_point() {
        assert!(!point_in_polygon(&Point2::new(1.5, 0.5), &unit_square()));
        assert!(!point_in_polygon(&Point2::new(0.5, -0.5), &unit_square()));
    }

    #[test]
    fn boundary_point_is_inside() {
        // Edge midpoint and corner both count as inside.
        assert!(point_in_polygon(&Point2::new(0.5, 0.0), &unit_square()));
        assert!(point_in_polygon(&Point2::new(1.0, 1.0), &unit_square()));
    }

    #[test]
    fn point_level_with_vertex() {
        // Sweep line through vertices (0,0) and (1,0): the half-open rule
        // must not double-count the shared corner.
        assert!(!point_in_polygon(&Point2::new(-0.5, 0.0), &unit_square()));
        assert!(!point_in_polygon(&Point2::new(2.0, 0.0), &unit_square()));
    }

    #[test]
    fn concave_polygon() {
        // L-shape: notch at the top-right quadrant.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(&Point2::new(0.5, 1.5), &pts));
        assert!(!point_in_polygon(&Point2::new(1.5, 1.5), &pts));
    }

    #[test]
    fn too_few_vertices() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(!point_in_polygon(&Point2::new(0.5, 0.0), &pts));
    }
}
