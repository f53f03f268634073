use crate::math::Point2;

use super::TubeBoundary;

/// Reports whether a footprint has left the tube.
///
/// True iff **any** vertex lies strictly outside the boundary polygon. Only
/// vertices are tested: an edge that crosses the wall between two inside
/// vertices goes undetected. That gap is a known, deliberate simplification
/// of the detector, pinned by `edge_crossing_between_vertices_not_detected`
/// below.
#[must_use]
pub fn is_colliding(boundary: &TubeBoundary, vertices: &[Point2]) -> bool {
    vertices.iter().any(|v| !boundary.contains(v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

    use super::*;
    use crate::math::Vector2;
    use crate::path::{Path, Pose, Segment};
    use crate::train::{footprint, CartConfig};
    use crate::tube::SamplingParams;

    fn straight_tube() -> TubeBoundary {
        let path = Path::new(
            Pose::new(-300.0, 42.5, 0.0),
            vec![Segment::Straight { length: 300.0 }],
        )
        .unwrap();
        TubeBoundary::build(&path, 42.5, SamplingParams::default()).unwrap()
    }

    #[test]
    fn cart_inside_tube_does_not_collide() {
        // Cart width 65 in a tube of width 85, centered: 10 units of
        // clearance on each side.
        let cfg = CartConfig::new(65.0, 65.0, 25.0, 65.0).unwrap();
        let fp = footprint(Pose::new(-150.0, 42.5, 0.0), &cfg);
        assert!(!is_colliding(&straight_tube(), fp.vertices()));
    }

    #[test]
    fn cart_past_the_wall_collides() {
        let cfg = CartConfig::new(65.0, 65.0, 25.0, 65.0).unwrap();
        // Shifted 20 up: top edge at 42.5 + 20 + 32.5 = 95 > 85.
        let fp = footprint(Pose::new(-150.0, 62.5, 0.0), &cfg);
        assert!(is_colliding(&straight_tube(), fp.vertices()));

        // Fully outside the tube.
        let fp = footprint(Pose::new(-150.0, 200.0, 0.0), &cfg);
        assert!(is_colliding(&straight_tube(), fp.vertices()));
    }

    #[test]
    fn vertex_on_the_wall_does_not_collide() {
        // Cart width exactly the tube width: vertices land on both walls,
        // and boundary points count as inside.
        let cfg = CartConfig::new(65.0, 85.0, 25.0, 65.0).unwrap();
        let fp = footprint(Pose::new(-150.0, 42.5, 0.0), &cfg);
        assert!(!is_colliding(&straight_tube(), fp.vertices()));
    }

    #[test]
    fn edge_crossing_between_vertices_not_detected() {
        // Inside a 90° bend, a chord between two points near the inner wall
        // dips outside the tube while its endpoints stay inside. All four
        // vertices in-tube, one edge midpoint out: the vertex-only test must
        // report no collision.
        let path = Path::new(
            Pose::new(-300.0, 42.5, 0.0),
            vec![
                Segment::Straight { length: 300.0 },
                Segment::Arc {
                    radius: 100.0,
                    turn: FRAC_PI_2,
                },
                Segment::Straight { length: 300.0 },
            ],
        )
        .unwrap();
        let tube = TubeBoundary::build(&path, 42.5, SamplingParams::default()).unwrap();

        // Arc center of the bend; points toward the path at heading θ lie
        // along (sin θ, −cos θ) from it. Inner wall radius = 100 − 42.5.
        let center = Point2::new(0.0, 142.5);
        let radial =
            |theta: f64, rho: f64| center + Vector2::new(theta.sin(), -theta.cos()) * rho;

        let near_wall_a = radial(FRAC_PI_6, 58.5);
        let near_wall_b = radial(FRAC_PI_3, 58.5);
        let deep_a = radial(FRAC_PI_6, 80.0);
        let deep_b = radial(FRAC_PI_3, 80.0);
        let quad = [near_wall_a, near_wall_b, deep_b, deep_a];

        for (i, v) in quad.iter().enumerate() {
            assert!(tube.contains(v), "vertex {i} should be inside");
        }
        // The chord midpoint between the near-wall vertices has left the tube.
        let midpoint = nalgebra::center(&near_wall_a, &near_wall_b);
        assert!(!tube.contains(&midpoint), "midpoint should be outside");

        // The documented limitation: no collision reported.
        assert!(!is_colliding(&tube, &quad));
    }
}
