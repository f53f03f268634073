use crate::math::Point2;
use crate::path::Pose;

use super::CartConfig;

/// Rectangular footprint of one cart at a given coupler pose.
///
/// Vertex order is fixed — front-left, front-right, rear-right, rear-left —
/// forming a simple (non-self-intersecting) quadrilateral, which the
/// containment test relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartFootprint {
    vertices: [Point2; 4],
}

impl CartFootprint {
    /// Returns the vertices in order: front-left, front-right, rear-right,
    /// rear-left.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Front-left corner.
    #[must_use]
    pub fn front_left(&self) -> Point2 {
        self.vertices[0]
    }

    /// Front-right corner.
    #[must_use]
    pub fn front_right(&self) -> Point2 {
        self.vertices[1]
    }

    /// Rear-right corner.
    #[must_use]
    pub fn rear_right(&self) -> Point2 {
        self.vertices[2]
    }

    /// Rear-left corner.
    #[must_use]
    pub fn rear_left(&self) -> Point2 {
        self.vertices[3]
    }
}

/// Triangular nose cone of the lead cart.
///
/// The base always coincides with the cart's front edge; the apex extends
/// `nose_length` ahead of the front center along the heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoseCone {
    vertices: [Point2; 3],
}

impl NoseCone {
    /// Returns the vertices in order: front-left, front-right, apex.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Apex of the cone.
    #[must_use]
    pub fn apex(&self) -> Point2 {
        self.vertices[2]
    }
}

/// Builds a cart's rectangular footprint from its coupler (front-center) pose.
///
/// The rear center sits `cart_length` behind the front center along the
/// heading; the side corners sit half the cart width along the left normal
/// on each side.
#[must_use]
pub fn footprint(coupler: Pose, config: &CartConfig) -> CartFootprint {
    let front = coupler.position;
    let rear = front - coupler.tangent() * config.cart_length;
    let side = coupler.normal() * (config.cart_width / 2.0);
    CartFootprint {
        vertices: [front + side, front - side, rear - side, rear + side],
    }
}

/// Builds the nose cone flush with the front edge of the cart at `coupler`.
///
/// The base vertices are taken from the footprint itself, never recomputed
/// separately, so the flush invariant holds exactly whenever the footprint is
/// rebuilt.
#[must_use]
pub fn nose_cone(coupler: Pose, config: &CartConfig) -> NoseCone {
    let body = footprint(coupler, config);
    let front_left = body.front_left();
    let front_right = body.front_right();
    let front_center = nalgebra::center(&front_left, &front_right);
    let apex = front_center + coupler.tangent() * config.nose_length;
    NoseCone {
        vertices: [front_left, front_right, apex],
    }
}

/// Geometric center of the cart body: midway between front and rear edges.
#[must_use]
pub fn cart_center(coupler: Pose, config: &CartConfig) -> Point2 {
    coupler.position - coupler.tangent() * (config.cart_length / 2.0)
}
