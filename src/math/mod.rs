pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the unit tangent direction for a heading angle: `(cos θ, sin θ)`.
#[must_use]
pub fn heading_vector(theta: f64) -> Vector2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Returns the left-pointing unit normal for a heading angle: `(-sin θ, cos θ)`.
#[must_use]
pub fn unit_normal(theta: f64) -> Vector2 {
    Vector2::new(-theta.sin(), theta.cos())
}
