mod boundary;
mod collision;

pub use boundary::TubeBoundary;
pub use collision::is_colliding;

/// Parameters controlling how densely the tube boundary is sampled.
///
/// The sampled range extends past both path ends so carts queried outside
/// `[0, total_length]` still meet a well-defined wall. Density is a
/// resolution/accuracy trade-off: the maximum chordal deviation from the
/// true arc must stay well below the clearance between cart and tube.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Extra arc-length sampled before the path start.
    pub margin_before: f64,
    /// Extra arc-length sampled past the path end.
    pub margin_after: f64,
    /// Number of centerline samples over the whole range.
    pub samples: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            margin_before: 500.0,
            margin_after: 100.0,
            samples: 1000,
        }
    }
}
