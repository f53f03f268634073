use crate::error::{ConfigError, Result};
use crate::math::{heading_vector, unit_normal, TOLERANCE};

use super::Pose;

/// A primitive path segment, laid end-to-end with its neighbors.
///
/// The set of primitive shapes is closed: every consumer dispatches by
/// exhaustive match, so adding a segment kind is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A straight run of the given length.
    Straight {
        /// Length along the heading (must be positive).
        length: f64,
    },
    /// A circular arc of the given radius, turning by `turn` radians.
    Arc {
        /// Circle radius (must be positive).
        radius: f64,
        /// Signed total turn angle; positive turns left (counter-clockwise).
        turn: f64,
    },
}

impl Segment {
    /// Returns the arc length covered by this segment.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        match *self {
            Self::Straight { length } => length,
            Self::Arc { radius, turn } => radius * turn.abs(),
        }
    }

    /// Evaluates the pose `ds` arc-length units past `start` along this
    /// segment's geometry.
    ///
    /// `ds` is not clamped to the segment's own length: values below `0` or
    /// beyond [`Self::arc_length`] continue the same straight line or circle,
    /// which is exactly the extrapolation the path model needs at its ends.
    #[must_use]
    pub fn pose_at(&self, start: Pose, ds: f64) -> Pose {
        match *self {
            Self::Straight { .. } => Pose {
                position: start.position + heading_vector(start.heading) * ds,
                heading: start.heading,
            },
            Self::Arc { radius, turn } => {
                let sign = if turn >= 0.0 { 1.0 } else { -1.0 };
                // Central angle swept after ds; heading change is the same angle.
                let alpha = ds / radius * sign;
                let center = start.position + unit_normal(start.heading) * (radius * sign);
                let heading = start.heading + alpha;
                Pose {
                    position: center - unit_normal(heading) * (radius * sign),
                    heading,
                }
            }
        }
    }

    /// Validates the segment's dimensions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSegment` if the length or radius is not
    /// positive, or an arc's turn angle is zero.
    pub fn validate(&self, index: usize) -> Result<()> {
        match *self {
            Self::Straight { length } => {
                if length < TOLERANCE {
                    return Err(ConfigError::InvalidSegment {
                        index,
                        reason: format!("length must be positive, got {length}"),
                    }
                    .into());
                }
            }
            Self::Arc { radius, turn } => {
                if radius < TOLERANCE {
                    return Err(ConfigError::InvalidSegment {
                        index,
                        reason: format!("radius must be positive, got {radius}"),
                    }
                    .into());
                }
                if turn.abs() < TOLERANCE {
                    return Err(ConfigError::InvalidSegment {
                        index,
                        reason: format!("turn angle must be non-zero, got {turn}"),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
