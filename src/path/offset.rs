use super::{Path, Pose};

/// A path shifted laterally from a centerline by a constant distance.
///
/// Every pose is the base pose translated along the local left-hand normal;
/// positive offsets shift left of the direction of travel. The heading is
/// carried over unchanged — a parallel-curve approximation that is exact for
/// straight runs and adequate for consumers that only need the tangent
/// direction, not an arc-length-preserving parallel curve.
#[derive(Debug, Clone)]
pub struct OffsetPath {
    base: Path,
    lateral_offset: f64,
}

impl OffsetPath {
    /// Wraps a centerline with a fixed signed lateral offset.
    #[must_use]
    pub fn new(base: Path, lateral_offset: f64) -> Self {
        Self {
            base,
            lateral_offset,
        }
    }

    /// Evaluates the shifted pose at arc-length `s`.
    ///
    /// Same domain and extrapolation policy as [`Path::pose_at`].
    #[must_use]
    pub fn pose_at(&self, s: f64) -> Pose {
        let pose = self.base.pose_at(s);
        Pose {
            position: pose.position + pose.normal() * self.lateral_offset,
            heading: pose.heading,
        }
    }

    /// Samples `count` poses uniformly over `[from, to]`, endpoints included.
    #[must_use]
    pub fn sample(&self, from: f64, to: f64, count: usize) -> Vec<Pose> {
        self.base
            .sample(from, to, count)
            .into_iter()
            .map(|pose| Pose {
                position: pose.position + pose.normal() * self.lateral_offset,
                heading: pose.heading,
            })
            .collect()
    }

    /// Returns the underlying centerline.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the configured lateral offset.
    #[must_use]
    pub fn lateral_offset(&self) -> f64 {
        self.lateral_offset
    }
}
