mod offset;
mod segment;

pub use offset::OffsetPath;
pub use segment::Segment;

use crate::error::{ConfigError, Result};
use crate::math::{heading_vector, unit_normal, Point2, Vector2};

/// Position and heading at a point along a path.
///
/// Always recomputed from an arc-length parameter, never stored as
/// independent state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in the plane.
    pub position: Point2,
    /// Heading angle in radians, measured from the +x axis.
    pub heading: f64,
}

impl Pose {
    /// Creates a pose from coordinates and a heading angle.
    #[must_use]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            heading,
        }
    }

    /// Returns the unit tangent direction `(cos θ, sin θ)`.
    #[must_use]
    pub fn tangent(&self) -> Vector2 {
        heading_vector(self.heading)
    }

    /// Returns the left-pointing unit normal `(-sin θ, cos θ)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        unit_normal(self.heading)
    }
}

/// A composite centerline built from segments laid end-to-end.
///
/// The path is parameterized by cumulative arc-length `s`, with `s = 0` at
/// the start pose. Junction poses are chained at construction, so the pose
/// at a segment boundary is bitwise identical whether it is reached from the
/// end of one segment or the start of the next.
#[derive(Debug, Clone)]
pub struct Path {
    segments: Vec<Segment>,
    /// Start pose of each segment; `junctions[0]` is the path's start pose.
    junctions: Vec<Pose>,
    /// Cumulative arc-length at which each segment begins.
    cumulative: Vec<f64>,
    total_length: f64,
}

impl Path {
    /// Creates a path from a start pose and an ordered segment list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyPath` for an empty segment list, or
    /// `ConfigError::InvalidSegment` if any segment has a non-positive
    /// length/radius or a zero turn angle.
    pub fn new(start: Pose, segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyPath.into());
        }

        let mut junctions = Vec::with_capacity(segments.len());
        let mut cumulative = Vec::with_capacity(segments.len());
        let mut pose = start;
        let mut s = 0.0;
        for (index, seg) in segments.iter().enumerate() {
            seg.validate(index)?;
            junctions.push(pose);
            cumulative.push(s);
            pose = seg.pose_at(pose, seg.arc_length());
            s += seg.arc_length();
        }

        Ok(Self {
            segments,
            junctions,
            cumulative,
            total_length: s,
        })
    }

    /// Evaluates the centerline pose at cumulative arc-length `s`.
    ///
    /// Defined for **all** real `s`: queries before the start or past the end
    /// continue the geometry of the boundary segment (a straight keeps its
    /// line, an arc keeps its circle), so a cart that has not yet entered or
    /// has already left the modeled region still reports a valid pose.
    #[must_use]
    pub fn pose_at(&self, s: f64) -> Pose {
        let i = self.segment_index(s);
        self.segments[i].pose_at(self.junctions[i], s - self.cumulative[i])
    }

    /// Total arc-length of the path.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the start pose.
    #[must_use]
    pub fn start(&self) -> Pose {
        self.junctions[0]
    }

    /// Samples `count` poses uniformly over `[from, to]`, endpoints included.
    ///
    /// The range may extend beyond the path's own domain; out-of-range poses
    /// follow the extrapolation policy of [`Self::pose_at`]. `count` below 2
    /// yields a single sample at `from`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, from: f64, to: f64, count: usize) -> Vec<Pose> {
        if count < 2 {
            return vec![self.pose_at(from)];
        }
        let step = (to - from) / (count - 1) as f64;
        (0..count)
            .map(|i| self.pose_at(from + step * i as f64))
            .collect()
    }

    /// Index of the segment whose domain contains `s` (clamped to the first
    /// and last segments for out-of-range queries).
    fn segment_index(&self, s: f64) -> usize {
        let mut i = 0;
        while i + 1 < self.segments.len() && s >= self.cumulative[i + 1] {
            i += 1;
        }
        i
    }
}
