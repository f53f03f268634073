use crate::error::{ConfigError, Result};
use crate::math::polygon_2d::point_in_polygon;
use crate::math::{Point2, TOLERANCE};
use crate::path::Path;

use super::SamplingParams;

/// The tube's 2D region as one closed boundary polygon.
///
/// Built once from the centerline: each sample contributes a point on the
/// left wall (`center + h·normal`) and one on the right wall
/// (`center − h·normal`); the polygon walks the left wall forward, then the
/// right wall backward, closing implicitly. Static for the simulation's
/// lifetime and safe to share between readers.
#[derive(Debug, Clone)]
pub struct TubeBoundary {
    polygon: Vec<Point2>,
    half_width: f64,
    sample_range: (f64, f64),
}

impl TubeBoundary {
    /// Samples `path` and builds the closed tube polygon.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTubeWidth` if `half_width` is not
    /// positive, or `ConfigError::InvalidSampling` for fewer than 2 samples.
    pub fn build(path: &Path, half_width: f64, params: SamplingParams) -> Result<Self> {
        if half_width < TOLERANCE {
            return Err(ConfigError::InvalidTubeWidth(half_width).into());
        }
        if params.samples < 2 {
            return Err(ConfigError::InvalidSampling(params.samples).into());
        }

        let from = -params.margin_before;
        let to = path.total_length() + params.margin_after;
        let poses = path.sample(from, to, params.samples);

        let mut polygon = Vec::with_capacity(poses.len() * 2);
        for pose in &poses {
            polygon.push(pose.position + pose.normal() * half_width);
        }
        for pose in poses.iter().rev() {
            polygon.push(pose.position - pose.normal() * half_width);
        }

        Ok(Self {
            polygon,
            half_width,
            sample_range: (from, to),
        })
    }

    /// Tests whether a point lies inside the tube, walls included.
    ///
    /// Points on the boundary count as inside (not colliding). Far outside
    /// the sampled range the walls are straight continuations of the end
    /// samples, so containment degrades gracefully rather than failing.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_polygon(point, &self.polygon)
    }

    /// The closed boundary polygon, left wall first, for rendering.
    #[must_use]
    pub fn polygon(&self) -> &[Point2] {
        &self.polygon
    }

    /// The configured half-width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// The sampled arc-length range `(from, to)`.
    #[must_use]
    pub fn sample_range(&self) -> (f64, f64) {
        self.sample_range
    }
}
