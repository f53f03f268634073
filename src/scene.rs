use crate::error::Result;
use crate::math::Point2;
use crate::path::{OffsetPath, Path, Pose, Segment};
use crate::train::{footprint, nose_cone, CartConfig, CartFootprint, CouplerLayout, NoseCone};
use crate::tube::{is_colliding, SamplingParams, TubeBoundary};

/// Construction-time configuration for a complete simulation scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Pose at which the tube centerline begins.
    pub start: Pose,
    /// Ordered centerline segments.
    pub segments: Vec<Segment>,
    /// Lateral shift of the cart path from the tube centerline
    /// (positive = left).
    pub lateral_offset: f64,
    /// Shared cart dimensions.
    pub cart: CartConfig,
    /// Number of carts in the train.
    pub cart_count: usize,
    /// Full tube width, wall to wall.
    pub tube_width: f64,
    /// Tube boundary sampling resolution.
    pub sampling: SamplingParams,
}

/// One cart's state within a [`Frame`].
#[derive(Debug, Clone, Copy)]
pub struct CartState {
    /// Arc-length position of this cart's coupler.
    pub coupler_s: f64,
    /// The cart's rectangular footprint.
    pub footprint: CartFootprint,
    /// True if any footprint vertex has left the tube.
    pub colliding: bool,
}

/// The full per-step query result for one lead position.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Per-cart states, lead cart first.
    pub carts: Vec<CartState>,
    /// Nose cone of the lead cart.
    ///
    /// Geometry-only output: only the cart rectangles feed the collision
    /// flags, never the nose vertices.
    pub nose: NoseCone,
}

impl Frame {
    /// True if any cart in the frame is colliding.
    #[must_use]
    pub fn any_collision(&self) -> bool {
        self.carts.iter().any(|cart| cart.colliding)
    }
}

/// A fully-constructed simulation: immutable path, offset path, coupler
/// layout, and tube boundary, queried once per step with a lead arc-length.
///
/// Everything here is built once and never mutated, so a scene may be shared
/// freely between threads; per-cart computations within a step are
/// independent of one another.
#[derive(Debug, Clone)]
pub struct Scene {
    cart: CartConfig,
    layout: CouplerLayout,
    offset_path: OffsetPath,
    tube: TubeBoundary,
    sampling: SamplingParams,
}

impl Scene {
    /// Validates the configuration and builds all static artifacts.
    ///
    /// A tube narrower than the carts is accepted — it guarantees permanent
    /// collision but is a legitimate (diagnosable) configuration; see
    /// [`Self::is_tube_narrower_than_carts`].
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the path, cart dimensions, coupler layout,
    /// tube width, or sampling parameters are invalid.
    pub fn new(config: SceneConfig) -> Result<Self> {
        let path = Path::new(config.start, config.segments)?;
        let layout = CouplerLayout::uniform(config.cart_count, config.cart.coupler_spacing())?;
        let tube = TubeBoundary::build(&path, config.tube_width / 2.0, config.sampling)?;
        let offset_path = OffsetPath::new(path, config.lateral_offset);
        Ok(Self {
            cart: config.cart,
            layout,
            offset_path,
            tube,
            sampling: config.sampling,
        })
    }

    /// Computes every cart's footprint and collision flag for one lead
    /// arc-length. Total over all real inputs; never fails.
    #[must_use]
    pub fn step(&self, s_lead: f64) -> Frame {
        let positions = self.layout.coupler_positions(s_lead);
        let carts: Vec<CartState> = positions
            .iter()
            .map(|&s| {
                let fp = footprint(self.offset_path.pose_at(s), &self.cart);
                CartState {
                    coupler_s: s,
                    footprint: fp,
                    colliding: is_colliding(&self.tube, fp.vertices()),
                }
            })
            .collect();
        let nose = nose_cone(self.offset_path.pose_at(positions[0]), &self.cart);
        Frame { carts, nose }
    }

    /// Convenience wrapper for clock-driven callers: `s_lead = speed · t`.
    #[must_use]
    pub fn step_at_time(&self, t: f64, speed: f64) -> Frame {
        self.step(speed * t)
    }

    /// True when the tube is too narrow for the carts — every step will
    /// report collisions. A diagnostic for the caller, not an error.
    #[must_use]
    pub fn is_tube_narrower_than_carts(&self) -> bool {
        self.tube.half_width() * 2.0 < self.cart.cart_width
    }

    /// The tube boundary.
    #[must_use]
    pub fn tube(&self) -> &TubeBoundary {
        &self.tube
    }

    /// The tube centerline.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.offset_path.base()
    }

    /// The laterally-shifted path the couplers follow.
    #[must_use]
    pub fn offset_path(&self) -> &OffsetPath {
        &self.offset_path
    }

    /// The coupler layout.
    #[must_use]
    pub fn layout(&self) -> &CouplerLayout {
        &self.layout
    }

    /// The shared cart dimensions.
    #[must_use]
    pub fn cart(&self) -> &CartConfig {
        &self.cart
    }

    /// Centerline points over the tube's sampled range, for overlay
    /// rendering.
    #[must_use]
    pub fn centerline_points(&self) -> Vec<Point2> {
        let (from, to) = self.tube.sample_range();
        self.path()
            .sample(from, to, self.sampling.samples)
            .into_iter()
            .map(|pose| pose.position)
            .collect()
    }

    /// Cart-path (offset) points over the tube's sampled range, for overlay
    /// rendering.
    #[must_use]
    pub fn cart_path_points(&self) -> Vec<Point2> {
        let (from, to) = self.tube.sample_range();
        self.offset_path
            .sample(from, to, self.sampling.samples)
            .into_iter()
            .map(|pose| pose.position)
            .collect()
    }
}
