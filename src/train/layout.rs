use crate::error::{ConfigError, Result};
use crate::math::TOLERANCE;

/// Fixed arc-length offsets of every coupler relative to the lead coupler.
///
/// The lead cart sits at offset `0`; trailing carts carry strictly decreasing
/// negative offsets, which encodes rigid inter-cart spacing: moving the lead
/// coupler by `ds` moves every coupler by exactly `ds`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouplerLayout {
    offsets: Vec<f64>,
}

impl CouplerLayout {
    /// Creates a layout of `cart_count` carts with uniform coupler spacing.
    ///
    /// Cart `i` gets offset `-(i · spacing)`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCouplerLayout` if `cart_count` is zero or
    /// `spacing` is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(cart_count: usize, spacing: f64) -> Result<Self> {
        if cart_count == 0 {
            return Err(
                ConfigError::InvalidCouplerLayout("need at least one cart".to_owned()).into(),
            );
        }
        if spacing < TOLERANCE {
            return Err(ConfigError::InvalidCouplerLayout(format!(
                "coupler spacing must be positive, got {spacing}"
            ))
            .into());
        }
        let offsets = (0..cart_count).map(|i| -(i as f64) * spacing).collect();
        Ok(Self { offsets })
    }

    /// Creates a layout from explicit per-cart offsets, lead first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCouplerLayout` if the list is empty, the
    /// lead offset is not zero, or the offsets are not strictly decreasing.
    pub fn from_offsets(offsets: Vec<f64>) -> Result<Self> {
        let Some(&lead) = offsets.first() else {
            return Err(
                ConfigError::InvalidCouplerLayout("need at least one cart".to_owned()).into(),
            );
        };
        if lead.abs() > TOLERANCE {
            return Err(ConfigError::InvalidCouplerLayout(format!(
                "lead coupler offset must be zero, got {lead}"
            ))
            .into());
        }
        for (i, pair) in offsets.windows(2).enumerate() {
            if pair[1] >= pair[0] - TOLERANCE {
                return Err(ConfigError::InvalidCouplerLayout(format!(
                    "offsets must strictly decrease, but offset {} = {} does not trail offset {} = {}",
                    i + 1,
                    pair[1],
                    i,
                    pair[0]
                ))
                .into());
            }
        }
        Ok(Self { offsets })
    }

    /// Fans a lead arc-length out to every coupler: `s_lead + offset_i`.
    ///
    /// Pure and total — any real input is accepted, since the path model
    /// extrapolates beyond its ends.
    #[must_use]
    pub fn coupler_positions(&self, s_lead: f64) -> Vec<f64> {
        self.offsets.iter().map(|off| s_lead + off).collect()
    }

    /// Number of carts in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if the layout holds no carts (never, by construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the per-cart offsets, lead first.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }
}
