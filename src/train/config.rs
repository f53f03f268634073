use crate::error::{ConfigError, Result};
use crate::math::TOLERANCE;

/// Fixed dimensions shared by every cart in the train.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartConfig {
    /// Cart body length, coupler (front center) to rear edge.
    pub cart_length: f64,
    /// Cart body width.
    pub cart_width: f64,
    /// Gap from the rear of one cart to the front of the next.
    pub gap: f64,
    /// Length of the lead cart's nose cone, front edge to apex.
    pub nose_length: f64,
}

impl CartConfig {
    /// Creates a validated cart configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCartDimensions` if `cart_length`,
    /// `cart_width`, or `nose_length` is not positive, or `gap` is negative.
    pub fn new(cart_length: f64, cart_width: f64, gap: f64, nose_length: f64) -> Result<Self> {
        if cart_length < TOLERANCE {
            return Err(ConfigError::InvalidCartDimensions(format!(
                "cart_length must be positive, got {cart_length}"
            ))
            .into());
        }
        if cart_width < TOLERANCE {
            return Err(ConfigError::InvalidCartDimensions(format!(
                "cart_width must be positive, got {cart_width}"
            ))
            .into());
        }
        if gap < 0.0 {
            return Err(ConfigError::InvalidCartDimensions(format!(
                "gap must be non-negative, got {gap}"
            ))
            .into());
        }
        if nose_length < TOLERANCE {
            return Err(ConfigError::InvalidCartDimensions(format!(
                "nose_length must be positive, got {nose_length}"
            ))
            .into());
        }
        Ok(Self {
            cart_length,
            cart_width,
            gap,
            nose_length,
        })
    }

    /// Arc-length separation between consecutive couplers.
    #[must_use]
    pub fn coupler_spacing(&self) -> f64 {
        self.cart_length + self.gap
    }
}
