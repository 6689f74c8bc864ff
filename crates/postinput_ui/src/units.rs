//! Type-safe wrapper for CSS pixel lengths
//!
//! Heights flow between the DOM (integer `scrollHeight` in, `"123px"` style
//! strings out) and the headless model (as `f32`). The newtype keeps those
//! from being mixed with line counts or font ratios.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

// =============================================================================
// Pixels
// =============================================================================

/// A length in CSS pixels
///
/// # Example
///
/// ```ignore
/// use postinput_ui::Pixels;
///
/// let h = Pixels::from(38);
/// assert_eq!(h.to_string(), "38px");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixels(pub f32);

impl Pixels {
    /// Zero length
    pub const ZERO: Self = Self(0.0);

    /// Get the raw f32 value
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Clamp to non-negative
    pub fn clamp_non_negative(self) -> Self {
        Self(self.0.max(0.0))
    }

    /// The smaller of two lengths
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The larger of two lengths
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Round up to a whole pixel, the granularity browsers report
    /// `scrollHeight` in.
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

impl From<i32> for Pixels {
    fn from(value: i32) -> Self {
        Self(value as f32)
    }
}

impl Add for Pixels {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
