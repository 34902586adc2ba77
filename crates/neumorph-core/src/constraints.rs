//! Layout constraints passed down during measure.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum extents a widget may take.
///
/// Bounds may be degenerate (negative, NaN, or a max below the min); every
/// query here treats them as empty space rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create constraints from explicit bounds.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// No upper bound on either axis.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Bring `size` inside these constraints.
    ///
    /// Negative or NaN bounds collapse to zero and a max below the min is
    /// raised to the min, so the result is never negative or NaN.
    ///
    /// ```
    /// use neumorph_core::{Constraints, Size};
    ///
    /// let c = Constraints::loose(Size::new(-10.0, f32::NAN));
    /// assert_eq!(c.constrain(Size::new(50.0, 50.0)), Size::ZERO);
    /// ```
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp_extent(size.width, self.min_width, self.max_width),
            clamp_extent(size.height, self.min_height, self.max_height),
        )
    }

    /// The biggest square (1:1 aspect, fit mode) these constraints allow.
    ///
    /// An axis without an upper bound does not limit the square; if neither
    /// axis is bounded the square collapses to zero.
    #[must_use]
    pub fn fit_square(&self) -> Size {
        let side = Size::new(self.max_width, self.max_height).min_side();
        Size::square(side)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// `f32::clamp` panics on NaN or inverted bounds; `max`/`min` skip NaN.
fn clamp_extent(value: f32, min: f32, max: f32) -> f32 {
    let min = min.max(0.0);
    let max = max.max(min);
    value.max(min).min(max)
}
