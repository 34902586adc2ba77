//! Proportions of the toggle relative to its square side.

use neumorph_core::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Well diameter as a fraction of the side.
pub const WELL_FRACTION: f32 = 0.8;
/// Knob width as a fraction of the side.
pub const KNOB_WIDTH_FRACTION: f32 = 0.75;
/// Knob height as a fraction of the side.
pub const KNOB_HEIGHT_FRACTION: f32 = 0.7;
/// Knob lift as a fraction of the side.
pub const LIFT_FRACTION: f32 = 0.04;

/// Coerce a side length to something drawable: non-finite, zero or negative
/// lengths become zero.
#[must_use]
pub fn sanitize_side(side: f32) -> f32 {
    if side.is_finite() && side > 0.0 {
        side
    } else {
        0.0
    }
}

/// Sizes derived from the side of the square the toggle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToggleGeometry {
    /// Square side
    pub side: f32,
    /// Diameter of the inner well and of the shadow mask
    pub well_diameter: f32,
    /// Knob width
    pub knob_width: f32,
    /// Knob height
    pub knob_height: f32,
    /// Distance the knob moves off center
    pub lift_offset: f32,
}

impl ToggleGeometry {
    /// Derive all sizes from `side`.
    ///
    /// ```
    /// use neumorph_widgets::ToggleGeometry;
    ///
    /// let g = ToggleGeometry::from_side(320.0);
    /// assert_eq!(g.well_diameter, 256.0);
    /// assert!((g.knob_offset(true) + 12.8).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn from_side(side: f32) -> Self {
        let side = sanitize_side(side);
        Self {
            side,
            well_diameter: side * WELL_FRACTION,
            knob_width: side * KNOB_WIDTH_FRACTION,
            knob_height: side * KNOB_HEIGHT_FRACTION,
            lift_offset: side * LIFT_FRACTION,
        }
    }

    /// Geometry for the largest square that fits in `bounds`.
    #[must_use]
    pub fn fit(bounds: Rect) -> Self {
        Self::from_side(bounds.size().min_side())
    }

    /// Vertical knob offset: lifted when ON, lowered when OFF.
    #[must_use]
    pub fn knob_offset(&self, on: bool) -> f32 {
        if on {
            -self.lift_offset
        } else {
            self.lift_offset
        }
    }

    /// Whether the toggle collapsed to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.side <= 0.0
    }

    /// Well frame inside a square of this geometry (local coordinates).
    #[must_use]
    pub fn well_frame(&self) -> Rect {
        self.centered(Size::square(self.well_diameter))
    }

    /// Knob frame before the lift offset is applied (local coordinates).
    #[must_use]
    pub fn knob_frame(&self) -> Rect {
        self.centered(Size::new(self.knob_width, self.knob_height))
    }

    fn centered(&self, size: Size) -> Rect {
        Rect::new(
            (self.side - size.width) / 2.0,
            (self.side - size.height) / 2.0,
            size.width,
            size.height,
        )
    }
}
