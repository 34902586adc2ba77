//! Geometric primitives: Point, Size, Rect, `CornerRadius`.

use serde::{Deserialize, Serialize};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a square size.
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// The shorter of the two sides.
    ///
    /// Non-finite, NaN and negative extents count as zero, so an unconstrained
    /// or degenerate size collapses instead of propagating infinities.
    ///
    /// ```
    /// use neumorph_core::Size;
    ///
    /// assert_eq!(Size::new(320.0, 480.0).min_side(), 320.0);
    /// assert_eq!(Size::new(f32::INFINITY, 200.0).min_side(), 200.0);
    /// assert_eq!(Size::new(f32::INFINITY, f32::INFINITY).min_side(), 0.0);
    /// assert_eq!(Size::new(-5.0, 10.0).min_side(), 0.0);
    /// ```
    #[must_use]
    pub fn min_side(&self) -> f32 {
        let sane = |v: f32| if v.is_finite() && v > 0.0 { Some(v) } else { None };
        match (sane(self.width), sane(self.height)) {
            (Some(w), Some(h)) => w.min(h),
            (Some(v), None) if self.height == f32::INFINITY => v,
            (None, Some(v)) if self.width == f32::INFINITY => v,
            _ => 0.0,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Create a rectangle of `size` centered on `center`.
    #[must_use]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Get the origin (top-left) point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Resolve a unit point (0..1 in each axis, values outside allowed)
    /// against this rectangle.
    #[must_use]
    pub fn unit_point(&self, ux: f32, uy: f32) -> Point {
        Point::new(self.x + self.width * ux, self.y + self.height * uy)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// The largest square that fits inside this rectangle, centered in it.
    #[must_use]
    pub fn centered_square(&self) -> Self {
        let side = self.size().min_side();
        let center = if self.width.is_finite() && self.height.is_finite() {
            self.center()
        } else {
            Point::new(self.x + side / 2.0, self.y + side / 2.0)
        };
        Self::from_center(center, Size::square(side))
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
}

impl CornerRadius {
    /// Zero radius
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Create corner radii with individual values.
    #[must_use]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create uniform corner radius.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Radii a renderer can actually draw inside `rect`: each corner is
    /// limited to half of the rectangle's shorter side.
    #[must_use]
    pub fn clamped_to(&self, rect: &Rect) -> Self {
        let limit = (rect.width.min(rect.height) / 2.0).max(0.0);
        Self::new(
            self.top_left.min(limit),
            self.top_right.min(limit),
            self.bottom_right.min(limit),
            self.bottom_left.min(limit),
        )
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_size_min_side() {
        assert_eq!(Size::new(100.0, 40.0).min_side(), 40.0);
        assert_eq!(Size::ZERO.min_side(), 0.0);
        assert_eq!(Size::new(f32::NAN, 10.0).min_side(), 0.0);
        assert_eq!(Size::new(10.0, f32::NEG_INFINITY).min_side(), 0.0);
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_rect_unit_point() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(r.unit_point(0.5, -0.2), Point::new(60.0, 0.0));
        assert_eq!(r.unit_point(0.5, 1.0), Point::new(60.0, 60.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(50.0, 50.0)));
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(!r.contains_point(&Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_rect_centered_square() {
        let r = Rect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(r.centered_square(), Rect::new(100.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_rect_centered_square_unbounded_is_empty() {
        let r = Rect::new(0.0, 0.0, f32::INFINITY, f32::INFINITY);
        assert_eq!(r.centered_square(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_corner_radius_clamped() {
        let rect = Rect::new(0.0, 0.0, 240.0, 224.0);
        let clamped = CornerRadius::uniform(120.0).clamped_to(&rect);
        assert_eq!(clamped, CornerRadius::uniform(112.0));
    }

    proptest! {
        #[test]
        fn prop_centered_square_fits(w in 0.0f32..2000.0, h in 0.0f32..2000.0) {
            let outer = Rect::new(0.0, 0.0, w, h);
            let sq = outer.centered_square();
            prop_assert!((sq.width - sq.height).abs() < 1e-3);
            prop_assert!(sq.width <= w + 1e-3 && sq.height <= h + 1e-3);
        }

        #[test]
        fn prop_point_distance_symmetric(
            x1 in -1000.0f32..1000.0,
            y1 in -1000.0f32..1000.0,
            x2 in -1000.0f32..1000.0,
            y2 in -1000.0f32..1000.0,
        ) {
            let p1 = Point::new(x1, y1);
            let p2 = Point::new(x2, y2);
            prop_assert!((p1.distance(&p2) - p2.distance(&p1)).abs() < 0.001);
        }
    }
}
