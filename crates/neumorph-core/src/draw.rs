//! Draw commands for retained-mode rendering.
//!
//! All rendering reduces to these primitives. Widgets produce trees of
//! [`DrawCommand`]s; a backend walks the tree back-to-front.
//!
//! Angles are in degrees, measured clockwise from the positive x axis
//! (screen coordinates, y grows downwards).

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// A color stop along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color
    pub color: Color,
    /// Position along the gradient [0.0, 1.0]
    pub offset: f32,
}

impl GradientStop {
    /// Create a stop, clamping the offset to [0.0, 1.0].
    #[must_use]
    pub fn new(color: Color, offset: f32) -> Self {
        Self {
            color,
            offset: offset.clamp(0.0, 1.0),
        }
    }

    /// Distribute colors evenly over [0.0, 1.0].
    ///
    /// ```
    /// use neumorph_core::{Color, GradientStop};
    ///
    /// let stops = GradientStop::evenly_spaced(&[Color::BLACK, Color::BLACK, Color::TRANSPARENT]);
    /// assert_eq!(stops[1].offset, 0.5);
    /// ```
    #[must_use]
    pub fn evenly_spaced(colors: &[Color]) -> Vec<Self> {
        match colors.len() {
            0 => Vec::new(),
            1 => vec![Self::new(colors[0], 0.0)],
            n => {
                let last = (n - 1) as f32;
                colors
                    .iter()
                    .enumerate()
                    .map(|(i, &color)| Self::new(color, i as f32 / last))
                    .collect()
            }
        }
    }
}

/// How a shape is filled or stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Single color
    Solid(Color),
    /// Linear gradient between two points
    Linear {
        /// Where offset 0.0 lies
        start: Point,
        /// Where offset 1.0 lies
        end: Point,
        /// Color stops
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around a center
    Radial {
        /// Gradient center
        center: Point,
        /// Radius of offset 0.0
        start_radius: f32,
        /// Radius of offset 1.0
        end_radius: f32,
        /// Color stops
        stops: Vec<GradientStop>,
    },
    /// Angular (conic) gradient sweeping between two angles
    Angular {
        /// Sweep center
        center: Point,
        /// Angle of offset 0.0, degrees
        start_angle: f32,
        /// Angle of offset 1.0, degrees
        end_angle: f32,
        /// Color stops
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Linear gradient with evenly spaced colors.
    #[must_use]
    pub fn linear(start: Point, end: Point, colors: &[Color]) -> Self {
        Self::Linear {
            start,
            end,
            stops: GradientStop::evenly_spaced(colors),
        }
    }

    /// Radial gradient with explicit stops.
    #[must_use]
    pub fn radial(
        center: Point,
        start_radius: f32,
        end_radius: f32,
        stops: Vec<GradientStop>,
    ) -> Self {
        Self::Radial {
            center,
            start_radius,
            end_radius,
            stops,
        }
    }

    /// Angular gradient with evenly spaced colors.
    #[must_use]
    pub fn angular(center: Point, start_angle: f32, end_angle: f32, colors: &[Color]) -> Self {
        Self::Angular {
            center,
            start_angle,
            end_angle,
            stops: GradientStop::evenly_spaced(colors),
        }
    }

    /// Gradient stops (empty for solid paint).
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Self::Solid(_) => &[],
            Self::Linear { stops, .. }
            | Self::Radial { stops, .. }
            | Self::Angular { stops, .. } => stops,
        }
    }

    /// The color at offset 0.0.
    #[must_use]
    pub fn first_color(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            _ => self.stops().first().map(|s| s.color),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Stroke style for path rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke paint
    pub paint: Paint,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Solid or gradient stroke of the given width.
    #[must_use]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width: width.max(0.0),
            ..Default::default()
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            paint: Paint::Solid(Color::BLACK),
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled corner
    Bevel,
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill paint (None = no fill)
    pub fill: Option<Paint>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Paint::Solid(Color::WHITE)),
            stroke: None,
            shadow: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only a fill.
    #[must_use]
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            stroke: None,
            shadow: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
            shadow: None,
        }
    }

    /// Add a shadow to the box.
    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
}

/// Shadow configuration. Also used for glows (zero offset).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// Drop shadow offset straight down.
    #[must_use]
    pub const fn drop(color: Color, blur: f32, offset_y: f32) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y,
            blur,
        }
    }

    /// Glow: a centered shadow with no offset.
    #[must_use]
    pub const fn glow(color: Color, blur: f32) -> Self {
        Self::drop(color, blur, 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Scale around an anchor point instead of the origin.
    #[must_use]
    pub fn scale_about(sx: f32, sy: f32, anchor: Point) -> Self {
        Self::translate(-anchor.x, -anchor.y)
            .then(&Self::scale(sx, sy))
            .then(&Self::translate(anchor.x, anchor.y))
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }

    /// Vertical scale factor (assumes no rotation or skew).
    #[must_use]
    pub const fn scale_y(&self) -> f32 {
        self.matrix[3]
    }

    /// Vertical translation.
    #[must_use]
    pub const fn translation_y(&self) -> f32 {
        self.matrix[5]
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a path (polyline or polygon)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text centered on `position`
    Text {
        /// Text content
        content: String,
        /// Center of the text run
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Group of commands with transform
    Group {
        /// Child commands, back-to-front
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },

    /// Gaussian blur of the child's rendering
    Blur {
        /// Blur radius
        radius: f32,
        /// Child command
        child: Box<DrawCommand>,
    },

    /// Shadow cast by the child's alpha (drop shadow or glow)
    Shadowed {
        /// Shadow parameters
        shadow: Shadow,
        /// Child command
        child: Box<DrawCommand>,
    },

    /// Keep only the parts of `child` covered by `mask`
    Mask {
        /// Mask shape (alpha is used)
        mask: Box<DrawCommand>,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, paint: impl Into<Paint>) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(paint),
        }
    }

    /// Create a rounded rectangle.
    #[must_use]
    pub fn rounded_rect(bounds: Rect, radius: f32, paint: impl Into<Paint>) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(paint),
        }
    }

    /// Create a stroked rounded rectangle.
    #[must_use]
    pub fn stroked_rounded_rect(bounds: Rect, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, paint: impl Into<Paint>) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(paint),
        }
    }

    /// Create a stroked circle.
    #[must_use]
    pub fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style,
        }
    }

    /// Create a text run centered on `position`.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }

    /// Group children without a transform.
    #[must_use]
    pub fn group(children: Vec<Self>) -> Self {
        Self::Group {
            children,
            transform: Transform2D::identity(),
        }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap in a translation.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        self.with_transform(Transform2D::translate(dx, dy))
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha: alpha.clamp(0.0, 1.0),
            child: Box::new(self),
        }
    }

    /// Wrap with a blur.
    #[must_use]
    pub fn with_blur(self, radius: f32) -> Self {
        Self::Blur {
            radius: radius.max(0.0),
            child: Box::new(self),
        }
    }

    /// Wrap with a shadow or glow.
    #[must_use]
    pub fn with_shadow(self, shadow: Shadow) -> Self {
        Self::Shadowed {
            shadow,
            child: Box::new(self),
        }
    }

    /// Mask with another command's coverage.
    #[must_use]
    pub fn masked_by(self, mask: Self) -> Self {
        Self::Mask {
            mask: Box::new(mask),
            child: Box::new(self),
        }
    }

    /// Direct children of this command.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Group { children, .. } => children.iter().collect(),
            Self::Opacity { child, .. }
            | Self::Blur { child, .. }
            | Self::Shadowed { child, .. }
            | Self::Mask { child, .. } => vec![child.as_ref()],
            _ => Vec::new(),
        }
    }
}
