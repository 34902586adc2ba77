//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Emit draw commands onto a [`Canvas`]
//!
//! Input arrives through [`Widget::event`], which may return a message for
//! the widget's owner. Painting never mutates state.
//!
//! # Examples
//!
//! ```
//! use neumorph_core::{TypeId, Transform2D, WidgetId};
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//!
//! let translate = Transform2D::translate(10.0, 20.0);
//! assert_eq!(translate.matrix[4], 10.0);
//! ```

use crate::constraints::Constraints;
use crate::draw::DrawCommand;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

pub use crate::draw::Transform2D;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw commands for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally returning a message for the owner.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend. Layered effects
/// (gradients, blur, masks, shadows) go through [`Canvas::draw`].
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text centered on `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw an arbitrary command tree.
    fn draw(&mut self, command: DrawCommand);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// Text style for rendering.
///
/// ```
/// use neumorph_core::{Color, FontStyle, FontWeight, TextStyle};
///
/// let glyph = TextStyle {
///     size: 32.4,
///     color: Color::GREEN,
///     weight: FontWeight::Bold,
///     style: FontStyle::Normal,
/// };
/// assert_eq!(glyph.weight, FontWeight::Bold);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    Normal,
    /// Italic style
    Italic,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// On/off switch
    Switch,
}

impl AccessibleRole {
    /// ARIA role name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Switch => "switch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_eq() {
        assert_eq!(WidgetId::new(1), WidgetId::new(1));
        assert_ne!(WidgetId::new(1), WidgetId::new(2));
    }

    #[test]
    fn test_type_id() {
        assert_eq!(TypeId::of::<u32>(), TypeId::of::<u32>());
        assert_ne!(TypeId::of::<u32>(), TypeId::of::<String>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, FontWeight::Normal);
        assert_eq!(style.style, FontStyle::Normal);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
        assert_ne!(AccessibleRole::Switch, AccessibleRole::Generic);
    }

    #[test]
    fn test_accessible_role_as_str() {
        assert_eq!(AccessibleRole::Switch.as_str(), "switch");
        assert_eq!(AccessibleRole::Generic.as_str(), "generic");
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
