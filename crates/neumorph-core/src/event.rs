//! Input events delivered to widgets.
//!
//! A pointer press counts when the left button goes down or a finger lifts;
//! keyboard activation is left to the widget, which knows whether it has
//! focus.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Pointer position
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Pointer position
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Finger down
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Finger lifted
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Widget gained keyboard focus
    FocusIn,
    /// Widget lost keyboard focus
    FocusOut,
}

impl Event {
    /// Where a discrete pointer press landed.
    ///
    /// `Some` for a left-button `MouseDown` or a `TouchEnd`; every other
    /// event (including right clicks and releases) is `None`.
    ///
    /// ```
    /// use neumorph_core::{Event, MouseButton, Point};
    ///
    /// let down = Event::MouseDown { position: Point::new(3.0, 4.0), button: MouseButton::Left };
    /// assert_eq!(down.press_position(), Some(Point::new(3.0, 4.0)));
    ///
    /// let right = Event::MouseDown { position: Point::ORIGIN, button: MouseButton::Right };
    /// assert_eq!(right.press_position(), None);
    /// ```
    #[must_use]
    pub const fn press_position(&self) -> Option<Point> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
}

/// Keys a toggle cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter/Return
    Enter,
    /// Space bar
    Space,
    /// Escape
    Escape,
    /// Tab
    Tab,
}

impl Key {
    /// Keys that activate a focused control.
    #[must_use]
    pub const fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}
