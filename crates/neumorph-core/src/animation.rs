//! Easing curves and transition descriptions.
//!
//! Widgets never run timers. A state change reports a [`Transition`] and the
//! host drives the clock, asking for eased progress at each frame.

use crate::{Color, GradientStop, Shadow};
use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
///
/// Serialized in kebab-case (`"ease-in-out"`, `"cubic-out"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
    /// Exponential ease in
    ExpoIn,
    /// Exponential ease out
    ExpoOut,
    /// Back ease out (overshoots then returns)
    BackOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => Self::ease_in_quad(t),
            Self::EaseOut => Self::ease_out_quad(t),
            Self::EaseInOut => Self::ease_in_out_quad(t),
            Self::CubicIn => Self::ease_in_cubic(t),
            Self::CubicOut => Self::ease_out_cubic(t),
            Self::CubicInOut => Self::ease_in_out_cubic(t),
            Self::ExpoIn => Self::ease_in_expo(t),
            Self::ExpoOut => Self::ease_out_expo(t),
            Self::BackOut => Self::back_out(t),
        }
    }

    fn ease_in_quad(t: f64) -> f64 {
        t * t
    }

    fn ease_out_quad(t: f64) -> f64 {
        (1.0 - t).mul_add(-(1.0 - t), 1.0)
    }

    fn ease_in_out_quad(t: f64) -> f64 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
        }
    }

    fn ease_in_cubic(t: f64) -> f64 {
        t * t * t
    }

    fn ease_out_cubic(t: f64) -> f64 {
        1.0 - (1.0 - t).powi(3)
    }

    fn ease_in_out_cubic(t: f64) -> f64 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
        }
    }

    fn ease_in_expo(t: f64) -> f64 {
        if t == 0.0 {
            0.0
        } else {
            10.0f64.mul_add(t, -10.0).exp2()
        }
    }

    fn ease_out_expo(t: f64) -> f64 {
        if (t - 1.0).abs() < f64::EPSILON {
            1.0
        } else {
            1.0 - (-10.0 * t).exp2()
        }
    }

    fn back_out(t: f64) -> f64 {
        const C1: f64 = 1.70158;
        const C3: f64 = C1 + 1.0;
        C1.mul_add((t - 1.0).powi(2), C3.mul_add((t - 1.0).powi(3), 1.0))
    }
}

// =============================================================================
// Transition - Declarative Animation Description
// =============================================================================

/// How a state change should be animated: a duration and a curve.
///
/// ```
/// use neumorph_core::{Easing, Transition};
///
/// let t = Transition::default();
/// assert_eq!(t.duration_ms, 200);
/// assert_eq!(t.easing, Easing::EaseInOut);
/// assert_eq!(t.progress(100), 0.5);
/// assert_eq!(t.progress(400), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: Easing,
}

impl Transition {
    /// Default toggle duration.
    pub const DEFAULT_DURATION_MS: u32 = 200;

    /// Create a transition.
    #[must_use]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Ease-in-out transition of the given duration.
    #[must_use]
    pub const fn ease_in_out(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::EaseInOut)
    }

    /// Jump straight to the end state.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(0, Easing::Linear)
    }

    /// Whether this transition has no duration.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Eased progress (0.0 to 1.0) after `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: u32) -> f64 {
        if self.is_instant() {
            return 1.0;
        }
        let t = f64::from(elapsed_ms) / f64::from(self.duration_ms);
        self.easing.apply(t)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::ease_in_out(Self::DEFAULT_DURATION_MS)
    }
}

// =============================================================================
// Interpolate - Blending Between States
// =============================================================================

/// Values a host can blend between two resting states.
pub trait Interpolate {
    /// The value `t` of the way from `from` to `to` (0.0 to 1.0).
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

impl Interpolate for GradientStop {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self::new(
            Color::interpolate(&from.color, &to.color, t),
            f32::interpolate(&from.offset, &to.offset, t),
        )
    }
}

impl Interpolate for Shadow {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            color: Color::interpolate(&from.color, &to.color, t),
            offset_x: f32::interpolate(&from.offset_x, &to.offset_x, t),
            offset_y: f32::interpolate(&from.offset_y, &to.offset_y, t),
            blur: f32::interpolate(&from.blur, &to.blur, t),
        }
    }
}

/// Lists of equal length blend element by element; lists that differ in
/// length have no pairing and switch over at the midpoint.
impl<T: Interpolate + Clone> Interpolate for Vec<T> {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        if from.len() == to.len() {
            from.iter()
                .zip(to)
                .map(|(a, b)| T::interpolate(a, b, t))
                .collect()
        } else if t < 0.5 {
            from.clone()
        } else {
            to.clone()
        }
    }
}
