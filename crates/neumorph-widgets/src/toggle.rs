//! Neumorphic toggle switch widget.

use crate::config::ToggleConfig;
use crate::geometry::ToggleGeometry;
use crate::knob::KnobButton;
use crate::ring::OuterRing;
use crate::shadow_mask::InnerShadowMask;
use crate::visuals::ToggleVisuals;
use crate::well::InnerWell;
use neumorph_core::{
    widget::{AccessibleRole, LayoutResult},
    Binding, Canvas, Constraints, DrawCommand, Event, Point, Rect, Size, Transition,
    TypeId, Widget,
};
use std::any::Any;
use tracing::{debug, trace};

/// Message emitted when the toggle requests a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The requested state
    pub on: bool,
    /// How the owner should animate into it
    pub transition: Transition,
}

/// Accessible name used when none is set.
pub const DEFAULT_ACCESSIBLE_NAME: &str = "Toggle";

/// A square on/off switch drawn as stacked soft-shadow layers.
///
/// The state lives with the owner and is reached through a [`Binding`].
/// Painting only reads it; activating the knob requests the opposite value
/// through the binding's setter and reports a [`ToggleChanged`].
#[derive(Debug, Clone)]
pub struct NeumorphicToggle {
    /// Externally owned state
    binding: Binding<bool>,
    /// Glyph palette
    config: ToggleConfig,
    /// Animation reported with each change
    transition: Transition,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Whether keyboard focus is on the toggle
    focused: bool,
    /// Cached bounds
    bounds: Rect,
}

impl NeumorphicToggle {
    /// Create a toggle bound to externally owned state.
    #[must_use]
    pub fn new(binding: Binding<bool>) -> Self {
        Self {
            binding,
            config: ToggleConfig::dark(),
            transition: Transition::default(),
            accessible_name_value: None,
            test_id_value: None,
            focused: false,
            bounds: Rect::default(),
        }
    }

    /// Set the glyph palette.
    #[must_use]
    pub const fn config(mut self, config: ToggleConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the transition reported with each change.
    #[must_use]
    pub const fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current state, read through the binding.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.binding.get()
    }

    /// Get the palette.
    #[must_use]
    pub const fn get_config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Get the transition.
    #[must_use]
    pub const fn get_transition(&self) -> Transition {
        self.transition
    }

    /// Whether the toggle has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// The square the toggle occupies inside its bounds.
    #[must_use]
    pub fn square(&self) -> Rect {
        self.bounds.centered_square()
    }

    /// Sizes derived from the laid-out square.
    #[must_use]
    pub fn geometry(&self) -> ToggleGeometry {
        ToggleGeometry::from_side(self.square().width)
    }

    /// Request the opposite state and describe the change.
    ///
    /// Each call flips exactly once.
    pub fn activate(&self) -> ToggleChanged {
        let on = self.is_on();
        let target = !on;
        self.knob(on).activate(|| self.binding.set(target));
        debug!(
            on = target,
            duration_ms = self.transition.duration_ms,
            easing = ?self.transition.easing,
            "toggle activated"
        );
        ToggleChanged {
            on: target,
            transition: self.transition,
        }
    }

    /// Draw commands for the current state, in absolute coordinates.
    #[must_use]
    pub fn render(&self) -> DrawCommand {
        self.render_with(&ToggleVisuals::for_state(self.is_on(), &self.config))
    }

    /// Draw commands for a change into the current state, `progress` of the
    /// way through (eased, 0.0 to 1.0).
    #[must_use]
    pub fn render_transition(&self, progress: f64) -> DrawCommand {
        self.render_with(&ToggleVisuals::animating(
            self.is_on(),
            &self.config,
            progress,
        ))
    }

    /// Draw commands for arbitrary visuals.
    #[must_use]
    pub fn render_with(&self, visuals: &ToggleVisuals) -> DrawCommand {
        let square = self.square();
        DrawCommand::group(self.layers(visuals).to_vec()).translated(square.x, square.y)
    }

    /// Back-to-front layers in the square's local coordinates.
    fn layers(&self, visuals: &ToggleVisuals) -> [DrawCommand; 4] {
        let g = self.geometry();
        let well = g.well_frame();
        let knob = g.knob_frame();

        [
            OuterRing::new(g.side).render(),
            InnerWell::with_top_color(visuals.well_top, g.well_diameter)
                .render()
                .translated(well.x, well.y),
            KnobButton::with_visuals(visuals.clone(), g.knob_width, g.knob_height)
                .render()
                .translated(0.0, visuals.lift * g.lift_offset)
                .translated(knob.x, knob.y),
            InnerShadowMask::with_colors(visuals.mask_colors.clone(), g.well_diameter)
                .render()
                .translated(well.x, well.y),
        ]
    }

    fn knob(&self, on: bool) -> KnobButton {
        let g = self.geometry();
        KnobButton::new(on, &self.config, g.knob_width, g.knob_height)
    }

    /// Whether an absolute point lands on the knob in its current position.
    fn knob_hit(&self, point: Point) -> bool {
        let on = self.is_on();
        let g = self.geometry();
        if g.is_empty() {
            return false;
        }
        let square = self.square();
        let frame = g.knob_frame();
        let local = Point::new(
            point.x - square.x - frame.x,
            point.y - square.y - frame.y - g.knob_offset(on),
        );
        self.knob(on).hit_test(local)
    }
}

impl Widget for NeumorphicToggle {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(constraints.fit_square())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: self.square().size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        trace!(side = self.geometry().side, on = self.is_on(), "paint toggle");
        canvas.draw(self.render());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let activated = match event {
            Event::KeyDown { key } => self.focused && key.is_activation(),
            Event::FocusIn => {
                self.focused = true;
                false
            }
            Event::FocusOut => {
                self.focused = false;
                false
            }
            _ => event
                .press_position()
                .is_some_and(|position| self.knob_hit(position)),
        };

        if activated {
            Some(Box::new(self.activate()))
        } else {
            None
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(
            self.accessible_name_value
                .as_deref()
                .unwrap_or(DEFAULT_ACCESSIBLE_NAME),
        )
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
