//! Core types and traits for the Neumorph toggle control.
//!
//! This crate provides the rendering vocabulary shared by the widget crate:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing
//! - Retained-mode output: [`DrawCommand`], [`Paint`], [`Shadow`]
//! - Layout constraints: [`Constraints`]
//! - Widgets and input: [`Widget`], [`Canvas`], [`Event`]
//! - Animation: [`Easing`], [`Transition`]
//! - Host-owned state: [`ReactiveCell`], [`Binding`]

pub mod animation;
pub mod binding;
pub mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{Easing, Interpolate, Transition};
pub use binding::{Binding, ReactiveCell};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, GradientStop, LineCap, LineJoin, Paint, Shadow, StrokeStyle};
pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, Transform2D, TypeId,
    Widget, WidgetId,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // CROSS-MODULE TESTS
    // ==========================================================================

    mod canvas_tests {
        use super::*;

        #[test]
        fn test_canvas_is_object_safe() {
            let mut recording = RecordingCanvas::new();
            let canvas: &mut dyn Canvas = &mut recording;
            canvas.fill_circle(Point::new(1.0, 1.0), 1.0, Color::GREEN);
            assert_eq!(recording.command_count(), 1);
        }

        #[test]
        fn test_nested_effects_survive_recording() {
            let mut canvas = RecordingCanvas::new();
            let ring = DrawCommand::filled_circle(Point::new(50.0, 50.0), 50.0, Color::white(0.2))
                .with_shadow(Shadow::drop(Color::BLACK.opacity(0.8), 1.1, 1.0));
            canvas.draw(ring.clone());
            assert_eq!(canvas.commands(), &[ring]);
        }
    }

    mod binding_tests {
        use super::*;

        #[test]
        fn test_binding_is_send_sync() {
            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<Binding<bool>>();
            assert_send_sync::<ReactiveCell<bool>>();
        }

        #[test]
        fn test_transition_drives_color_blend() {
            let t = Transition::default();
            let p = t.progress(100);
            let c = Color::interpolate(&Color::BLACK, &Color::WHITE, p);
            assert!((c.r - 0.5).abs() < 1e-3);
        }
    }

    mod layout_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_fit_square_fits_constraints(w in 0.0f32..2000.0, h in 0.0f32..2000.0) {
                let c = Constraints::loose(Size::new(w, h));
                let sq = c.fit_square();
                prop_assert!(sq.width <= w && sq.height <= h);
                prop_assert_eq!(sq.width, sq.height);
            }

            #[test]
            fn prop_constrain_never_negative_or_nan(
                min_w in any::<f32>(),
                max_w in any::<f32>(),
                w in any::<f32>(),
            ) {
                let c = Constraints::new(min_w, max_w, 0.0, 100.0);
                let size = c.constrain(Size::new(w, 10.0));
                prop_assert!(size.width >= 0.0, "width {}", size.width);
                prop_assert_eq!(size.height, 10.0);
            }

            #[test]
            fn prop_centered_square_is_centered(
                x in -500.0f32..500.0,
                y in -500.0f32..500.0,
                w in 0.0f32..1000.0,
                h in 0.0f32..1000.0,
            ) {
                let bounds = Rect::new(x, y, w, h);
                let sq = bounds.centered_square();
                prop_assert!((sq.center().x - bounds.center().x).abs() < 1e-2);
                prop_assert!((sq.center().y - bounds.center().y).abs() < 1e-2);
            }
        }
    }
}
