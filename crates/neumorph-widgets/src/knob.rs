//! The pressable knob: gradient body, rim highlights and the I/O glyphs.
//!
//! The knob has no pressed look. Its appearance depends only on the toggle
//! state (through [`ToggleVisuals`]) and its size.

use crate::config::ToggleConfig;
use crate::geometry::sanitize_side;
use crate::visuals::{GlyphVisuals, ToggleVisuals};
use neumorph_core::{
    Color, CornerRadius, DrawCommand, FontStyle, FontWeight, Paint, Point, Rect, StrokeStyle,
    TextStyle, Transform2D,
};

/// Glyph font size relative to knob width.
pub const LABEL_FONT_FRACTION: f32 = 0.135;
/// Vertical label padding relative to knob height.
pub const LABEL_PADDING_FRACTION: f32 = 0.05;
/// Rim stroke width relative to knob width.
pub const RIM_WIDTH_FRACTION: f32 = 0.0075;
/// Blur applied to both rim layers.
pub const RIM_BLUR: f32 = 0.5;
/// Where the background gradient is centered, as a unit point of the knob.
pub const GRADIENT_ANCHOR: (f32, f32) = (0.5, -0.2);

/// One of the two angular rim highlights.
///
/// Angles follow the draw convention (clockwise from +x, y down), so the
/// 180°→360° sweep passes through 270° and lights the top edge of the knob,
/// while 0°→180° passes through 90° and lights the bottom edge.
///
/// A layer is shown while the toggle state differs from `active_range`, so
/// exactly one of [`StrokeLayer::TOP`] and [`StrokeLayer::BOTTOM`] is
/// visible at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeLayer {
    /// Opacity of the white peak in the middle of the sweep
    pub peak_opacity: f32,
    /// Selects the 180°→360° sweep when true, 0°→180° when false
    pub active_range: bool,
}

impl StrokeLayer {
    /// Faint highlight along the top edge (180°→360°), shown while OFF.
    pub const TOP: Self = Self {
        peak_opacity: 0.2,
        active_range: true,
    };

    /// Brighter highlight along the bottom edge (0°→180°), shown while ON.
    pub const BOTTOM: Self = Self {
        peak_opacity: 0.4,
        active_range: false,
    };

    /// Sweep start and end, in degrees.
    #[must_use]
    pub const fn angles(&self) -> (f32, f32) {
        if self.active_range {
            (180.0, 360.0)
        } else {
            (0.0, 180.0)
        }
    }

    /// Resting opacity of this layer for a state.
    #[must_use]
    pub fn opacity_for(&self, on: bool) -> f32 {
        if on == self.active_range {
            0.0
        } else {
            1.0
        }
    }

    /// Stroked outline of a `width`×`height` knob at the given opacity.
    #[must_use]
    pub fn render(&self, width: f32, height: f32, opacity: f32) -> DrawCommand {
        let frame = Rect::new(0.0, 0.0, width, height);
        let (start, end) = self.angles();
        let paint = Paint::angular(
            frame.center(),
            start,
            end,
            &[
                Color::TRANSPARENT,
                Color::WHITE.opacity(self.peak_opacity),
                Color::TRANSPARENT,
            ],
        );
        DrawCommand::stroked_rounded_rect(
            frame,
            width / 2.0,
            StrokeStyle::new(paint, width * RIM_WIDTH_FRACTION),
        )
        .with_opacity(opacity)
    }
}

/// Which glyph a label is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// "I", at the top
    On,
    /// "O", at the bottom
    Off,
}

impl Glyph {
    /// Text of the glyph.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::On => "I",
            Self::Off => "O",
        }
    }
}

/// The toggle's knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobButton {
    width: f32,
    height: f32,
    visuals: ToggleVisuals,
}

impl KnobButton {
    /// Knob at rest in the given state.
    #[must_use]
    pub fn new(on: bool, config: &ToggleConfig, width: f32, height: f32) -> Self {
        Self::with_visuals(ToggleVisuals::for_state(on, config), width, height)
    }

    /// Knob with explicit (possibly mid-transition) visuals.
    #[must_use]
    pub fn with_visuals(visuals: ToggleVisuals, width: f32, height: f32) -> Self {
        Self {
            width: sanitize_side(width),
            height: sanitize_side(height),
            visuals,
        }
    }

    /// Knob width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Knob height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Local frame of the knob.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Font size of the glyphs.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.width * LABEL_FONT_FRACTION
    }

    /// Center of a glyph in local coordinates.
    #[must_use]
    pub fn label_center(&self, glyph: Glyph) -> Point {
        let padding = self.height * LABEL_PADDING_FRACTION;
        let half_line = self.font_size() / 2.0;
        let y = match glyph {
            Glyph::On => padding + half_line,
            Glyph::Off => self.height - padding - half_line,
        };
        Point::new(self.width / 2.0, y)
    }

    /// Run `action` once. The knob itself keeps no state.
    pub fn activate<F: FnOnce()>(&self, action: F) {
        action();
    }

    /// Whether a local point lies on the knob's rounded shape.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        let frame = self.frame();
        if !frame.contains_point(&point) {
            return false;
        }
        let r = CornerRadius::uniform(self.width / 2.0)
            .clamped_to(&frame)
            .top_left;
        let nearest = Point::new(
            point.x.clamp(r, (self.width - r).max(r)),
            point.y.clamp(r, (self.height - r).max(r)),
        );
        point.distance(&nearest) <= r
    }

    /// Draw commands in local coordinates.
    #[must_use]
    pub fn render(&self) -> DrawCommand {
        let frame = self.frame();
        let (ux, uy) = GRADIENT_ANCHOR;
        let background = DrawCommand::rounded_rect(
            frame,
            self.width / 2.0,
            Paint::radial(
                frame.unit_point(ux, uy),
                0.0,
                self.height,
                self.visuals.knob_stops.clone(),
            ),
        );

        let rim = DrawCommand::group(vec![
            StrokeLayer::TOP.render(self.width, self.height, self.visuals.top_rim_opacity),
            StrokeLayer::BOTTOM.render(self.width, self.height, self.visuals.bottom_rim_opacity),
        ])
        .with_blur(RIM_BLUR);

        DrawCommand::group(vec![
            background,
            rim,
            self.label(Glyph::On, &self.visuals.top_glyph),
            self.label(Glyph::Off, &self.visuals.bottom_glyph),
        ])
    }

    fn label(&self, glyph: Glyph, look: &GlyphVisuals) -> DrawCommand {
        let center = self.label_center(glyph);
        let style = TextStyle {
            size: self.font_size(),
            color: look.color,
            weight: FontWeight::Bold,
            style: FontStyle::Normal,
        };
        let text = look
            .glows
            .iter()
            .fold(DrawCommand::text(glyph.text(), center, style), |cmd, glow| {
                cmd.with_shadow(*glow)
            });
        text.with_transform(Transform2D::scale_about(1.0, look.scale_y, center))
            .with_opacity(look.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn knob(on: bool) -> KnobButton {
        KnobButton::new(on, &ToggleConfig::dark(), 240.0, 224.0)
    }

    fn layers(cmd: &DrawCommand) -> Vec<&DrawCommand> {
        cmd.children()
    }

    fn rim_opacities(knob: &KnobButton) -> (f32, f32) {
        let rendered = knob.render();
        let rim = layers(&rendered)[1];
        let inner = rim.children()[0];
        let alphas: Vec<f32> = inner
            .children()
            .iter()
            .map(|c| match c {
                DrawCommand::Opacity { alpha, .. } => *alpha,
                other => panic!("Expected Opacity, got {other:?}"),
            })
            .collect();
        (alphas[0], alphas[1])
    }

    // ===== StrokeLayer Tests =====

    #[test]
    fn test_stroke_layer_angles() {
        assert_eq!(StrokeLayer::TOP.angles(), (180.0, 360.0));
        assert_eq!(StrokeLayer::BOTTOM.angles(), (0.0, 180.0));
    }

    #[test]
    fn test_stroke_layer_sweeps_named_edge() {
        // y grows downwards, so a negative sine is above the center.
        let mid_sine = |layer: StrokeLayer| {
            let (start, end) = layer.angles();
            ((start + end) / 2.0).to_radians().sin()
        };
        assert!(mid_sine(StrokeLayer::TOP) < 0.0);
        assert!(mid_sine(StrokeLayer::BOTTOM) > 0.0);
    }

    #[test]
    fn test_stroke_layer_visibility() {
        assert_eq!(StrokeLayer::TOP.opacity_for(false), 1.0);
        assert_eq!(StrokeLayer::TOP.opacity_for(true), 0.0);
        assert_eq!(StrokeLayer::BOTTOM.opacity_for(true), 1.0);
        assert_eq!(StrokeLayer::BOTTOM.opacity_for(false), 0.0);
    }

    #[test]
    fn test_stroke_layer_paint() {
        let cmd = StrokeLayer::BOTTOM.render(200.0, 180.0, 1.0);
        let DrawCommand::Opacity { child, .. } = cmd else {
            panic!("Expected Opacity");
        };
        match child.as_ref() {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(radius.top_left, 100.0);
                let stroke = style.stroke.as_ref().unwrap();
                assert!((stroke.width - 1.5).abs() < 1e-5);
                let stops = stroke.paint.stops();
                assert_eq!(stops.len(), 3);
                assert!(stops[0].color.is_transparent());
                assert!((stops[1].color.a - 0.4).abs() < 1e-6);
                assert!(stops[2].color.is_transparent());
            }
            other => panic!("Expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_rim_matches_state() {
        assert_eq!(rim_opacities(&knob(true)), (0.0, 1.0));
        assert_eq!(rim_opacities(&knob(false)), (1.0, 0.0));
    }

    #[test]
    fn test_rim_is_blurred() {
        let rendered = knob(true).render();
        assert!(matches!(layers(&rendered)[1], DrawCommand::Blur { radius, .. } if *radius == 0.5));
    }

    // ===== Background Tests =====

    #[test]
    fn test_background_gradient() {
        let rendered = knob(true).render();
        match layers(&rendered)[0] {
            DrawCommand::Rect { bounds, radius, style } => {
                assert_eq!(*bounds, Rect::new(0.0, 0.0, 240.0, 224.0));
                assert_eq!(radius.top_left, 120.0);
                match style.fill.as_ref().unwrap() {
                    Paint::Radial {
                        center,
                        start_radius,
                        end_radius,
                        stops,
                    } => {
                        assert_eq!(center.x, 120.0);
                        assert!((center.y + 44.8).abs() < 1e-3);
                        assert_eq!(*start_radius, 0.0);
                        assert_eq!(*end_radius, 224.0);
                        assert_eq!(stops.len(), 5);
                        assert_eq!(stops[2].color.to_hex(), "#2a2a2a");
                    }
                    other => panic!("Expected Radial, got {other:?}"),
                }
            }
            other => panic!("Expected Rect, got {other:?}"),
        }
    }

    #[test]
    fn test_background_palette_switches() {
        let on = knob(true).render();
        let off = knob(false).render();
        assert_ne!(layers(&on)[0], layers(&off)[0]);
    }

    // ===== Label Tests =====

    #[test]
    fn test_label_positions() {
        let k = knob(true);
        assert!((k.font_size() - 32.4).abs() < 1e-4);
        let top = k.label_center(Glyph::On);
        let bottom = k.label_center(Glyph::Off);
        assert_eq!(top.x, 120.0);
        assert!((top.y - (11.2 + 16.2)).abs() < 1e-3);
        assert!((bottom.y - (224.0 - 11.2 - 16.2)).abs() < 1e-3);
    }

    #[test]
    fn test_glyph_text() {
        assert_eq!(Glyph::On.text(), "I");
        assert_eq!(Glyph::Off.text(), "O");
    }

    // ===== Activation Tests =====

    #[test]
    fn test_activate_runs_action_once() {
        let calls = Cell::new(0);
        knob(true).activate(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_activate_does_not_change_knob() {
        let k = knob(false);
        let before = k.render();
        k.activate(|| {});
        assert_eq!(k.render(), before);
    }

    #[test]
    fn test_hit_test_shape() {
        let k = KnobButton::new(true, &ToggleConfig::dark(), 100.0, 100.0);
        assert!(k.hit_test(Point::new(50.0, 50.0)));
        assert!(k.hit_test(Point::new(50.0, 1.0)));
        // Corner of the bounding box lies outside the circle.
        assert!(!k.hit_test(Point::new(2.0, 2.0)));
        assert!(!k.hit_test(Point::new(-1.0, 50.0)));
    }

    #[test]
    fn test_degenerate_knob() {
        let k = KnobButton::new(true, &ToggleConfig::dark(), -5.0, f32::NAN);
        assert_eq!(k.width(), 0.0);
        assert_eq!(k.height(), 0.0);
        assert!(!k.hit_test(Point::new(1.0, 1.0)));
    }
}
