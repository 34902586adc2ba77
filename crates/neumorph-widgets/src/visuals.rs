//! State-dependent visual parameters.
//!
//! Every layer reads its state-dependent numbers from [`ToggleVisuals`]
//! rather than from the boolean directly, so a host animating a state change
//! can blend the two end states and render the frames in between.

use crate::config::ToggleConfig;
use neumorph_core::{Color, GradientStop, Interpolate, Shadow};
use serde::{Deserialize, Serialize};

/// Knob background while ON: `(gray byte, stop offset)`.
const ACTIVE_KNOB_STOPS: [(u8, f32); 5] = [
    (0x18, 0.00),
    (0x1f, 0.22),
    (0x2a, 0.50),
    (0x3a, 0.80),
    (0x4a, 1.00),
];

/// Knob background while OFF.
const INACTIVE_KNOB_STOPS: [(u8, f32); 5] = [
    (0x13, 0.00),
    (0x13, 0.60),
    (0x1a, 0.82),
    (0x22, 0.93),
    (0x2a, 1.00),
];

/// First color of the well gradient at rest.
#[must_use]
pub fn well_top_color(on: bool) -> Color {
    if on {
        Color::BLACK
    } else {
        Color::WHITE.opacity(0.25)
    }
}

/// Top-to-bottom shadow-mask gradient at rest.
#[must_use]
pub fn mask_gradient(on: bool) -> Vec<Color> {
    if on {
        vec![Color::BLACK, Color::BLACK, Color::TRANSPARENT]
    } else {
        vec![Color::TRANSPARENT, Color::BLACK]
    }
}

fn gray_stops(stops: &[(u8, f32)]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|&(level, offset)| GradientStop::new(Color::white(f32::from(level) / 255.0), offset))
        .collect()
}

/// How one knob glyph ("I" or "O") looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphVisuals {
    /// Text color
    pub color: Color,
    /// Vertical scale about the glyph center
    pub scale_y: f32,
    /// Layer opacity
    pub opacity: f32,
    /// Glow shadows, innermost first (empty = no glow)
    pub glows: Vec<Shadow>,
}

impl GlyphVisuals {
    /// Whether the glyph currently glows.
    #[must_use]
    pub fn is_glowing(&self) -> bool {
        !self.glows.is_empty()
    }

    /// The "I" glyph.
    #[must_use]
    pub fn top(on: bool, config: &ToggleConfig) -> Self {
        if on {
            Self {
                color: config.active_color,
                scale_y: 1.0,
                opacity: 1.0,
                glows: vec![
                    Shadow::glow(config.active_color, 4.0),
                    Shadow::glow(config.active_color.opacity(0.8), 10.0),
                ],
            }
        } else {
            Self {
                color: config.inactive_color,
                scale_y: 0.85,
                opacity: 0.6,
                glows: Vec::new(),
            }
        }
    }

    /// The "O" glyph.
    #[must_use]
    pub fn bottom(on: bool, config: &ToggleConfig) -> Self {
        if on {
            Self {
                color: config.inactive_color,
                scale_y: 0.75,
                opacity: 0.6,
                glows: Vec::new(),
            }
        } else {
            Self {
                color: Color::WHITE.opacity(0.7),
                scale_y: 1.0,
                opacity: 1.0,
                glows: vec![
                    Shadow::glow(Color::WHITE.opacity(0.7), 2.0),
                    Shadow::glow(Color::WHITE.opacity(0.4), 10.0),
                ],
            }
        }
    }
}

impl Interpolate for GlyphVisuals {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            color: Color::interpolate(&from.color, &to.color, t),
            scale_y: f32::interpolate(&from.scale_y, &to.scale_y, t),
            opacity: f32::interpolate(&from.opacity, &to.opacity, t),
            glows: blend_glows(from, to, t),
        }
    }
}

fn fade_shadows(shadows: &[Shadow], alpha: f32) -> Vec<Shadow> {
    shadows
        .iter()
        .map(|s| Shadow {
            color: s.color.opacity(alpha),
            ..*s
        })
        .collect()
}

/// Glows fade in and out through alpha; a fully faded glow is dropped.
fn blend_glows(from: &GlyphVisuals, to: &GlyphVisuals, t: f64) -> Vec<Shadow> {
    let t = t.clamp(0.0, 1.0);
    let blended = match (from.is_glowing(), to.is_glowing()) {
        (false, true) => fade_shadows(&to.glows, t as f32),
        (true, false) => fade_shadows(&from.glows, 1.0 - t as f32),
        _ => Vec::interpolate(&from.glows, &to.glows, t),
    };
    blended
        .into_iter()
        .filter(|s| !s.color.is_transparent())
        .collect()
}

/// Every state-dependent number the layers need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleVisuals {
    /// Knob lift direction: -1.0 raised (ON), +1.0 lowered (OFF)
    pub lift: f32,
    /// First color of the well gradient
    pub well_top: Color,
    /// Knob background gradient stops
    pub knob_stops: Vec<GradientStop>,
    /// Opacity of the top rim highlight (180°→360°)
    pub top_rim_opacity: f32,
    /// Opacity of the bottom rim highlight (0°→180°)
    pub bottom_rim_opacity: f32,
    /// The "I" glyph
    pub top_glyph: GlyphVisuals,
    /// The "O" glyph
    pub bottom_glyph: GlyphVisuals,
    /// Shadow-mask stroke gradient, top to bottom
    pub mask_colors: Vec<Color>,
}

impl ToggleVisuals {
    /// Resting visuals for a state.
    #[must_use]
    pub fn for_state(on: bool, config: &ToggleConfig) -> Self {
        Self {
            lift: if on { -1.0 } else { 1.0 },
            well_top: well_top_color(on),
            knob_stops: if on {
                gray_stops(&ACTIVE_KNOB_STOPS)
            } else {
                gray_stops(&INACTIVE_KNOB_STOPS)
            },
            top_rim_opacity: if on { 0.0 } else { 1.0 },
            bottom_rim_opacity: if on { 1.0 } else { 0.0 },
            top_glyph: GlyphVisuals::top(on, config),
            bottom_glyph: GlyphVisuals::bottom(on, config),
            mask_colors: mask_gradient(on),
        }
    }

    /// Visuals partway through a change towards `to_on`.
    ///
    /// `progress` is the eased progress (0.0 = old state, 1.0 = new state).
    #[must_use]
    pub fn animating(to_on: bool, config: &ToggleConfig, progress: f64) -> Self {
        Self::interpolate(
            &Self::for_state(!to_on, config),
            &Self::for_state(to_on, config),
            progress,
        )
    }
}

impl Interpolate for ToggleVisuals {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return from.clone();
        }
        if t >= 1.0 {
            return to.clone();
        }
        Self {
            lift: f32::interpolate(&from.lift, &to.lift, t),
            well_top: Color::interpolate(&from.well_top, &to.well_top, t),
            knob_stops: Vec::interpolate(&from.knob_stops, &to.knob_stops, t),
            top_rim_opacity: f32::interpolate(
                &from.top_rim_opacity,
                &to.top_rim_opacity,
                t,
            ),
            bottom_rim_opacity: f32::interpolate(
                &from.bottom_rim_opacity,
                &to.bottom_rim_opacity,
                t,
            ),
            top_glyph: GlyphVisuals::interpolate(&from.top_glyph, &to.top_glyph, t),
            bottom_glyph: GlyphVisuals::interpolate(&from.bottom_glyph, &to.bottom_glyph, t),
            mask_colors: Vec::interpolate(&from.mask_colors, &to.mask_colors, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark() -> ToggleConfig {
        ToggleConfig::dark()
    }

    // ===== Resting State Tests =====

    #[test]
    fn test_on_state() {
        let v = ToggleVisuals::for_state(true, &dark());
        assert_eq!(v.lift, -1.0);
        assert_eq!(v.well_top, Color::BLACK);
        assert_eq!(v.top_rim_opacity, 0.0);
        assert_eq!(v.bottom_rim_opacity, 1.0);
        assert_eq!(v.mask_colors.len(), 3);
        assert_eq!(v.knob_stops[0].color.to_hex(), "#181818");
        assert_eq!(v.knob_stops[4].color.to_hex(), "#4a4a4a");
    }

    #[test]
    fn test_off_state() {
        let v = ToggleVisuals::for_state(false, &dark());
        assert_eq!(v.lift, 1.0);
        assert!((v.well_top.a - 0.25).abs() < 1e-6);
        assert_eq!(v.well_top.r, 1.0);
        assert_eq!(v.top_rim_opacity, 1.0);
        assert_eq!(v.bottom_rim_opacity, 0.0);
        assert_eq!(v.mask_colors, vec![Color::TRANSPARENT, Color::BLACK]);
        let offsets: Vec<f32> = v.knob_stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.6, 0.82, 0.93, 1.0]);
    }

    #[test]
    fn test_exactly_one_stroke_visible() {
        for on in [true, false] {
            let v = ToggleVisuals::for_state(on, &dark());
            assert_eq!(v.top_rim_opacity + v.bottom_rim_opacity, 1.0);
        }
    }

    // ===== Glyph Tests =====

    #[test]
    fn test_top_glyph_glows_only_when_on() {
        let config = dark();
        let on = GlyphVisuals::top(true, &config);
        assert!(on.is_glowing());
        assert_eq!(on.color, config.active_color);
        assert_eq!(on.glows[0].blur, 4.0);
        assert_eq!(on.glows[1].blur, 10.0);

        let off = GlyphVisuals::top(false, &config);
        assert!(!off.is_glowing());
        assert_eq!(off.color, config.inactive_color);
        assert_eq!(off.scale_y, 0.85);
        assert_eq!(off.opacity, 0.6);
    }

    #[test]
    fn test_bottom_glyph_glows_only_when_off() {
        let config = dark();
        let off = GlyphVisuals::bottom(false, &config);
        assert!(off.is_glowing());
        assert_eq!(off.glows[0].blur, 2.0);
        assert!((off.glows[1].color.a - 0.4).abs() < 1e-6);

        let on = GlyphVisuals::bottom(true, &config);
        assert!(!on.is_glowing());
        assert_eq!(on.scale_y, 0.75);
        assert_eq!(on.opacity, 0.6);
        assert_eq!(on.color, config.inactive_color);
    }

    // ===== Interpolation Tests =====

    #[test]
    fn test_interpolate_endpoints() {
        let config = dark();
        let off = ToggleVisuals::for_state(false, &config);
        let on = ToggleVisuals::for_state(true, &config);
        assert_eq!(ToggleVisuals::interpolate(&off, &on, 0.0), off);
        assert_eq!(ToggleVisuals::interpolate(&off, &on, 1.0), on);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let mid = ToggleVisuals::animating(true, &dark(), 0.5);
        assert_eq!(mid.lift, 0.0);
        assert_eq!(mid.top_rim_opacity, 0.5);
        assert_eq!(mid.bottom_rim_opacity, 0.5);
        // Mask gradients differ in stop count and switch at the midpoint.
        assert_eq!(mid.mask_colors.len(), 3);
    }

    #[test]
    fn test_knob_stops_blend_stop_by_stop() {
        let mid = ToggleVisuals::animating(true, &dark(), 0.5);
        assert_eq!(mid.knob_stops.len(), 5);
        assert!((mid.knob_stops[1].offset - 0.41).abs() < 1e-6);
        let first = mid.knob_stops[0].color;
        assert!((first.r - f32::from(0x13_u8 + 0x18) / 2.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_glow_fades_in() {
        let quarter = ToggleVisuals::animating(true, &dark(), 0.25);
        let glows = &quarter.top_glyph.glows;
        assert_eq!(glows.len(), 2);
        assert!((glows[0].color.a - 0.9 * 0.25).abs() < 1e-5);
        assert!(quarter.bottom_glyph.is_glowing());
    }

    #[test]
    fn test_glow_dropped_when_faded_out() {
        let done = ToggleVisuals::animating(true, &dark(), 1.0);
        assert!(!done.bottom_glyph.is_glowing());
    }
}
