//! Neumorphic toggle switch and the layers it is drawn from.
//!
//! ```
//! use neumorph_core::{Binding, ReactiveCell, Rect, Widget};
//! use neumorph_widgets::{NeumorphicToggle, ToggleGeometry};
//!
//! let state = ReactiveCell::new(true);
//! let mut toggle = NeumorphicToggle::new(Binding::from_cell(&state));
//! toggle.layout(Rect::new(0.0, 0.0, 320.0, 320.0));
//!
//! assert_eq!(toggle.geometry(), ToggleGeometry::from_side(320.0));
//! toggle.activate();
//! assert!(!state.get());
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod knob;
pub mod ring;
pub mod shadow_mask;
pub mod toggle;
pub mod visuals;
pub mod well;

pub use config::{ToggleConfig, ToggleSettings};
pub use error::ConfigError;
pub use geometry::{sanitize_side, ToggleGeometry};
pub use knob::{Glyph, KnobButton, StrokeLayer};
pub use ring::OuterRing;
pub use shadow_mask::InnerShadowMask;
pub use toggle::{NeumorphicToggle, ToggleChanged};
pub use visuals::{GlyphVisuals, ToggleVisuals};
pub use well::InnerWell;
