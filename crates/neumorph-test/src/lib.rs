#![allow(clippy::missing_panics_doc)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
//! Testing harness for neumorph widgets.
//!
//! ```
//! use neumorph_core::{Binding, ReactiveCell};
//! use neumorph_test::Harness;
//! use neumorph_widgets::{NeumorphicToggle, ToggleChanged};
//!
//! let state = ReactiveCell::new(true);
//! let toggle = NeumorphicToggle::new(Binding::from_cell(&state)).test_id("power");
//! let mut harness = Harness::new(toggle).viewport(320.0, 320.0);
//!
//! harness.click("[data-testid='power']");
//! assert!(!state.get());
//! assert_eq!(harness.messages::<ToggleChanged>().len(), 1);
//! ```

mod a11y;
mod harness;
pub mod query;
mod selector;

pub use a11y::{A11yChecker, A11yConfig, A11yReport, A11yViolation, Impact, MIN_TOUCH_TARGET_SIZE};
pub use harness::Harness;
pub use query::{find_text, flatten, texts, Drawn};
pub use selector::{Selector, SelectorError, SelectorParser};
