//! Accessibility checks for widget trees.
//!
//! Covers the WCAG 2.1 rules a widget can answer for itself:
//! - Name/role/value (4.1.2)
//! - Keyboard accessibility (2.1.1)
//! - Touch target size (2.5.5)

use neumorph_core::widget::AccessibleRole;
use neumorph_core::Widget;

/// Minimum touch target size in pixels (WCAG 2.5.5)
pub const MIN_TOUCH_TARGET_SIZE: f32 = 44.0;

/// Accessibility checker.
pub struct A11yChecker;

impl A11yChecker {
    /// Check a widget tree with the default configuration.
    #[must_use]
    pub fn check(widget: &dyn Widget) -> A11yReport {
        Self::check_with_config(widget, &A11yConfig::default())
    }

    /// Check with custom configuration.
    #[must_use]
    pub fn check_with_config(widget: &dyn Widget, config: &A11yConfig) -> A11yReport {
        let mut violations = Vec::new();
        Self::check_widget(widget, config, &mut violations);
        A11yReport { violations }
    }

    fn check_widget(widget: &dyn Widget, config: &A11yConfig, violations: &mut Vec<A11yViolation>) {
        let interactive = widget.is_interactive();

        if interactive && widget.accessible_name().map_or(true, str::is_empty) {
            violations.push(A11yViolation::new(
                "aria-label",
                "Interactive element missing accessible name",
                "4.1.2",
                Impact::Critical,
            ));
        }

        if interactive && widget.accessible_role() == AccessibleRole::Generic {
            violations.push(A11yViolation::new(
                "aria-role",
                "Interactive element has no specific role",
                "4.1.2",
                Impact::Serious,
            ));
        }

        if interactive && !widget.is_focusable() {
            violations.push(A11yViolation::new(
                "keyboard",
                "Interactive element is not keyboard focusable",
                "2.1.1",
                Impact::Critical,
            ));
        }

        if config.check_touch_targets && interactive {
            let bounds = widget.bounds();
            let min = config.min_touch_target;
            if bounds.width < min || bounds.height < min {
                violations.push(A11yViolation::new(
                    "touch-target",
                    format!(
                        "Touch target too small: {}x{} (minimum {min}x{min})",
                        bounds.width, bounds.height
                    ),
                    "2.5.5",
                    Impact::Moderate,
                ));
            }
        }

        for child in widget.children() {
            Self::check_widget(child.as_ref(), config, violations);
        }
    }
}

/// Accessibility report.
#[derive(Debug)]
pub struct A11yReport {
    /// List of violations found
    pub violations: Vec<A11yViolation>,
}

impl A11yReport {
    /// Check if all accessibility tests passed.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get critical violations only.
    #[must_use]
    pub fn critical(&self) -> Vec<&A11yViolation> {
        self.violations
            .iter()
            .filter(|v| v.impact == Impact::Critical)
            .collect()
    }

    /// Assert that all accessibility tests pass.
    ///
    /// # Panics
    ///
    /// Panics if there are any violations.
    pub fn assert_pass(&self) {
        if !self.is_passing() {
            let messages: Vec<String> = self
                .violations
                .iter()
                .map(|v| {
                    format!(
                        "  [{:?}] {}: {} (WCAG {})",
                        v.impact, v.rule, v.message, v.wcag
                    )
                })
                .collect();

            panic!(
                "Accessibility check failed with {} violation(s):\n{}",
                self.violations.len(),
                messages.join("\n")
            );
        }
    }
}

/// A single accessibility violation.
#[derive(Debug, Clone)]
pub struct A11yViolation {
    /// Rule that was violated
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// WCAG success criterion
    pub wcag: String,
    /// Impact level
    pub impact: Impact,
}

impl A11yViolation {
    fn new(rule: &str, message: impl Into<String>, wcag: &str, impact: Impact) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            wcag: wcag.to_string(),
            impact,
        }
    }
}

/// Impact level of an accessibility violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Minor issue
    Minor,
    /// Moderate issue
    Moderate,
    /// Serious issue
    Serious,
    /// Critical issue - must fix
    Critical,
}

/// Configuration for accessibility checks.
#[derive(Debug, Clone)]
pub struct A11yConfig {
    /// Check touch target sizes (WCAG 2.5.5)
    pub check_touch_targets: bool,
    /// Smallest acceptable target side
    pub min_touch_target: f32,
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            check_touch_targets: true,
            min_touch_target: MIN_TOUCH_TARGET_SIZE,
        }
    }
}
