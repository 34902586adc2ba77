//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand the frame to a GPU/WASM backend)
/// - Diffing (compare two frames)
///
/// Commands recorded while a transform is pushed are wrapped in a
/// [`DrawCommand::Group`] carrying the accumulated transform.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    fn record(&mut self, command: DrawCommand) {
        if self.transform_stack.is_empty() {
            self.commands.push(command);
        } else {
            let transform = self.current_transform();
            self.commands.push(command.with_transform(transform));
        }
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::filled_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.record(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle::new(color, width)),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::text(text, position, style.clone()));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.record(DrawCommand::stroked_circle(
            center,
            radius,
            StrokeStyle::new(color, width),
        ));
    }

    fn draw(&mut self, command: DrawCommand) {
        self.record(command);
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
