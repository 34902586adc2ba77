//! Test harness for driving widgets the way a host would.

use neumorph_core::{
    Constraints, DrawCommand, Event, Key, MouseButton, Point, Rect, RecordingCanvas, Size, TouchId,
    Widget,
};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with a mounted widget.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Current viewport
    viewport: Rect,
    /// Messages emitted by the root, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Every frame painted so far
    frames: Vec<Vec<DrawCommand>>,
}

impl Harness {
    /// Mount a root widget in the default 1280x720 viewport.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
            frames: Vec::new(),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the root out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        &*self.root
    }

    // === Event Simulation ===

    /// Click the center of the widget matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            self.click_at(bounds.center());
        }
        self
    }

    /// Click at an absolute point.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Tap the center of the widget matching the selector.
    pub fn tap(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            let position = bounds.center();
            let id = TouchId(0);
            self.event_queue
                .push_back(Event::TouchStart { id, position });
            self.event_queue.push_back(Event::TouchEnd { id, position });
            self.process_events();
        }
        self
    }

    /// Give keyboard focus to the widget matching the selector.
    pub fn focus(&mut self, selector: &str) -> &mut Self {
        if self.exists(selector) {
            self.event_queue.push_back(Event::FocusIn);
            self.process_events();
        }
        self
    }

    /// Take keyboard focus away from the root.
    pub fn blur(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::FocusOut);
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    // === Rendering ===

    /// Paint the root and keep the recorded commands as a new frame.
    pub fn frame(&mut self) -> &[DrawCommand] {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        self.frames.push(canvas.take_commands());
        let last = self.frames.len() - 1;
        &self.frames[last]
    }

    /// Every frame painted so far.
    #[must_use]
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    // === Messages ===

    /// Number of messages emitted so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Messages of type `T`, oldest first.
    #[must_use]
    pub fn messages<T: Any>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    /// Most recent message of type `T`.
    #[must_use]
    pub fn last_message<T: Any>(&self) -> Option<&T> {
        self.messages.iter().rev().find_map(|m| m.downcast_ref::<T>())
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&*self.root, &sel)
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(&*self.root, &sel, &mut results);
        results
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert the number of messages emitted so far.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_message_count(&self, expected: usize) -> &Self {
        let actual = self.message_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} messages but found {actual}"
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(Size::new(self.viewport.width, self.viewport.height)));
        let bounds = Rect::from_center(self.viewport.center(), size);
        self.root.layout(bounds);
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }

    fn query_bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(|widget| widget.bounds())
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }

    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }

    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}
