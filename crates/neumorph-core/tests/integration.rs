//! Integration tests for neumorph-core.
//!
//! These tests verify the public API works correctly end-to-end.

use neumorph_core::{
    Binding, Canvas, Color, Constraints, DrawCommand, Easing, Event, Interpolate, Key, Paint,
    Point, ReactiveCell, Rect, RecordingCanvas, Size, Transform2D, Transition,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::rgb(0.5, 0.25, 0.75);
    let hex = original.to_hex();
    let parsed = Color::from_hex(&hex).expect("valid hex");

    assert!((original.r - parsed.r).abs() < 0.01);
    assert!((original.g - parsed.g).abs() < 0.01);
    assert!((original.b - parsed.b).abs() < 0.01);
}

#[test]
fn test_color_hex_with_alpha() {
    let parsed = Color::from_hex("#ffffff40").expect("valid hex");
    assert!((parsed.a - 64.0 / 255.0).abs() < 1e-6);
    assert_eq!(parsed.to_hex_with_alpha(), "#ffffff40");
}

#[test]
fn test_gray_levels_form_gradient() {
    let paint = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(0.0, 100.0),
        &[Color::white(0.27), Color::white(0.13)],
    );
    let stops = paint.stops();
    assert_eq!(stops.len(), 2);
    assert!(stops[0].color.r > stops[1].color.r);
}

// =============================================================================
// Layout Integration Tests
// =============================================================================

#[test]
fn test_square_layout_flow() {
    let viewport = Size::new(480.0, 320.0);
    let measured = Constraints::loose(viewport).fit_square();
    assert_eq!(measured, Size::square(320.0));

    let square = Rect::from_size(viewport).centered_square();
    assert_eq!(square, Rect::new(80.0, 0.0, 320.0, 320.0));
    assert!(square.contains_point(&Point::new(240.0, 160.0)));
}

#[test]
fn test_unbounded_layout_collapses() {
    assert_eq!(Constraints::unbounded().fit_square(), Size::ZERO);
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_recording_canvas_applies_pushed_transforms() {
    let mut canvas = RecordingCanvas::new();
    canvas.push_transform(Transform2D::translate(10.0, 20.0));
    canvas.fill_circle(Point::new(0.0, 0.0), 5.0, Color::BLACK);
    canvas.pop_transform();
    canvas.fill_circle(Point::new(0.0, 0.0), 5.0, Color::BLACK);

    let commands = canvas.take_commands();
    assert_eq!(commands.len(), 2);
    match &commands[0] {
        DrawCommand::Group { transform, .. } => {
            assert_eq!(transform.apply(Point::ORIGIN), Point::new(10.0, 20.0));
        }
        other => panic!("Expected Group, got {other:?}"),
    }
    assert!(matches!(commands[1], DrawCommand::Circle { .. }));
    assert!(canvas.is_empty());
}

#[test]
fn test_draw_command_json_roundtrip() {
    let command = DrawCommand::filled_circle(Point::new(5.0, 5.0), 5.0, Color::WHITE)
        .with_blur(2.0)
        .translated(1.0, 2.0);
    let json = serde_json::to_string(&command).unwrap();
    let back: DrawCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(command, back);
}

// =============================================================================
// Binding Integration Tests
// =============================================================================

#[test]
fn test_binding_drives_owner_state() {
    let cell = ReactiveCell::new(true);
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let binding = Binding::from_cell(&cell);
    binding.set(!binding.get());
    binding.set(!binding.get());

    assert!(cell.get());
    assert_eq!(notified.load(Ordering::SeqCst), 2);
}

#[test]
fn test_custom_binding() {
    let writes = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&writes);
    let binding = Binding::new(|| false, move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    binding.set(true);
    assert!(!binding.get());
    assert_eq!(writes.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Animation Integration Tests
// =============================================================================

#[test]
fn test_default_transition_matches_toggle_timing() {
    let transition = Transition::default();
    assert_eq!(transition.duration_ms, 200);
    assert_eq!(transition.easing, Easing::EaseInOut);
    assert_eq!(transition.progress(0), 0.0);
    assert!((transition.progress(100) - 0.5).abs() < 1e-9);
    assert_eq!(transition.progress(200), 1.0);
}

#[test]
fn test_transition_frames_blend_colors() {
    let transition = Transition::new(200, Easing::Linear);
    let frames: Vec<Color> = (0..=4)
        .map(|i| Color::interpolate(&Color::BLACK, &Color::WHITE, transition.progress(i * 50)))
        .collect();
    assert_eq!(frames[0], Color::BLACK);
    assert!((frames[2].r - 0.5).abs() < 1e-6);
    assert_eq!(frames[4], Color::WHITE);
}

// =============================================================================
// Event Integration Tests
// =============================================================================

#[test]
fn test_activation_keys() {
    assert!(Key::Space.is_activation());
    assert!(Key::Enter.is_activation());
    assert!(!Key::Tab.is_activation());

    let event = Event::KeyDown { key: Key::Space };
    assert!(event.press_position().is_none());
}
