//! End-to-end rating scenarios: a caller owning the value, events in, commits out.

use asterism_core::{
    AccessibleNode, Constraints, DrawCommand, Event, Key, MouseButton, Point, Rect,
    RecordingCanvas, Widget, WidgetId,
};
use asterism_widgets::{HoverState, Rating, RatingChanged, TextGlyph};
use std::sync::{Arc, Mutex};

/// A host that owns the value and feeds commits back, as a real caller would.
struct Host {
    rating: Rating,
    commits: Arc<Mutex<Vec<f64>>>,
}

impl Host {
    fn new(value: f64) -> Self {
        Self::with(Rating::new(value))
    }

    fn with(rating: Rating) -> Self {
        let commits = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&commits);
        let mut rating = rating.on_change(move |v| sink.lock().unwrap().push(v));
        let size = rating.measure(Constraints::unbounded());
        rating.layout(Rect::from_origin_size(Point::ORIGIN, size));
        Self { rating, commits }
    }

    fn dispatch(&mut self, event: Event) -> bool {
        match self.rating.event(&event) {
            Some(message) => {
                if let Ok(changed) = message.downcast::<RatingChanged>() {
                    self.rating.set_value(changed.value);
                }
                true
            }
            None => false,
        }
    }

    fn hover(&mut self, index: usize) {
        let position = self.rating.slot_bounds(index).center();
        self.dispatch(Event::MouseMove { position });
    }

    fn click(&mut self, index: usize) -> bool {
        let position = self.rating.slot_bounds(index).center();
        self.dispatch(Event::MouseDown {
            position,
            button: MouseButton::Left,
        })
    }

    fn commits(&self) -> Vec<f64> {
        self.commits.lock().unwrap().clone()
    }
}

// =============================================================================
// Fill Scenarios
// =============================================================================

#[test]
fn test_fractional_value_fills() {
    assert_eq!(
        Rating::new(3.4)
            .fill_fractions()
            .iter()
            .map(|f| f.round())
            .collect::<Vec<_>>(),
        vec![100.0, 100.0, 100.0, 40.0, 0.0]
    );
}

#[test]
fn test_empty_and_full_fills() {
    assert_eq!(Rating::new(0.0).fill_fractions(), vec![0.0; 5]);
    assert_eq!(Rating::new(5.0).fill_fractions(), vec![100.0; 5]);
}

#[test]
fn test_zero_count_renders_nothing() {
    let host = Host::with(Rating::new(3.0).count(0));
    let mut canvas = RecordingCanvas::new();
    host.rating.paint(&mut canvas);
    assert!(canvas.is_empty());
    assert!(host.rating.fill_fractions().is_empty());
}

// =============================================================================
// Hover Scenarios
// =============================================================================

#[test]
fn test_hover_preview_then_leave_restores_value() {
    let mut host = Host::new(2.0);
    host.hover(1);
    assert_eq!(host.rating.hover(), HoverState::Previewing(1));
    assert_eq!(host.rating.fill_fractions(), vec![100.0, 100.0, 0.0, 0.0, 0.0]);

    host.hover(3);
    assert_eq!(
        host.rating.fill_fractions(),
        vec![100.0, 100.0, 100.0, 100.0, 0.0]
    );

    host.dispatch(Event::MouseLeave);
    assert_eq!(host.rating.get_value(), 2.0);
    assert_eq!(host.rating.fill_fractions(), vec![100.0, 100.0, 0.0, 0.0, 0.0]);
    assert!(host.commits().is_empty());
}

#[test]
fn test_hover_never_commits() {
    let mut host = Host::new(1.0);
    for index in 0..5 {
        host.hover(index);
    }
    host.dispatch(Event::MouseLeave);
    assert!(host.commits().is_empty());
    assert_eq!(host.rating.get_value(), 1.0);
}

// =============================================================================
// Commit Scenarios
// =============================================================================

#[test]
fn test_click_commits_and_host_feeds_back() {
    let mut host = Host::new(1.0);
    assert!(host.click(2));
    assert_eq!(host.commits(), vec![3.0]);
    assert_eq!(host.rating.get_value(), 3.0);
}

#[test]
fn test_keyboard_walk_to_bounds() {
    let mut host = Host::new(3.0);
    let right = Event::KeyDown {
        key: Key::ArrowRight,
    };
    assert!(host.dispatch(right.clone()));
    assert!(host.dispatch(right.clone()));
    // At max: not consumed, so the host keeps its default handling.
    assert!(!host.dispatch(right));
    assert_eq!(host.commits(), vec![4.0, 5.0]);

    for _ in 0..6 {
        host.dispatch(Event::KeyDown {
            key: Key::ArrowDown,
        });
    }
    assert_eq!(host.rating.get_value(), 0.0);
    assert_eq!(host.commits(), vec![4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn test_key_increase_at_max_emits_nothing() {
    let mut host = Host::new(5.0);
    assert!(!host.dispatch(Event::KeyDown {
        key: Key::ArrowRight
    }));
    assert!(host.commits().is_empty());
}

#[test]
fn test_fractional_value_steps_to_bound() {
    let mut host = Host::new(4.6);
    host.dispatch(Event::KeyDown { key: Key::ArrowUp });
    assert_eq!(host.commits(), vec![5.0]);
}

#[test]
fn test_read_only_suppresses_everything() {
    let mut host = Host::with(Rating::new(2.0).read_only(true));
    host.hover(4);
    assert!(!host.click(4));
    assert!(!host.dispatch(Event::KeyDown {
        key: Key::ArrowRight
    }));
    assert_eq!(host.rating.hover(), HoverState::Idle);
    assert!(host.commits().is_empty());
}

#[test]
fn test_toggling_read_only_mid_hover() {
    let mut host = Host::new(0.0);
    host.hover(2);
    host.rating.set_read_only(true);
    assert_eq!(host.rating.fill_fractions(), vec![0.0; 5]);
    host.rating.set_read_only(false);
    assert!(host.click(0));
    assert_eq!(host.commits(), vec![1.0]);
}

// =============================================================================
// Rendering + Accessibility Scenarios
// =============================================================================

#[test]
fn test_custom_glyphs_paint_full_size_under_clip() {
    let host = Host::with(
        Rating::new(1.5)
            .count(2)
            .size(32.0)
            .icon(Arc::new(TextGlyph::new("♥")))
            .empty_icon(Arc::new(TextGlyph::new("♡"))),
    );
    let mut canvas = RecordingCanvas::new();
    host.rating.paint(&mut canvas);

    let partial = &canvas.commands()[3];
    assert_eq!(
        partial.clip_bounds(),
        Some(Rect::new(36.0, 0.0, 16.0, 32.0))
    );
    match partial.unclipped() {
        DrawCommand::Text { content, style, .. } => {
            assert_eq!(content, "♥");
            assert_eq!(style.size, 32.0);
        }
        other => panic!("Expected Text, got {other:?}"),
    }
}

#[test]
fn test_accessible_node_tracks_value_not_preview() {
    let mut host = Host::new(2.0);
    host.hover(4);
    let node = AccessibleNode::from_widget(WidgetId::new(1), &host.rating);
    assert_eq!(node.value_now, Some(2.0));
    assert_eq!(node.value_min, Some(0.0));
    assert_eq!(node.value_max, Some(5.0));
    assert_eq!(node.tab_index, 0);

    let read_only = Host::with(Rating::new(2.0).read_only(true));
    let node = AccessibleNode::from_widget(WidgetId::new(2), &read_only.rating);
    assert_eq!(node.tab_index, -1);
    assert!(node.read_only);
}
