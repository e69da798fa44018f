//! The widget contract hosts drive, plus paint and accessibility types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self and children within allocated bounds
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Input arrives through [`Widget::event`], one event at a time. An event
//! handler may return a message; a returned message means the widget
//! consumed the event and the host must skip its own default handling for it
//! (scrolling on arrow keys, for instance).
//!
//! # Examples
//!
//! ```
//! use asterism_core::{WidgetId, TypeId};
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identifies one widget instance within a host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Widget type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Identity of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size actually occupied
    pub size: Size,
}

/// A paintable, event-driven element.
pub trait Widget: Send + Sync {
    /// Type identity of the concrete widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size under `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds the host assigned.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Paint into `canvas` using the last laid-out bounds.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event.
    ///
    /// `Some(message)` marks the event as consumed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether pointer and key input has any effect.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether Tab navigation stops here.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Label announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Range value reported to assistive technology, for range controls.
    fn accessible_value(&self) -> Option<AccessibleValue> {
        None
    }

    /// Stable selector for tests.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing surface a widget paints into.
///
/// This is a minimal abstraction over the rendering backend. Clip regions
/// nest: the visible area is the intersection of every pushed clip.
pub trait Canvas {
    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Fill a polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// How a text run is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

/// Accessibility role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Image
    Image,
    /// Slider
    Slider,
}

/// Current value of a range control (slider semantics).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibleValue {
    /// Current value
    pub now: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Whether the value can be changed by the user
    pub read_only: bool,
}
