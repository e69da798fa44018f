//! Accessibility nodes for screen readers and assistive technology.

use crate::geometry::{Point, Rect};
use crate::widget::{AccessibleRole, AccessibleValue, Widget, WidgetId};

/// An accessible element as exposed to assistive technology.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleNode {
    /// Widget ID the node describes.
    pub widget_id: WidgetId,
    /// Accessible name (label).
    pub name: Option<String>,
    /// Accessible role.
    pub role: AccessibleRole,
    /// Bounding rectangle.
    pub bounds: Rect,
    /// Whether the element can be reached by sequential focus navigation.
    pub focusable: bool,
    /// Tab index (-1 = not focusable, 0 = natural order).
    pub tab_index: i32,
    /// Current value (for sliders).
    pub value_now: Option<f64>,
    /// Minimum value (for sliders).
    pub value_min: Option<f64>,
    /// Maximum value (for sliders).
    pub value_max: Option<f64>,
    /// Whether the value is read-only.
    pub read_only: bool,
}

impl AccessibleNode {
    /// Create a new accessible node.
    pub const fn new(widget_id: WidgetId, role: AccessibleRole, bounds: Rect) -> Self {
        Self {
            widget_id,
            name: None,
            role,
            bounds,
            focusable: false,
            tab_index: -1,
            value_now: None,
            value_min: None,
            value_max: None,
            read_only: false,
        }
    }

    /// Create a slider node.
    pub fn slider(widget_id: WidgetId, value: AccessibleValue, bounds: Rect) -> Self {
        Self::new(widget_id, AccessibleRole::Slider, bounds).with_value(value)
    }

    /// Describe a widget.
    pub fn from_widget(widget_id: WidgetId, widget: &dyn Widget) -> Self {
        let mut node = Self::new(widget_id, widget.accessible_role(), widget.bounds())
            .with_focusable(widget.is_focusable());
        node.name = widget.accessible_name().map(str::to_string);
        match widget.accessible_value() {
            Some(value) => node.with_value(value),
            None => node,
        }
    }

    /// Attach a range value.
    #[must_use]
    pub const fn with_value(mut self, value: AccessibleValue) -> Self {
        self.value_now = Some(value.now);
        self.value_min = Some(value.min);
        self.value_max = Some(value.max);
        self.read_only = value.read_only;
        self
    }

    /// Set the node's name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the node as focusable.
    #[must_use]
    pub const fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self.tab_index = if focusable { 0 } else { -1 };
        self
    }

    /// Check if this node contains the given point.
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains_point(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(read_only: bool) -> AccessibleValue {
        AccessibleValue {
            now: 3.4,
            min: 0.0,
            max: 5.0,
            read_only,
        }
    }

    #[test]
    fn test_slider_node() {
        let node = AccessibleNode::slider(WidgetId::new(1), value(false), Rect::default());
        assert_eq!(node.role, AccessibleRole::Slider);
        assert_eq!(node.value_now, Some(3.4));
        assert_eq!(node.value_min, Some(0.0));
        assert_eq!(node.value_max, Some(5.0));
        assert!(!node.read_only);
        assert!(!node.focusable);
        assert_eq!(node.tab_index, -1);
    }

    #[test]
    fn test_with_focusable_sets_tab_index() {
        let node = AccessibleNode::new(WidgetId::new(2), AccessibleRole::Button, Rect::default())
            .with_focusable(true);
        assert_eq!(node.tab_index, 0);
        let node = node.with_focusable(false);
        assert_eq!(node.tab_index, -1);
    }

    #[test]
    fn test_with_name_and_hit() {
        let node = AccessibleNode::slider(
            WidgetId::new(3),
            value(true),
            Rect::new(0.0, 0.0, 136.0, 24.0),
        )
        .with_name("Rating");
        assert_eq!(node.name.as_deref(), Some("Rating"));
        assert!(node.read_only);
        assert!(node.contains_point(Point::new(50.0, 12.0)));
        assert!(!node.contains_point(Point::new(150.0, 12.0)));
    }
}
