//! Rating widget: a row of partially fillable icon slots.

use asterism_core::{
    widget::{AccessibleRole, AccessibleValue, LayoutResult},
    Canvas, Color, Constraints, Event, GlyphRef, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::controller::{HoverState, KeyIntent, RatingController};
use crate::slot::{SlotComposite, SlotRenderer};

/// Default number of slots.
pub const DEFAULT_COUNT: usize = 5;

/// Default gap between slots.
pub const DEFAULT_SPACING: f32 = 4.0;

/// Commit callback.
pub type ChangeHandler = Arc<dyn Fn(f64) + Send + Sync>;

/// Message emitted when the user commits a rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChanged {
    /// The proposed value
    pub value: f64,
}

/// Rating widget.
///
/// The value is controlled: the widget reads it, proposes replacements
/// through `on_change`, and shows a new value only after the caller pushes
/// it back with [`Rating::set_value`].
pub struct Rating {
    /// Caller-owned value
    value: f64,
    /// Glyphs, size and tints
    renderer: SlotRenderer,
    /// Gap between slots
    spacing: f32,
    /// Hover state and commit policy
    controller: RatingController,
    /// Commit callback
    on_change: Option<ChangeHandler>,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl fmt::Debug for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rating")
            .field("value", &self.value)
            .field("renderer", &self.renderer)
            .field("spacing", &self.spacing)
            .field("controller", &self.controller)
            .field("on_change", &self.on_change.is_some())
            .field("test_id_value", &self.test_id_value)
            .field("accessible_name_value", &self.accessible_name_value)
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Rating {
    /// Create a rating showing `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            renderer: SlotRenderer::default(),
            spacing: DEFAULT_SPACING,
            controller: RatingController::new(DEFAULT_COUNT, false),
            on_change: None,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the number of slots.
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.controller.set_count(count);
        self
    }

    /// Set the filled glyph.
    #[must_use]
    pub fn icon(mut self, glyph: GlyphRef) -> Self {
        self.renderer = self.renderer.filled(glyph);
        self
    }

    /// Set the empty glyph. Without one the filled glyph is reused.
    #[must_use]
    pub fn empty_icon(mut self, glyph: GlyphRef) -> Self {
        self.renderer = self.renderer.empty(Some(glyph));
        self
    }

    /// Set the filled tint.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.renderer = self.renderer.color(color);
        self
    }

    /// Set the empty tint.
    #[must_use]
    pub fn empty_color(mut self, color: Color) -> Self {
        self.renderer = self.renderer.empty_color(color);
        self
    }

    /// Set the slot side length.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.renderer = self.renderer.size(size);
        self
    }

    /// Set the gap between slots.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    /// Set read-only state.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.controller.set_read_only(read_only);
        self
    }

    /// Register the commit callback.
    #[must_use]
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get the caller-supplied value.
    #[must_use]
    pub const fn get_value(&self) -> f64 {
        self.value
    }

    /// Get the slot count.
    #[must_use]
    pub const fn get_count(&self) -> usize {
        self.controller.count()
    }

    /// Get the gap between slots.
    #[must_use]
    pub const fn get_spacing(&self) -> f32 {
        self.spacing
    }

    /// Get the slot renderer.
    #[must_use]
    pub const fn renderer(&self) -> &SlotRenderer {
        &self.renderer
    }

    /// Check if read-only.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.controller.is_read_only()
    }

    /// Check if a commit callback is registered.
    #[must_use]
    pub fn has_on_change(&self) -> bool {
        self.on_change.is_some()
    }

    /// Current hover state.
    #[must_use]
    pub const fn hover(&self) -> HoverState {
        self.controller.hover()
    }

    /// Replace the value (the caller's answer to a commit).
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Change read-only state; enabling it drops any preview.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.controller.set_read_only(read_only);
    }

    /// Change the slot count.
    pub fn set_count(&mut self, count: usize) {
        self.controller.set_count(count);
    }

    /// Value the slots are currently rendered from.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.controller.display_value(self.value)
    }

    /// Per-slot fill fractions for the display value.
    #[must_use]
    pub fn fill_fractions(&self) -> Vec<f64> {
        self.controller.fill_fractions(self.value)
    }

    /// Bounds of slot `index` under the current layout.
    #[must_use]
    pub fn slot_bounds(&self, index: usize) -> Rect {
        let size = self.renderer.get_size();
        let x = self.bounds.x + index as f32 * (size + self.spacing);
        let y = self.bounds.y + (self.bounds.height - size) / 2.0;
        Rect::new(x, y, size, size)
    }

    /// Slot under `point`, if any. Points in the gaps hit nothing.
    #[must_use]
    pub fn slot_at(&self, point: Point) -> Option<usize> {
        (0..self.get_count()).find(|&index| self.slot_bounds(index).contains_point(&point))
    }

    /// Composites for every slot, in order.
    #[must_use]
    pub fn composites(&self) -> Vec<SlotComposite> {
        self.fill_fractions()
            .into_iter()
            .enumerate()
            .map(|(index, fraction)| {
                self.renderer
                    .render(self.slot_bounds(index).origin(), fraction)
            })
            .collect()
    }

    fn commit(&self, proposed: Option<f64>) -> Option<Box<dyn Any + Send>> {
        let value = proposed?;
        let handler = self.on_change.as_ref()?;
        handler(value);
        Some(Box::new(RatingChanged { value }))
    }

    fn on_pointer_move(&mut self, position: Point) {
        if !self.bounds.contains_point(&position) {
            self.controller.pointer_leave();
            return;
        }
        if let Some(index) = self.slot_at(position) {
            self.controller.pointer_enter(index);
        }
    }
}

impl Widget for Rating {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let count = self.get_count();
        let size = self.renderer.get_size();
        let gaps = count.saturating_sub(1) as f32;
        let width = count as f32 * size + gaps * self.spacing;
        let height = if count == 0 { 0.0 } else { size };
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for composite in self.composites() {
            composite.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                self.on_pointer_move(*position);
                None
            }
            Event::MouseLeave => {
                self.controller.pointer_leave();
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let index = self.slot_at(*position)?;
                let proposed = self.controller.click(index, self.has_on_change());
                self.commit(proposed)
            }
            Event::KeyDown { key } => {
                let intent = KeyIntent::from_key(*key)?;
                let proposed = self
                    .controller
                    .key(intent, self.value, self.has_on_change());
                self.commit(proposed)
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.is_read_only()
    }

    fn is_focusable(&self) -> bool {
        !self.is_read_only()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn accessible_value(&self) -> Option<AccessibleValue> {
        Some(AccessibleValue {
            now: self.value,
            min: 0.0,
            max: self.get_count() as f64,
            read_only: self.is_read_only(),
        })
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
