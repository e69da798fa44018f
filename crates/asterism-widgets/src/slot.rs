//! Slot renderer: one rating icon, partially filled.
//!
//! A slot is composed of three layers sharing one origin:
//!
//! 1. the empty glyph at full size, tinted with the empty color;
//! 2. a clip region `fill_fraction`% of the slot wide and fully tall;
//! 3. the filled glyph at full size inside the clip, tinted with the fill color.
//!
//! The filled glyph is never laid out at the clip width. Shrinking its bounds
//! would scale the whole icon down instead of revealing part of it.

use asterism_core::{Canvas, Color, Glyph, GlyphRef, Point, Rect, Size};
use std::sync::Arc;

use crate::glyph::StarGlyph;

/// Default slot side length.
pub const DEFAULT_SIZE: f32 = 24.0;

/// Fraction of the slot width left visible for a fill fraction in percent.
///
/// Values below 0 (and NaN) reveal nothing; values above 100 reveal the
/// whole slot.
#[must_use]
pub fn visible_ratio(fill_fraction: f64) -> f32 {
    if fill_fraction.is_nan() {
        return 0.0;
    }
    (fill_fraction / 100.0).clamp(0.0, 1.0) as f32
}

/// A glyph placed at bounds with a tint.
#[derive(Debug, Clone)]
pub struct GlyphLayer {
    /// The glyph
    pub glyph: GlyphRef,
    /// Where it is drawn (always the full slot)
    pub bounds: Rect,
    /// Tint color
    pub tint: Color,
}

impl GlyphLayer {
    /// Paint this layer.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        self.glyph.paint(canvas, self.bounds, self.tint);
    }
}

impl PartialEq for GlyphLayer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.glyph, &other.glyph)
            && self.bounds == other.bounds
            && self.tint == other.tint
    }
}

/// The renderable result of [`SlotRenderer::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlotComposite {
    /// Square slot bounds
    pub bounds: Rect,
    /// Fill fraction this composite was rendered for, as given
    pub fill_fraction: f64,
    /// Layer 1: empty glyph
    pub background: GlyphLayer,
    /// Layer 2: clip region revealing the foreground
    pub clip: Rect,
    /// Layer 3: filled glyph, full size
    pub foreground: GlyphLayer,
}

impl SlotComposite {
    /// Paint the three layers in order.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        self.background.paint(canvas);
        canvas.push_clip(self.clip);
        self.foreground.paint(canvas);
        canvas.pop_clip();
    }

    /// Width of the slot that shows the filled glyph.
    #[must_use]
    pub fn visible_width(&self) -> f32 {
        self.clip.width
    }
}

/// Produces [`SlotComposite`]s from a fill fraction.
#[derive(Debug, Clone)]
pub struct SlotRenderer {
    filled: GlyphRef,
    empty: Option<GlyphRef>,
    size: f32,
    color: Color,
    empty_color: Color,
}

impl Default for SlotRenderer {
    fn default() -> Self {
        Self::new(Arc::new(StarGlyph))
    }
}

impl SlotRenderer {
    /// Create a renderer for a filled glyph; the empty glyph defaults to it.
    #[must_use]
    pub fn new(filled: GlyphRef) -> Self {
        Self {
            filled,
            empty: None,
            size: DEFAULT_SIZE,
            color: Color::AMBER,
            empty_color: Color::LIGHT_GRAY,
        }
    }

    /// Set the filled glyph.
    #[must_use]
    pub fn filled(mut self, glyph: GlyphRef) -> Self {
        self.filled = glyph;
        self
    }

    /// Set a distinct empty glyph (`None` falls back to the filled glyph).
    #[must_use]
    pub fn empty(mut self, glyph: Option<GlyphRef>) -> Self {
        self.empty = glyph;
        self
    }

    /// Set the slot side length.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    /// Set the filled tint.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the empty tint.
    #[must_use]
    pub const fn empty_color(mut self, color: Color) -> Self {
        self.empty_color = color;
        self
    }

    /// Filled glyph.
    #[must_use]
    pub const fn filled_glyph(&self) -> &GlyphRef {
        &self.filled
    }

    /// Effective empty glyph.
    #[must_use]
    pub fn empty_glyph(&self) -> &GlyphRef {
        self.empty.as_ref().unwrap_or(&self.filled)
    }

    /// Slot side length.
    #[must_use]
    pub const fn get_size(&self) -> f32 {
        self.size
    }

    /// Filled tint.
    #[must_use]
    pub const fn get_color(&self) -> Color {
        self.color
    }

    /// Empty tint.
    #[must_use]
    pub const fn get_empty_color(&self) -> Color {
        self.empty_color
    }

    /// Compose a slot at `origin` showing `fill_fraction` percent.
    #[must_use]
    pub fn render(&self, origin: Point, fill_fraction: f64) -> SlotComposite {
        let bounds = Rect::from_origin_size(origin, Size::square(self.size));
        let clip = bounds.with_width(self.size * visible_ratio(fill_fraction));
        SlotComposite {
            bounds,
            fill_fraction,
            background: GlyphLayer {
                glyph: Arc::clone(self.empty_glyph()),
                bounds,
                tint: self.empty_color,
            },
            clip,
            foreground: GlyphLayer {
                glyph: Arc::clone(&self.filled),
                bounds,
                tint: self.color,
            },
        }
    }
}
