//! Built-in glyphs: the default star, text symbols and unit-space polygons.

use asterism_core::{Canvas, Color, Glyph, Point, Rect, TextStyle};
use std::f32::consts::{FRAC_PI_2, PI};

/// Ratio of the inner to the outer radius of [`StarGlyph`].
pub const STAR_INNER_RATIO: f32 = 0.382;

/// Five-point star inscribed in the bounds. The default rating icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarGlyph;

impl StarGlyph {
    /// Star vertices (outer, inner, outer, ...) for the given bounds.
    #[must_use]
    pub fn vertices(bounds: Rect) -> Vec<Point> {
        let center = bounds.center();
        let outer = bounds.width.min(bounds.height) / 2.0;
        let inner = outer * STAR_INNER_RATIO;
        (0..10)
            .map(|i| {
                let angle = (i as f32).mul_add(PI / 5.0, -FRAC_PI_2);
                let radius = if i % 2 == 0 { outer } else { inner };
                Point::new(
                    radius.mul_add(angle.cos(), center.x),
                    radius.mul_add(angle.sin(), center.y),
                )
            })
            .collect()
    }
}

impl Glyph for StarGlyph {
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, tint: Color) {
        canvas.fill_polygon(&Self::vertices(bounds), tint);
    }

    fn name(&self) -> &str {
        "star"
    }
}

/// A text symbol (emoji, dingbat) drawn at the full bounds height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGlyph {
    text: String,
}

impl TextGlyph {
    /// Create a text glyph.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The symbol text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Glyph for TextGlyph {
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, tint: Color) {
        let style = TextStyle {
            size: bounds.height,
            color: tint,
        };
        canvas.draw_text(&self.text, bounds.origin(), &style);
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Caller-defined filled polygon in unit coordinates, scaled to the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGlyph {
    points: Vec<Point>,
}

impl PathGlyph {
    /// Create a path glyph from vertices in `[0, 1]²`.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Unit-space vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Vertices mapped into `bounds`.
    #[must_use]
    pub fn scaled(&self, bounds: Rect) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| {
                Point::new(
                    p.x.mul_add(bounds.width, bounds.x),
                    p.y.mul_add(bounds.height, bounds.y),
                )
            })
            .collect()
    }
}

impl Glyph for PathGlyph {
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, tint: Color) {
        canvas.fill_polygon(&self.scaled(bounds), tint);
    }

    fn name(&self) -> &str {
        "path"
    }
}
