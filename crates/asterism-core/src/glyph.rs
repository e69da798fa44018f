//! Glyph capability: an opaque, caller-supplied visual drawn into a square.

use crate::widget::Canvas;
use crate::{Color, Rect};
use std::fmt::Debug;
use std::sync::Arc;

/// Something that can draw itself into given bounds with a tint.
///
/// Implementations must scale to the full `bounds` they receive. Partial
/// visibility is the caller's business (via [`Canvas::push_clip`]); a glyph
/// never sees a fractional width.
pub trait Glyph: Debug + Send + Sync {
    /// Paint the glyph filling `bounds`, tinted with `tint`.
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect, tint: Color);

    /// Short name for diagnostics.
    fn name(&self) -> &str {
        "glyph"
    }
}

/// Shared handle to a glyph.
pub type GlyphRef = Arc<dyn Glyph>;
