//! Fractional rating widget for Asterism.
//!
//! - [`SlotRenderer`] composes one slot from an empty glyph, a clip region
//!   and a full-size filled glyph.
//! - [`RatingController`] derives per-slot fill fractions and owns the hover
//!   preview and commit policy.
//! - [`Rating`] ties both to the [`asterism_core::Widget`] trait.

pub mod controller;
pub mod glyph;
pub mod rating;
pub mod slot;

pub use controller::{fill_fraction, fill_fractions, HoverState, KeyIntent, RatingController};
pub use glyph::{PathGlyph, StarGlyph, TextGlyph};
pub use rating::{ChangeHandler, Rating, RatingChanged};
pub use slot::{GlyphLayer, SlotComposite, SlotRenderer};
