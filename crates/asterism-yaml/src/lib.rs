//! Declarative configuration for Asterism ratings.
//!
//! A [`RatingManifest`] is read from YAML or JSON, validated, and built into
//! an [`asterism_widgets::Rating`].

mod error;
mod manifest;

pub use error::ConfigError;
pub use manifest::{GlyphSpec, RatingManifest, MAX_SLOT_COUNT};
