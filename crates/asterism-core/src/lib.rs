//! Core types and traits for Asterism rating widgets.
//!
//! This crate provides the host-facing abstractions the widgets paint and
//! react through:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - Rendering: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`], [`Glyph`]
//! - Accessibility: [`AccessibleNode`], [`AccessibleValue`]

mod accessibility;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod glyph;
pub mod widget;

pub use accessibility::AccessibleNode;
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use glyph::{Glyph, GlyphRef};
pub use widget::{
    AccessibleRole, AccessibleValue, Canvas, LayoutResult, TextStyle, TypeId, Widget, WidgetId,
};
