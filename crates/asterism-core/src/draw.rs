//! Draw commands produced by painting.
//!
//! All rendering reduces to these primitives. A host backend replays them;
//! tests inspect them.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill a closed polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Fill color
        fill: Color,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position of the top-left of the text box
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Clip to bounds; nothing of `child` outside `bounds` is visible
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Wrap with clip bounds.
    #[must_use]
    pub fn with_clip(self, bounds: Rect) -> Self {
        Self::Clip {
            bounds,
            child: Box::new(self),
        }
    }

    /// Clip bounds if this command is clipped.
    #[must_use]
    pub const fn clip_bounds(&self) -> Option<Rect> {
        match self {
            Self::Clip { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// The command with any clip wrappers removed.
    #[must_use]
    pub fn unclipped(&self) -> &Self {
        match self {
            Self::Clip { child, .. } => child.unclipped(),
            other => other,
        }
    }

    /// Fill color of the primitive, looking through clips.
    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Polygon { fill, .. } => Some(*fill),
            Self::Text { style, .. } => Some(style.color),
            Self::Clip { child, .. } => child.fill_color(),
        }
    }

    /// Axis-aligned bounds covered by the primitive, ignoring clips.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        match self {
            Self::Polygon { points, .. } => points_extent(points),
            Self::Text {
                position, style, ..
            } => Some(Rect::new(position.x, position.y, style.size, style.size)),
            Self::Clip { child, .. } => child.extent(),
        }
    }
}

fn points_extent(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
