//! A canvas that records instead of rasterizing.

use crate::draw::DrawCommand;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// Records every primitive as a [`DrawCommand`].
///
/// Commands recorded while a clip is active are wrapped in
/// [`DrawCommand::Clip`] carrying the effective clip (the intersection of
/// every pushed clip).
///
/// This is useful for:
/// - Testing (verify what was painted, and what was clipped)
/// - Serialization (send commands to a backend)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Empty canvas with no clip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// True before anything is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and the clip stack.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the effective clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Number of clips currently pushed.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    fn record(&mut self, command: DrawCommand) {
        let command = match self.current_clip() {
            Some(clip) => command.with_clip(clip),
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.record(DrawCommand::Polygon {
            points: points.to_vec(),
            fill: color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let effective = match self.current_clip() {
            Some(outer) => rect.clip_to(&outer),
            None => rect,
        };
        self.clip_stack.push(effective);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}
