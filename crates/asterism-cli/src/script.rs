//! Interaction scripts: `enter:1,leave,click:2,key:right`.

use asterism_core::{Event, Key, MouseButton};
use asterism_widgets::Rating;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error parsing a script step.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ScriptError {
    /// Step kind not recognized
    #[error("unknown step '{0}'")]
    UnknownStep(String),
    /// Slot index missing or not a number
    #[error("step '{0}' needs a slot index")]
    BadIndex(String),
    /// Key name not recognized
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub(crate) enum Step {
    /// Pointer moves onto slot
    Enter {
        /// Slot index
        slot: usize,
    },
    /// Pointer leaves the widget
    Leave,
    /// Left click on slot
    Click {
        /// Slot index
        slot: usize,
    },
    /// Key press
    Key {
        /// Key pressed
        key: Key,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter { slot } => write!(f, "enter:{slot}"),
            Self::Leave => write!(f, "leave"),
            Self::Click { slot } => write!(f, "click:{slot}"),
            Self::Key { key } => write!(f, "key:{key:?}"),
        }
    }
}

impl Step {
    /// Parse a single step.
    pub(crate) fn parse(text: &str) -> Result<Self, ScriptError> {
        let text = text.trim();
        let (kind, arg) = match text.split_once(':') {
            Some((kind, arg)) => (kind.trim(), Some(arg.trim())),
            None => (text, None),
        };
        let index = || {
            arg.and_then(|a| a.parse::<usize>().ok())
                .ok_or_else(|| ScriptError::BadIndex(text.to_string()))
        };
        match kind.to_ascii_lowercase().as_str() {
            "enter" | "hover" => Ok(Self::Enter { slot: index()? }),
            "leave" => Ok(Self::Leave),
            "click" => Ok(Self::Click { slot: index()? }),
            "key" => {
                let name = arg.unwrap_or_default();
                Key::from_name(name)
                    .map(|key| Self::Key { key })
                    .ok_or_else(|| ScriptError::UnknownKey(name.to_string()))
            }
            _ => Err(ScriptError::UnknownStep(text.to_string())),
        }
    }

    /// Events a host would dispatch for this step.
    ///
    /// Slot steps target the slot centre under the rating's current layout.
    pub(crate) fn events(&self, rating: &Rating) -> Vec<Event> {
        match *self {
            Self::Enter { slot } => vec![Event::MouseMove {
                position: rating.slot_bounds(slot).center(),
            }],
            Self::Leave => vec![Event::MouseLeave],
            Self::Click { slot } => {
                let position = rating.slot_bounds(slot).center();
                vec![
                    Event::MouseMove { position },
                    Event::MouseDown {
                        position,
                        button: MouseButton::Left,
                    },
                    Event::MouseUp {
                        position,
                        button: MouseButton::Left,
                    },
                ]
            }
            Self::Key { key } => vec![Event::KeyDown { key }, Event::KeyUp { key }],
        }
    }
}

/// Parse a comma-separated script. Empty entries are skipped.
pub(crate) fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(Step::parse)
        .collect()
}
