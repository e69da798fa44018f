//! Rating interaction policy and value-to-fill derivation.
//!
//! The controller never holds the committed rating. The caller owns it and
//! passes it in on every call; the controller only remembers which slot the
//! pointer is previewing.

use asterism_core::Key;

/// Percentage of slot `index` that is filled for `display_value`.
///
/// Slots below the value are 100, slots above are 0, and the slot whose
/// integer boundary straddles a fractional value gets the fractional part.
/// Negative or NaN values fill nothing; values past the last slot fill
/// everything.
#[must_use]
pub fn fill_fraction(index: usize, display_value: f64) -> f64 {
    let lower = index as f64;
    let icon_value = lower + 1.0;
    if display_value >= icon_value {
        100.0
    } else if display_value > lower {
        (display_value - lower) * 100.0
    } else {
        0.0
    }
}

/// Fill fractions for every slot of a `count`-slot row.
#[must_use]
pub fn fill_fractions(count: usize, display_value: f64) -> Vec<f64> {
    (0..count)
        .map(|index| fill_fraction(index, display_value))
        .collect()
}

/// Pointer hover state of one rating instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No preview
    #[default]
    Idle,
    /// Pointer is over the slot at this index
    Previewing(usize),
}

impl HoverState {
    /// Preview value for this state (1-based slot value).
    #[must_use]
    pub const fn preview_value(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Previewing(index) => Some(index + 1),
        }
    }
}

/// Keyboard adjustment direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// One step up
    Increase,
    /// One step down
    Decrease,
}

impl KeyIntent {
    /// Map a key to an intent. Right/Up increase, Left/Down decrease.
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowRight | Key::ArrowUp => Some(Self::Increase),
            Key::ArrowLeft | Key::ArrowDown => Some(Self::Decrease),
            _ => None,
        }
    }
}

/// Hover state machine and commit policy for a row of `count` slots.
#[derive(Debug, Clone, Default)]
pub struct RatingController {
    count: usize,
    read_only: bool,
    hover: HoverState,
}

impl RatingController {
    /// Create a controller.
    #[must_use]
    pub const fn new(count: usize, read_only: bool) -> Self {
        Self {
            count,
            read_only,
            hover: HoverState::Idle,
        }
    }

    /// Number of slots.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether interaction is disabled.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Current hover state.
    #[must_use]
    pub const fn hover(&self) -> HoverState {
        self.hover
    }

    /// Change the slot count. A preview beyond the new count is dropped.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if let HoverState::Previewing(index) = self.hover {
            if index >= count {
                self.hover = HoverState::Idle;
            }
        }
    }

    /// Enable or disable interaction. Disabling drops any preview.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.hover = HoverState::Idle;
        }
    }

    /// Value to render: the preview if any, else the caller's value.
    #[must_use]
    pub fn display_value(&self, value: f64) -> f64 {
        self.hover
            .preview_value()
            .map_or(value, |preview| preview as f64)
    }

    /// Fill fraction of slot `index` for the effective display value.
    #[must_use]
    pub fn fill_fraction(&self, index: usize, value: f64) -> f64 {
        fill_fraction(index, self.display_value(value))
    }

    /// Fill fractions of all slots for the effective display value.
    #[must_use]
    pub fn fill_fractions(&self, value: f64) -> Vec<f64> {
        fill_fractions(self.count, self.display_value(value))
    }

    /// Pointer entered slot `index`. Returns whether the state changed.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        if self.read_only {
            tracing::trace!(slot = index, "preview suppressed: read-only");
            return false;
        }
        if index >= self.count {
            return false;
        }
        let next = HoverState::Previewing(index);
        if self.hover == next {
            return false;
        }
        tracing::debug!(slot = index, preview = index + 1, "rating preview");
        self.hover = next;
        true
    }

    /// Pointer left the whole widget. Always resets to idle.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hover != HoverState::Idle;
        if changed {
            tracing::debug!("rating preview cleared");
        }
        self.hover = HoverState::Idle;
        changed
    }

    /// Click on slot `index`; returns the value to commit, if any.
    ///
    /// `committable` is whether the caller registered a commit callback.
    #[must_use]
    pub fn click(&self, index: usize, committable: bool) -> Option<f64> {
        if !self.accepts_commits(committable) || index >= self.count {
            return None;
        }
        let proposed = (index + 1) as f64;
        tracing::debug!(slot = index, proposed, "rating click");
        Some(proposed)
    }

    /// Keyboard step from `value`; returns the value to commit, if any.
    ///
    /// The proposal always lies in `[0, count]`, even when `value` does not.
    /// Nothing is proposed when the step lands on the current value (already
    /// at a bound) or when `value` is NaN.
    #[must_use]
    pub fn key(&self, intent: KeyIntent, value: f64, committable: bool) -> Option<f64> {
        if !self.accepts_commits(committable) {
            return None;
        }
        let max = self.count as f64;
        let proposed = match intent {
            KeyIntent::Increase => (value + 1.0).clamp(0.0, max),
            KeyIntent::Decrease => (value - 1.0).clamp(0.0, max),
        };
        if proposed.is_nan() || proposed == value {
            tracing::trace!(value, ?intent, "rating key at bound");
            return None;
        }
        tracing::debug!(value, proposed, ?intent, "rating key");
        Some(proposed)
    }

    fn accepts_commits(&self, committable: bool) -> bool {
        if self.read_only || !committable {
            tracing::trace!(
                read_only = self.read_only,
                committable,
                "commit suppressed"
            );
            return false;
        }
        true
    }
}
