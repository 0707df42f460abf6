//! Exercise record and form-data types.
//!
//! An [`Exercise`] is the unit everything else operates on: a named movement
//! with a configured duration and its own countdown state. The timer phase is
//! never stored -- it is derived from the three countdown fields, so the record
//! cannot drift into a contradictory shape.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Shortest accepted exercise duration, in seconds.
pub const MIN_DURATION_SECS: u64 = 1;
/// Longest accepted exercise duration, in seconds (one hour).
pub const MAX_DURATION_SECS: u64 = 3600;

/// Derived timer phase for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// One circuit-training exercise with its countdown state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Opaque unique token, assigned at creation, immutable thereafter.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Configured full length in seconds.
    pub duration: u64,
    /// Seconds left in the current run. Always within `0..=duration`.
    pub time_remaining: u64,
    /// True once started; survives pause, cleared only by reset or edit.
    pub is_active: bool,
    /// True only while active and temporarily halted.
    pub is_paused: bool,
}

impl Exercise {
    /// Build a fresh record from validated form data.
    pub(crate) fn from_draft(id: String, draft: ExerciseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            duration: draft.duration,
            time_remaining: draft.duration,
            is_active: false,
            is_paused: false,
        }
    }

    /// Current phase, derived from the countdown fields.
    pub fn phase(&self) -> TimerPhase {
        if !self.is_active {
            TimerPhase::Idle
        } else if self.is_paused {
            TimerPhase::Paused
        } else if self.time_remaining == 0 {
            TimerPhase::Completed
        } else {
            TimerPhase::Running
        }
    }

    /// Whether the global tick applies to this exercise right now.
    pub fn is_ticking(&self) -> bool {
        self.is_active && !self.is_paused && self.time_remaining > 0
    }

    /// 0.0 .. 1.0 progress through the configured duration.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.duration - self.time_remaining) as f64 / self.duration as f64
    }

    /// Remaining time as an `MM:SS` clock string.
    pub fn clock(&self) -> String {
        format_clock(self.time_remaining)
    }
}

/// Form data for add and edit: what the user types, before any id or
/// countdown state exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub name: String,
    pub description: String,
    /// Duration in seconds.
    pub duration: u64,
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, duration: u64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            duration,
        }
    }

    /// Trim text fields and check the draft against the acceptance rules.
    ///
    /// Returns the trimmed draft on success; prior state elsewhere is never
    /// touched on failure.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.trim().to_string();
        let description = self.description.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "description",
            });
        }
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration) {
            return Err(ValidationError::DurationOutOfRange {
                value: self.duration,
            });
        }
        Ok(Self {
            name,
            description,
            duration: self.duration,
        })
    }
}

/// Format a second count as `MM:SS`.
pub fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
