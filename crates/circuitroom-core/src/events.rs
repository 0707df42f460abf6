use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exercise::Exercise;

/// Every state change in the system produces an Event.
/// Front ends render them; the scheduler turns `ExerciseCompleted` into a chime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ExerciseAdded {
        id: String,
        name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    ExerciseEdited {
        id: String,
        name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    ExerciseDeleted {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    TimerStarted {
        id: String,
        /// True when continuing a paused run rather than starting a full one.
        resumed: bool,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        id: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        id: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown crossed from `>0` to `0` while running. Fired exactly
    /// once per run; the chime hangs off this event.
    ExerciseCompleted {
        id: String,
        name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        exercises: Vec<Exercise>,
        total: usize,
        running: usize,
        completed: usize,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The exercise this event concerns, if it concerns exactly one.
    pub fn exercise_id(&self) -> Option<&str> {
        match self {
            Event::ExerciseAdded { id, .. }
            | Event::ExerciseEdited { id, .. }
            | Event::ExerciseDeleted { id, .. }
            | Event::TimerStarted { id, .. }
            | Event::TimerPaused { id, .. }
            | Event::TimerReset { id, .. }
            | Event::ExerciseCompleted { id, .. } => Some(id),
            Event::StateSnapshot { .. } => None,
        }
    }
}
