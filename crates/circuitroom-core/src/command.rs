//! Typed command surface.
//!
//! The thin façade presentation layers speak: user intents become [`Command`]
//! values, dispatched onto the engine. No business logic lives here -- every
//! invariant is enforced by the store and the engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::events::Event;
use crate::exercise::ExerciseDraft;
use crate::timer::TimerEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddExercise { draft: ExerciseDraft },
    EditExercise { id: String, draft: ExerciseDraft },
    DeleteExercise { id: String },
    Start { id: String },
    Pause { id: String },
    Reset { id: String },
}

impl TimerEngine {
    /// Apply one command. `Ok(None)` is a legal no-op (start at zero, pause
    /// while idle); errors are `NotFound` or `ValidationError` and leave all
    /// state unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Option<Event>> {
        match command {
            Command::AddExercise { draft } => self.add(draft).map(Some),
            Command::EditExercise { id, draft } => self.edit(&id, draft).map(Some),
            Command::DeleteExercise { id } => self.delete(&id).map(Some),
            Command::Start { id } => self.start(&id),
            Command::Pause { id } => self.pause(&id),
            Command::Reset { id } => self.reset(&id).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::TimerPhase;

    #[test]
    fn apply_routes_to_engine() {
        let mut engine = TimerEngine::new();
        let event = engine
            .apply(Command::AddExercise {
                draft: ExerciseDraft::new("Push-ups", "desc", 45),
            })
            .unwrap()
            .unwrap();
        let Event::ExerciseAdded { id, .. } = event else {
            panic!("expected ExerciseAdded");
        };

        engine.apply(Command::Start { id: id.clone() }).unwrap();
        assert_eq!(engine.get(&id).unwrap().phase(), TimerPhase::Running);

        engine.apply(Command::Pause { id: id.clone() }).unwrap();
        assert_eq!(engine.get(&id).unwrap().phase(), TimerPhase::Paused);

        engine.apply(Command::Reset { id: id.clone() }).unwrap();
        assert_eq!(engine.get(&id).unwrap().phase(), TimerPhase::Idle);

        engine
            .apply(Command::DeleteExercise { id: id.clone() })
            .unwrap();
        assert!(engine.get(&id).is_err());
    }

    #[test]
    fn commands_round_trip_as_json() {
        let cmd = Command::Start { id: "abc".into() };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"start\""));
        let back: Command = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, Command::Start { id } if id == "abc"));
    }
}
