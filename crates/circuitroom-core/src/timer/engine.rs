//! Timer engine implementation.
//!
//! The engine is a per-exercise state machine over one owned store. It does
//! not use internal threads -- the caller (normally the [`crate::scheduler`]
//! task, or a test) invokes `tick()` once per second.
//!
//! ## State transitions, per exercise
//!
//! ```text
//! Idle ──start──> Running ──pause──> Paused ──start──> Running
//!                 Running ──tick (remaining hits 0)──> Completed
//! any  ──reset──> Idle (remaining restored to duration)
//! any  ──edit───> Idle (remaining = new duration)
//! ```
//!
//! `start` is a no-op when `time_remaining == 0`; reset first. Completed is
//! terminal until reset or edit.

use chrono::Utc;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::events::Event;
use crate::exercise::{Exercise, ExerciseDraft, TimerPhase};
use crate::store::ExerciseStore;

/// Aggregate counts for a status header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub total: usize,
    pub running: usize,
    pub completed: usize,
}

/// Core timer engine. Owns the exercise store; every command and the global
/// tick go through `&mut self`, so per-exercise transitions are strictly
/// sequential.
#[derive(Debug, Default)]
pub struct TimerEngine {
    store: ExerciseStore,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine pre-seeded from a catalog.
    pub fn with_catalog(catalog: &Catalog) -> Self {
        let mut store = ExerciseStore::new();
        store.seed(catalog);
        Self { store }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn get(&self, id: &str) -> Result<&Exercise> {
        self.store.get(id)
    }

    pub fn list(&self) -> &[Exercise] {
        self.store.list()
    }

    pub fn stats(&self) -> EngineStats {
        let mut stats = EngineStats {
            total: self.store.len(),
            running: 0,
            completed: 0,
        };
        for ex in self.store.list() {
            match ex.phase() {
                TimerPhase::Running => stats.running += 1,
                TimerPhase::Completed => stats.completed += 1,
                _ => {}
            }
        }
        stats
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let stats = self.stats();
        Event::StateSnapshot {
            exercises: self.store.list().to_vec(),
            total: stats.total,
            running: stats.running,
            completed: stats.completed,
            at: Utc::now(),
        }
    }

    // ── Lifecycle commands ───────────────────────────────────────────

    /// Validate and insert a new exercise.
    pub fn add(&mut self, draft: ExerciseDraft) -> Result<Event> {
        let id = self.store.create(draft)?;
        let ex = self.store.get(&id)?;
        Ok(Event::ExerciseAdded {
            id: ex.id.clone(),
            name: ex.name.clone(),
            duration_secs: ex.duration,
            at: Utc::now(),
        })
    }

    /// Replace name/description/duration. An edit always stops a running
    /// timer: the record returns to Idle with the new duration loaded.
    pub fn edit(&mut self, id: &str, draft: ExerciseDraft) -> Result<Event> {
        let draft = draft.validated()?;
        self.store.update(id, |ex| {
            ex.name = draft.name.clone();
            ex.description = draft.description.clone();
            ex.duration = draft.duration;
            ex.time_remaining = draft.duration;
            ex.is_active = false;
            ex.is_paused = false;
        })?;
        Ok(Event::ExerciseEdited {
            id: id.to_string(),
            name: draft.name,
            duration_secs: draft.duration,
            at: Utc::now(),
        })
    }

    /// Remove an exercise. The tick broadcast walks the store, so removal is
    /// also what stops its ticking -- there is no separate timer to cancel.
    pub fn delete(&mut self, id: &str) -> Result<Event> {
        let removed = self.store.remove(id)?;
        Ok(Event::ExerciseDeleted {
            id: removed.id,
            name: removed.name,
            at: Utc::now(),
        })
    }

    // ── Timer commands ───────────────────────────────────────────────

    /// Idle or Paused -> Running. Legal no-op (`Ok(None)`) when already
    /// running or when the countdown sits at zero (reset first). A start from
    /// `remaining == duration` and a resume from a partial countdown are both
    /// valid.
    pub fn start(&mut self, id: &str) -> Result<Option<Event>> {
        let ex = self.store.get(id)?;
        if ex.time_remaining == 0 || ex.phase() == TimerPhase::Running {
            return Ok(None);
        }
        let resumed = ex.phase() == TimerPhase::Paused;
        self.store.update(id, |ex| {
            ex.is_active = true;
            ex.is_paused = false;
        })?;
        let ex = self.store.get(id)?;
        Ok(Some(Event::TimerStarted {
            id: ex.id.clone(),
            resumed,
            remaining_secs: ex.time_remaining,
            at: Utc::now(),
        }))
    }

    /// Running -> Paused. `Ok(None)` from any other phase.
    pub fn pause(&mut self, id: &str) -> Result<Option<Event>> {
        let ex = self.store.get(id)?;
        if ex.phase() != TimerPhase::Running {
            return Ok(None);
        }
        self.store.update(id, |ex| ex.is_paused = true)?;
        let ex = self.store.get(id)?;
        Ok(Some(Event::TimerPaused {
            id: ex.id.clone(),
            remaining_secs: ex.time_remaining,
            at: Utc::now(),
        }))
    }

    /// Any phase -> Idle with the full duration restored.
    pub fn reset(&mut self, id: &str) -> Result<Event> {
        self.store.update(id, |ex| {
            ex.time_remaining = ex.duration;
            ex.is_active = false;
            ex.is_paused = false;
        })?;
        let ex = self.store.get(id)?;
        Ok(Event::TimerReset {
            id: ex.id.clone(),
            duration_secs: ex.duration,
            at: Utc::now(),
        })
    }

    /// The global once-per-second broadcast. Every exercise currently Running
    /// loses one second, clamped at zero. Crossing from `>0` to `0` is the
    /// completion edge: the record becomes Completed and exactly one
    /// `ExerciseCompleted` event is returned for it. Completed records and
    /// paused ones are skipped, so a tick after completion is a no-op.
    pub fn tick(&mut self) -> Vec<Event> {
        let at = Utc::now();
        let mut completions = Vec::new();
        for ex in self.store.iter_mut() {
            if !ex.is_ticking() {
                continue;
            }
            // is_ticking guarantees time_remaining > 0 here; the edge test
            // compares against that pre-tick value, not the stored flags.
            ex.time_remaining -= 1;
            if ex.time_remaining == 0 {
                completions.push(Event::ExerciseCompleted {
                    id: ex.id.clone(),
                    name: ex.name.clone(),
                    duration_secs: ex.duration,
                    at,
                });
            }
        }
        completions
    }
}
