//! Authoritative exercise collection.
//!
//! The store is the single place exercise records live. It keeps insertion
//! order (catalogs are small; lookups scan by id) and owns id assignment.
//! Timer fields are only ever mutated through the engine, which reaches the
//! store via [`ExerciseStore::update`].

use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};
use crate::exercise::{Exercise, ExerciseDraft};

#[derive(Debug, Default)]
pub struct ExerciseStore {
    exercises: Vec<Exercise>,
}

impl ExerciseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate form data and insert a fresh record with lifecycle defaults.
    /// Returns the assigned id.
    pub fn create(&mut self, draft: ExerciseDraft) -> Result<String> {
        let draft = draft.validated()?;
        let id = Uuid::new_v4().to_string();
        self.exercises.push(Exercise::from_draft(id.clone(), draft));
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })
    }

    /// All exercises in insertion order, latest committed state.
    pub fn list(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Apply a mutation to one record. Engine-only: presentation goes through
    /// commands, never through field writes.
    pub(crate) fn update<F>(&mut self, id: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Exercise),
    {
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        f(exercise);
        Ok(())
    }

    /// Remove a record, returning it. Errors with `NotFound` on a missing id;
    /// callers wanting idempotent delete match on the error.
    pub fn remove(&mut self, id: &str) -> Result<Exercise> {
        let idx = self
            .exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        Ok(self.exercises.remove(idx))
    }

    /// Bulk-insert seed records at startup, preserving catalog order.
    /// Invalid entries are skipped with a warning rather than aborting.
    pub fn seed(&mut self, catalog: &Catalog) {
        for draft in &catalog.exercises {
            if let Err(e) = self.create(draft.clone()) {
                tracing::warn!(name = %draft.name, error = %e, "skipping invalid catalog entry");
            }
        }
    }

    /// Iterate mutably over every record. Engine-only, used by the tick
    /// broadcast.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Exercise> {
        self.exercises.iter_mut()
    }
}
