//! Completion chime capability.
//!
//! The core does not synthesize audio. When a countdown crosses zero it asks
//! a [`ChimeNotifier`] to play the completion sound; what that means (terminal
//! bell, desktop notification, nothing) belongs to the embedder. A notifier
//! failure is reported and dropped -- the exercise has still completed.

use crate::error::NotifierError;

/// Capability invoked exactly once per completion event.
pub trait ChimeNotifier: Send + Sync {
    fn chime(&self, id: &str, name: &str) -> Result<(), NotifierError>;
}

/// Notifier that ignores everything. For tests and embedders that render
/// completions themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChime;

impl ChimeNotifier for NullChime {
    fn chime(&self, _id: &str, _name: &str) -> Result<(), NotifierError> {
        Ok(())
    }
}
