//! Terminal chime: the CLI's implementation of the core's chime capability.
//!
//! Audio synthesis is the embedder's job; in a terminal that means the BEL
//! character plus a visible line, nothing more.

use std::io::Write;

use circuitroom_core::{ChimeNotifier, NotifierError};

pub struct TerminalChime {
    volume: u32,
}

impl TerminalChime {
    pub fn new(volume: u32) -> Self {
        Self { volume }
    }
}

impl ChimeNotifier for TerminalChime {
    fn chime(&self, _id: &str, name: &str) -> Result<(), NotifierError> {
        if self.volume == 0 {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        writeln!(out, "\x07*** {name}: time! ***")
            .and_then(|_| out.flush())
            .map_err(|e| NotifierError::Failed(e.to_string()))
    }
}
