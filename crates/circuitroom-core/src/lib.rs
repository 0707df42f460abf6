//! # Circuitroom Core Library
//!
//! Core business logic for Circuitroom, an interval timer for
//! circuit-training exercises. Every exercise carries its own independent
//! countdown with start/pause/reset controls; a shared once-per-second tick
//! drives all running countdowns, and crossing zero fires a completion chime
//! exactly once per run.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a synchronous state machine over the exercise store;
//!   the caller (normally the scheduler task) invokes `tick()` once per second
//! - **Scheduler**: a tokio task that owns the 1 Hz tick and hands
//!   completions to the chime notifier outside the engine lock
//! - **Catalog**: ordered seed records loaded once at startup (built-in
//!   circuit or a TOML file)
//! - **Config**: TOML preferences at `~/.config/circuitroom/config.toml`
//!
//! Presentation layers (the CLI binary, or any embedder) issue [`Command`]s
//! and render [`Event`]s; they never mutate timer fields directly.

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod exercise;
pub mod notify;
pub mod scheduler;
pub mod store;
pub mod timer;

pub use catalog::Catalog;
pub use command::Command;
pub use config::Config;
pub use error::{ConfigError, CoreError, NotifierError, Result, ValidationError};
pub use events::Event;
pub use exercise::{Exercise, ExerciseDraft, TimerPhase};
pub use notify::{ChimeNotifier, NullChime};
pub use scheduler::{shared, spawn_ticker, SharedEngine, TickerHandle};
pub use store::ExerciseStore;
pub use timer::{EngineStats, TimerEngine};
