mod engine;

pub use engine::{EngineStats, TimerEngine};
