//! The single timing authority.
//!
//! One tokio task fires once per second, locks the shared engine, applies the
//! global tick, and hands any completions to the chime notifier after the
//! lock is released. Commands from the presentation layer take the same lock,
//! so a tick and a command for the same exercise can never interleave.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::events::Event;
use crate::notify::ChimeNotifier;
use crate::timer::TimerEngine;

/// One exclusive owner for the engine, shared between the ticker task and
/// command callers.
pub type SharedEngine = Arc<Mutex<TimerEngine>>;

/// Wrap an engine for sharing with the ticker.
pub fn shared(engine: TimerEngine) -> SharedEngine {
    Arc::new(Mutex::new(engine))
}

/// Handle to a running ticker task. Dropping it (or calling [`shutdown`])
/// stops the ticking; the engine itself stays usable.
///
/// [`shutdown`]: TickerHandle::shutdown
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn shutdown(self) {
        self.task.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the once-per-second tick broadcast.
///
/// Notifier calls happen outside the engine lock, so a slow or failing chime
/// never delays the next tick or a concurrent command. A notifier error is
/// logged and dropped: the Completed transition has already committed.
pub fn spawn_ticker(engine: SharedEngine, notifier: Arc<dyn ChimeNotifier>) -> TickerHandle {
    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // Catching up on missed ticks would double-count wall-clock seconds.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // first countdown decrement lands a full second after spawn.
        interval.tick().await;
        loop {
            interval.tick().await;
            let completions = {
                // A panicked command holder must not kill the tick loop.
                let mut engine = engine.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                engine.tick()
            };
            for event in completions {
                if let Event::ExerciseCompleted { id, name, .. } = &event {
                    if let Err(e) = notifier.chime(id, name) {
                        tracing::warn!(id = %id, name = %name, error = %e, "completion chime failed");
                    }
                }
            }
        }
    });
    TickerHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::NotifierError;
    use crate::exercise::{ExerciseDraft, TimerPhase};
    use crate::notify::NullChime;

    struct CountingChime(AtomicUsize);

    impl ChimeNotifier for CountingChime {
        fn chime(&self, _id: &str, _name: &str) -> Result<(), NotifierError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingChime(AtomicUsize);

    impl ChimeNotifier for FailingChime {
        fn chime(&self, _id: &str, _name: &str) -> Result<(), NotifierError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(NotifierError::Failed("no speaker".into()))
        }
    }

    /// Let the ticker task observe an advanced (paused) clock.
    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance_secs(secs: u64) {
        for _ in 0..secs {
            tokio::time::advance(Duration::from_secs(1)).await;
            settle().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_counts_down_and_chimes_once() {
        let mut engine = TimerEngine::new();
        let event = engine.add(ExerciseDraft::new("Sprint", "go", 3)).unwrap();
        let Event::ExerciseAdded { id, .. } = event else {
            panic!()
        };
        engine.start(&id).unwrap();

        let engine = shared(engine);
        let chime = Arc::new(CountingChime(AtomicUsize::new(0)));
        let _ticker = spawn_ticker(engine.clone(), chime.clone());
        settle().await;

        advance_secs(3).await;
        {
            let engine = engine.lock().unwrap();
            let ex = engine.get(&id).unwrap();
            assert_eq!(ex.time_remaining, 0);
            assert_eq!(ex.phase(), TimerPhase::Completed);
        }
        assert_eq!(chime.0.load(Ordering::SeqCst), 1);

        // More wall-clock time: completed exercises are left alone.
        advance_secs(2).await;
        assert_eq!(chime.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn chime_failure_does_not_stop_ticking() {
        let mut engine = TimerEngine::new();
        let Event::ExerciseAdded { id: a, .. } =
            engine.add(ExerciseDraft::new("A", "d", 1)).unwrap()
        else {
            panic!()
        };
        let Event::ExerciseAdded { id: b, .. } =
            engine.add(ExerciseDraft::new("B", "d", 3)).unwrap()
        else {
            panic!()
        };
        engine.start(&a).unwrap();
        engine.start(&b).unwrap();

        let engine = shared(engine);
        let chime = Arc::new(FailingChime(AtomicUsize::new(0)));
        let _ticker = spawn_ticker(engine.clone(), chime.clone());
        settle().await;

        advance_secs(3).await;
        let engine = engine.lock().unwrap();
        // A's chime failed, but A still completed and B kept ticking to its
        // own completion.
        assert_eq!(engine.get(&a).unwrap().phase(), TimerPhase::Completed);
        assert_eq!(engine.get(&b).unwrap().phase(), TimerPhase::Completed);
        assert_eq!(chime.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_ticking() {
        let mut engine = TimerEngine::new();
        let Event::ExerciseAdded { id, .. } =
            engine.add(ExerciseDraft::new("Plank", "hold", 60)).unwrap()
        else {
            panic!()
        };
        engine.start(&id).unwrap();

        let engine = shared(engine);
        let ticker = spawn_ticker(engine.clone(), Arc::new(NullChime));
        settle().await;

        advance_secs(2).await;
        assert_eq!(engine.lock().unwrap().get(&id).unwrap().time_remaining, 58);

        ticker.shutdown();
        settle().await;
        advance_secs(5).await;
        assert_eq!(engine.lock().unwrap().get(&id).unwrap().time_remaining, 58);
    }
}
