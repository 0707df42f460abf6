//! End-to-end engine scenarios.
//!
//! These walk whole user stories through the public surface: seed a circuit,
//! run timers to completion, pause mid-run, edit and delete while running.

use circuitroom_core::{
    Catalog, Command, CoreError, Event, ExerciseDraft, TimerEngine, TimerPhase,
};

fn add(engine: &mut TimerEngine, name: &str, secs: u64) -> String {
    let event = engine
        .add(ExerciseDraft::new(name, "description", secs))
        .unwrap();
    match event {
        Event::ExerciseAdded { id, .. } => id,
        other => panic!("expected ExerciseAdded, got {other:?}"),
    }
}

#[test]
fn test_pushups_run_ten_ticks() {
    let mut engine = TimerEngine::new();
    let id = add(&mut engine, "Push-ups", 45);

    engine.start(&id).unwrap();
    for _ in 0..10 {
        engine.tick();
    }

    let ex = engine.get(&id).unwrap();
    assert_eq!(ex.time_remaining, 35);
    assert_eq!(ex.phase(), TimerPhase::Running);
    assert_eq!(ex.clock(), "00:35");
}

#[test]
fn test_pause_freezes_countdown_and_resume_continues() {
    let mut engine = TimerEngine::new();
    let id = add(&mut engine, "Squats", 60);

    engine.start(&id).unwrap();
    for _ in 0..10 {
        engine.tick();
    }
    engine.pause(&id).unwrap();

    // Five system-wide ticks while paused: no movement.
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.get(&id).unwrap().time_remaining, 50);

    engine.start(&id).unwrap();
    for _ in 0..5 {
        engine.tick();
    }
    assert_eq!(engine.get(&id).unwrap().time_remaining, 45);
}

#[test]
fn test_full_run_completes_with_one_notification() {
    let mut engine = TimerEngine::new();
    let id = add(&mut engine, "Sprint", 3);

    engine.start(&id).unwrap();
    let mut completions = 0;
    for _ in 0..4 {
        completions += engine
            .tick()
            .iter()
            .filter(|e| matches!(e, Event::ExerciseCompleted { .. }))
            .count();
    }

    assert_eq!(completions, 1);
    let ex = engine.get(&id).unwrap();
    assert_eq!(ex.phase(), TimerPhase::Completed);
    assert_eq!(ex.time_remaining, 0);
}

#[test]
fn test_delete_while_running_silences_the_id() {
    let mut engine = TimerEngine::new();
    let id = add(&mut engine, "Burpees", 5);
    let other = add(&mut engine, "Plank Hold", 5);

    engine.start(&id).unwrap();
    engine.start(&other).unwrap();
    engine.tick();
    engine.delete(&id).unwrap();

    // Remaining ticks: no error, no completion for the deleted id, and the
    // other exercise is unaffected.
    for _ in 0..4 {
        for event in engine.tick() {
            assert_ne!(event.exercise_id(), Some(id.as_str()));
        }
    }
    assert!(matches!(engine.get(&id), Err(CoreError::NotFound { .. })));
    assert_eq!(engine.get(&other).unwrap().phase(), TimerPhase::Completed);
}

#[test]
fn test_rejected_create_leaves_store_unchanged() {
    let mut engine = TimerEngine::with_catalog(&Catalog::builtin());
    let before = engine.list().len();

    assert!(engine.add(ExerciseDraft::new("", "desc", 30)).is_err());
    assert!(engine.add(ExerciseDraft::new("Dips", "desc", 0)).is_err());
    assert_eq!(engine.list().len(), before);
}

#[test]
fn test_whole_circuit_independent_timers() {
    let mut engine = TimerEngine::with_catalog(&Catalog::builtin());
    let jacks = engine.list()[2].id.clone(); // 30s
    let knees = engine.list()[6].id.clone(); // 30s
    let lunges = engine.list()[7].id.clone(); // 50s

    engine.start(&jacks).unwrap();
    engine.start(&lunges).unwrap();

    let mut completed = Vec::new();
    for _ in 0..30 {
        for event in engine.tick() {
            if let Event::ExerciseCompleted { id, .. } = event {
                completed.push(id);
            }
        }
    }

    // Jacks done, lunges mid-run, knees never started.
    assert_eq!(completed, vec![jacks.clone()]);
    assert_eq!(engine.get(&jacks).unwrap().phase(), TimerPhase::Completed);
    assert_eq!(engine.get(&lunges).unwrap().time_remaining, 20);
    assert_eq!(engine.get(&knees).unwrap().phase(), TimerPhase::Idle);
    assert_eq!(engine.get(&knees).unwrap().time_remaining, 30);

    let stats = engine.stats();
    assert_eq!(stats.total, 8);
    assert_eq!(stats.running, 1);
    assert_eq!(stats.completed, 1);
}

#[test]
fn test_command_surface_full_cycle() {
    let mut engine = TimerEngine::new();
    let event = engine
        .apply(Command::AddExercise {
            draft: ExerciseDraft::new("Mountain Climbers", "knees to chest", 45),
        })
        .unwrap()
        .unwrap();
    let Event::ExerciseAdded { id, .. } = event else {
        panic!("expected ExerciseAdded");
    };

    engine.apply(Command::Start { id: id.clone() }).unwrap();
    engine.tick();
    engine
        .apply(Command::EditExercise {
            id: id.clone(),
            draft: ExerciseDraft::new("Mountain Climbers", "knees to chest", 30),
        })
        .unwrap();

    let ex = engine.get(&id).unwrap();
    assert_eq!(ex.phase(), TimerPhase::Idle);
    assert_eq!(ex.duration, 30);
    assert_eq!(ex.time_remaining, 30);

    engine
        .apply(Command::DeleteExercise { id: id.clone() })
        .unwrap();
    assert!(matches!(
        engine.apply(Command::Start { id }),
        Err(CoreError::NotFound { .. })
    ));
}

#[test]
fn test_snapshot_reflects_committed_state() {
    let mut engine = TimerEngine::new();
    let id = add(&mut engine, "High Knees", 30);
    engine.start(&id).unwrap();
    engine.tick();

    let Event::StateSnapshot {
        exercises,
        total,
        running,
        completed,
        ..
    } = engine.snapshot()
    else {
        panic!("expected StateSnapshot");
    };
    assert_eq!(total, 1);
    assert_eq!(running, 1);
    assert_eq!(completed, 0);
    assert_eq!(exercises[0].time_remaining, 29);
}
