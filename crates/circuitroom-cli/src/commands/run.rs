//! Interactive timer session.
//!
//! Seeds the store from a catalog, spawns the 1 Hz ticker, then reads
//! line-oriented commands from stdin. Exercises are addressed by their list
//! index. Events are echoed as JSON; the ticker chimes completions in the
//! background.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use circuitroom_core::exercise::format_clock;
use circuitroom_core::{
    shared, spawn_ticker, Catalog, ChimeNotifier, Config, Event, ExerciseDraft, NullChime,
    SharedEngine, TimerEngine, TimerPhase,
};

use crate::bell::TerminalChime;

const HELP: &str = "\
commands:
  list                               show all exercises
  show <n>                           one exercise as JSON
  start <n> / pause <n> / reset <n>  timer controls
  add <name> | <description> | <seconds>
  edit <n> <name> | <description> | <seconds>
  delete <n>
  chime                              test the bell
  help / quit";

pub async fn run(catalog_path: Option<PathBuf>, silent: bool) -> Result<(), Box<dyn Error>> {
    let config = Config::load_or_default();
    let catalog = match catalog_path.or_else(|| config.catalog_path.clone()) {
        Some(path) => Catalog::load(&path)?,
        None => Catalog::builtin(),
    };

    let engine = shared(TimerEngine::with_catalog(&catalog));
    let notifier: Arc<dyn ChimeNotifier> = if silent || !config.chime.enabled {
        Arc::new(NullChime)
    } else {
        Arc::new(TerminalChime::new(config.chime.volume))
    };
    let ticker = spawn_ticker(engine.clone(), notifier.clone());

    {
        let engine = engine.lock().map_err(|_| "engine lock poisoned")?;
        tracing::debug!(exercises = engine.list().len(), silent, "session seeded");
        println!(
            "circuitroom: {} exercises loaded; type 'help'",
            engine.list().len()
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            _ => {
                if let Err(e) = dispatch(&engine, notifier.as_ref(), line) {
                    eprintln!("error: {e}");
                }
            }
        }
    }

    ticker.shutdown();
    Ok(())
}

fn dispatch(
    engine: &SharedEngine,
    notifier: &dyn ChimeNotifier,
    line: &str,
) -> Result<(), Box<dyn Error>> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let mut engine = engine.lock().map_err(|_| "engine lock poisoned")?;

    match verb {
        "list" => {
            for (i, ex) in engine.list().iter().enumerate() {
                println!(
                    "{:2}. {:<20} [{:<9}] {} of {}",
                    i + 1,
                    ex.name,
                    phase_label(ex.phase()),
                    ex.clock(),
                    format_clock(ex.duration),
                );
            }
            let stats = engine.stats();
            println!(
                "    {} total, {} running, {} completed",
                stats.total, stats.running, stats.completed
            );
        }
        "show" => {
            let id = resolve(&engine, rest)?;
            println!("{}", serde_json::to_string_pretty(engine.get(&id)?)?);
        }
        "start" => {
            let id = resolve(&engine, rest)?;
            print_event(engine.start(&id)?)?;
        }
        "pause" => {
            let id = resolve(&engine, rest)?;
            print_event(engine.pause(&id)?)?;
        }
        "reset" => {
            let id = resolve(&engine, rest)?;
            print_event(Some(engine.reset(&id)?))?;
        }
        "add" => {
            let draft = parse_draft(rest)?;
            print_event(Some(engine.add(draft)?))?;
        }
        "edit" => {
            let (index, draft_text) = rest
                .split_once(' ')
                .ok_or("usage: edit <n> <name> | <description> | <seconds>")?;
            let id = resolve(&engine, index)?;
            let draft = parse_draft(draft_text)?;
            print_event(Some(engine.edit(&id, draft)?))?;
        }
        "delete" => {
            let id = resolve(&engine, rest)?;
            print_event(Some(engine.delete(&id)?))?;
        }
        "chime" => {
            notifier.chime("chime-test", "Test bell")?;
        }
        other => return Err(format!("unknown command '{other}' (try 'help')").into()),
    }
    Ok(())
}

fn phase_label(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Idle => "idle",
        TimerPhase::Running => "running",
        TimerPhase::Paused => "paused",
        TimerPhase::Completed => "completed",
    }
}

fn print_event(event: Option<Event>) -> Result<(), Box<dyn Error>> {
    match event {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("(no-op)"),
    }
    Ok(())
}

/// Map a 1-based list index to an exercise id.
fn resolve(engine: &TimerEngine, token: &str) -> Result<String, Box<dyn Error>> {
    let index: usize = token
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a list index", token.trim()))?;
    let list = engine.list();
    if index == 0 || index > list.len() {
        return Err(format!("no exercise #{index}").into());
    }
    Ok(list[index - 1].id.clone())
}

/// Parse `<name> | <description> | <seconds>` into a draft. Non-numeric
/// durations die here, before any command is built.
fn parse_draft(input: &str) -> Result<ExerciseDraft, Box<dyn Error>> {
    let parts: Vec<&str> = input.split('|').map(str::trim).collect();
    let [name, description, seconds] = parts.as_slice() else {
        return Err("expected '<name> | <description> | <seconds>'".into());
    };
    let duration: u64 = seconds
        .parse()
        .map_err(|_| format!("'{seconds}' is not a number of seconds"))?;
    Ok(ExerciseDraft::new(*name, *description, duration))
}
