//! Interactive shell: each line names a primitive and lists literal argument
//! values, e.g. `cons 1 (2 3)`. Nothing is evaluated beyond that one call.

pub mod highlighter;
mod history;

use crate::engine::reader::read_call;
use crate::engine::registry::{builtins, resolve};
use crate::engine::value::Value;
use highlighter::ReplHelper;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a single shell line amounts to.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    Empty,
    Exit,
    Listing(String),
    Value(Value),
    Failed(String),
}

/// Interprets one shell line without touching the terminal.
pub fn handle_line(line: &str) -> LineOutcome {
    let trimmed = line.trim();
    match trimmed {
        "" => LineOutcome::Empty,
        ".exit" => LineOutcome::Exit,
        ".list" => LineOutcome::Listing(builtins().aliases().join(" ")),
        _ => {
            let (name, args) = match read_call(trimmed) {
                Ok(call) => call,
                Err(e) => return LineOutcome::Failed(e.to_string()),
            };
            debug!(primitive = %name, argc = args.len(), "Shell invocation");
            match resolve(&name).and_then(|primitive| primitive.call(args)) {
                Ok(value) => LineOutcome::Value(value),
                Err(e) => LineOutcome::Failed(e.to_string()),
            }
        }
    }
}

#[tracing::instrument]
pub fn start_repl(history_override: Option<PathBuf>) -> anyhow::Result<()> {
    info!("Starting shell session with rustyline");
    let mut rl = Editor::<ReplHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(ReplHelper::new()));
    let mut line_number = 1;

    let history_path_opt = history::get_history_path(history_override);
    match history_path_opt {
        Some(ref history_path) => history::load_history_from_path(rl.history_mut(), history_path),
        None => warn!("Could not determine history file path. History will not be saved."),
    }

    loop {
        let prompt = format!("prim ({})> ", line_number);
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        warn!("Failed to add line to history: {}", err);
                    }
                }
                match handle_line(&line) {
                    LineOutcome::Empty => {}
                    LineOutcome::Exit => {
                        info!("Exiting shell session via user command.");
                        println!("Exiting.");
                        break;
                    }
                    LineOutcome::Listing(aliases) => println!("{}", aliases),
                    LineOutcome::Value(value) => println!("{}", value),
                    LineOutcome::Failed(message) => eprintln!("Error: {}", message),
                }
            }
            Err(ReadlineError::Interrupted) => {
                info!("Shell interrupted (Ctrl-C).");
                println!("Interrupted. Type .exit or Ctrl-D to exit.");
            }
            Err(ReadlineError::Eof) => {
                info!("Shell EOF detected (Ctrl-D).");
                println!("Exiting.");
                break;
            }
            Err(err) => {
                eprintln!("Shell readline error: {:?}", err);
                break;
            }
        }
        line_number += 1;
    }

    if let Some(ref history_path) = history_path_opt {
        history::save_history_to_path(rl.history_mut(), history_path);
    }
    Ok(())
}
