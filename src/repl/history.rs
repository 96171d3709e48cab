use rustyline::history::History;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const HISTORY_FILE_NAME: &str = "history.txt";

/// Picks the history file: an explicit path wins, otherwise
/// `<data dir>/<crate name>/history.txt`.
pub(crate) fn get_history_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    let crate_name = env!("CARGO_PKG_NAME");
    dirs::data_dir().or_else(dirs::config_dir).map(|mut path| {
        path.push(crate_name);
        path.push(HISTORY_FILE_NAME);
        path
    })
}

fn ensure_parent_dir(history_path: &Path) {
    if let Some(parent_dir) = history_path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            if let Err(e) = fs::create_dir_all(parent_dir) {
                warn!(
                    "Failed to create history directory {}: {}",
                    parent_dir.display(),
                    e
                );
            }
        }
    }
}

pub(crate) fn load_history_from_path<H: History>(history: &mut H, history_path: &Path) {
    ensure_parent_dir(history_path);
    if history_path.exists() {
        if let Err(err) = history.load(history_path) {
            warn!(
                "Could not load history from {}: {}",
                history_path.display(),
                err
            );
        } else {
            info!("Loaded history from {}", history_path.display());
        }
    } else {
        info!(
            "History file {} does not exist. Will create on exit.",
            history_path.display()
        );
    }
}

pub(crate) fn save_history_to_path<H: History>(history: &mut H, history_path: &Path) {
    ensure_parent_dir(history_path);
    if let Err(err) = history.save(history_path) {
        error!(
            "Could not save history to {}: {}",
            history_path.display(),
            err
        );
    } else {
        info!("Saved history to {}", history_path.display());
    }
}
