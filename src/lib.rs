// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::NotesController;
use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::Identity;
use crate::infrastructure::{Config, LocalBackend};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeep with arguments");

    // Initialize infrastructure
    let config_path = match args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            path
        }
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)?;
    debug!(?config, "Loaded configuration");

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None if !config.backend.data_dir.is_empty() => PathBuf::from(&config.backend.data_dir),
        None => default_data_dir()?,
    };

    let backend = LocalBackend::new(&data_dir)?;

    // Initialize application. The identity is resolved up front and injected;
    // the controller never reaches for ambient session state.
    let identity = resolve_identity(&config);
    let mut controller = NotesController::new(backend, identity);

    // Initial load, mirroring the fetch-on-mount of the note list.
    controller.load();

    // Execute use case
    match args.command {
        Command::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(controller.notes())?);
            } else {
                println!("{}", TextPresenter::new().render(&controller));
            }
        }
        Command::Create {
            name,
            description,
            image,
        } => {
            info!(%name, "Creating note");
            let draft = controller.draft_mut();
            draft.set_name(name);
            draft.set_description(description);
            draft.set_image(image);
            controller.create();
            println!("{}", TextPresenter::new().render(&controller));
        }
        Command::Delete { id } => {
            info!(note_id = %id, "Deleting note");
            controller.delete(&id);
            println!("{}", TextPresenter::new().render(&controller));
        }
    }

    Ok(())
}

pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

pub fn default_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(dir.join(APP_DIR_NAME))
}

/// Stand-in for the auth wrapper: configured display name first, then the
/// login name from the environment.
fn resolve_identity(config: &Config) -> Identity {
    if !config.user.display_name.is_empty() {
        return Identity::new(config.user.display_name.clone());
    }
    match std::env::var("USER") {
        Ok(user) if !user.is_empty() => Identity::new(user),
        _ => Identity::new("user"),
    }
}
