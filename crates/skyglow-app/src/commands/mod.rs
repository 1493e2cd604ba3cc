//! Subcommand implementations.
//!
//! One-shot commands return their output so `main` prints it; `watch`
//! streams to stdout itself.

mod config;
mod mode;
mod resolve;
mod watch;


use skyglow_common::SkyglowError;

use crate::app::App;
use crate::cli::{Command, ConfigAction, ModeAction};

/// Run a one-shot command, returning what to print.
pub fn execute(app: &App, command: &Command) -> Result<String, SkyglowError> {
    match command {
        Command::Resolve { json, .. } => resolve::resolve(app, *json),
        Command::Css { js, .. } => Ok(resolve::css(app, *js)),
        Command::Palette => Ok(resolve::palette(app)),
        Command::Config {
            action: None | Some(ConfigAction::Show),
        } => Ok(config::show(app)),
        Command::Config {
            action: Some(edit @ ConfigAction::Set { .. }),
        } => config::set(app, edit),
        Command::Apply { mode, .. } => Ok(mode::apply(app, *mode)),
        Command::Mode { action: None } => Ok(mode::show(app)),
        Command::Mode {
            action: Some(ModeAction::Set { mode }),
        } => Ok(mode::set(app, *mode)),
        Command::Watch { interval, script } => {
            watch::run(app, *interval, *script)?;
            Ok(String::new())
        }
    }
}
