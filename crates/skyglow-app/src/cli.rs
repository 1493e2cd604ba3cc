use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use skyglow_common::ThemeMode;

/// Skyglow: a time-of-day sky theme engine.
#[derive(Parser, Debug)]
#[command(name = "skyglow", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preferences file override (where the theme mode is stored).
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the sky for now or a given time.
    Resolve {
        /// Local time as HH:MM.
        #[arg(long, value_parser = parse_hm)]
        at: Option<NaiveTime>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print a CSS `:root` block with the sky variables.
    Css {
        #[arg(long, value_parser = parse_hm)]
        at: Option<NaiveTime>,

        /// Print a script that sets the variables on a live page instead.
        #[arg(long)]
        js: bool,
    },

    /// Print the script that applies a theme mode to a page.
    Apply {
        /// Mode to apply; defaults to the stored preference.
        #[arg(long)]
        mode: Option<ThemeMode>,

        #[arg(long, value_parser = parse_hm)]
        at: Option<NaiveTime>,
    },

    /// Show or change the stored theme mode.
    Mode {
        #[command(subcommand)]
        action: Option<ModeAction>,
    },

    /// List the active keyframe table.
    Palette,

    /// Show or edit the config file.
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Follow the sky, printing each update until interrupted.
    Watch {
        /// Seconds between updates; defaults to `sky.refresh_interval_secs`.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=3600))]
        interval: Option<u32>,

        /// Also print the apply script for every update.
        #[arg(long)]
        script: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ModeAction {
    /// Persist a new theme mode.
    Set { mode: ThemeMode },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective config as JSON.
    Show,
    /// Change settings and save the config file.
    Set {
        #[arg(long)]
        default_mode: Option<ThemeMode>,

        /// `default`, a palette name, or a YAML path.
        #[arg(long)]
        palette: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=3600))]
        refresh_interval: Option<u32>,

        /// Force the OS color-scheme answer used by the `system` mode.
        #[arg(long)]
        prefers_dark: Option<bool>,
    },
}

impl Command {
    /// The fixed time requested on the command line, if any.
    pub fn at(&self) -> Option<NaiveTime> {
        match self {
            Command::Resolve { at, .. } | Command::Css { at, .. } | Command::Apply { at, .. } => *at,
            _ => None,
        }
    }
}

/// Parse `HH:MM` (24-hour).
pub fn parse_hm(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| format!("expected a time as HH:MM, got '{s}'"))
}

pub fn parse() -> Args {
    Args::parse()
}
