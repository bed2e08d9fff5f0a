//! CLI command definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Keypad: feed key presses to the calculator and print the resulting state
#[derive(Parser, Debug)]
#[command(name = "keypad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keys to press ("7", "+", "Backspace", "c"); a single argument like "12+3=" is split
    /// into characters
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Read further keys from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// JSON widget configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the notification duration in milliseconds
    #[arg(long, value_name = "N")]
    pub duration_ms: Option<u64>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no log output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
