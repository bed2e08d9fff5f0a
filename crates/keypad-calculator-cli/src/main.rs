//! Keypad CLI: press calculator keys from the command line
//!
//! ## Usage
//!
//! ```bash
//! keypad "(1+2)*3="
//! keypad --json 1 / 0 =
//! ```

use clap::Parser;
use keypad_calculator_cli::{
    load_widget_config, logging, read_keys, run_session, split_keys, Cli, CliConfig, CliResult,
    ColorChoice, Verbosity,
};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init(config.verbosity);

    let widget_config = load_widget_config(cli.config.as_deref(), cli.duration_ms)?;

    let mut keys = split_keys(&cli.keys)?;
    if cli.stdin {
        keys.extend(read_keys(io::stdin().lock())?);
    }

    let surface = run_session(&keys, widget_config);

    if config.json {
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &surface)?;
        writeln!(out)?;
    } else {
        surface.write_text(
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            config.color.should_color(),
        )?;
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_json(cli.json)
}
