//! Key collection, configuration loading and the key-press session

use keypad_calculator::config::WidgetConfig;
use keypad_calculator::core::evaluator::FastEvaluator;
use keypad_calculator::core::InputEvent;
use keypad_calculator::widget::CalculatorWidget;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::terminal::TerminalSurface;

/// Expands positional arguments into raw keys.
///
/// Several arguments are taken one key each. A lone argument is split on
/// whitespace if it has any, kept whole if it already names a key
/// (`Backspace`, `c`), and split into characters otherwise.
pub fn split_keys(args: &[String]) -> CliResult<Vec<String>> {
    if args.iter().any(String::is_empty) {
        return Err(CliError::invalid_argument("empty key"));
    }
    let keys = match args {
        [single] if single.contains(char::is_whitespace) => {
            single.split_whitespace().map(str::to_string).collect()
        }
        [single] if InputEvent::from_key(single).is_none() => {
            single.chars().map(String::from).collect()
        }
        _ => args.to_vec(),
    };
    Ok(keys)
}

/// Reads one key per line, skipping blank lines
pub fn read_keys<R: BufRead>(reader: R) -> CliResult<Vec<String>> {
    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let key = line.trim();
        if !key.is_empty() {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}

/// Loads the widget configuration, applying the duration override
pub fn load_widget_config(
    path: Option<&Path>,
    duration_ms: Option<u64>,
) -> CliResult<WidgetConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            WidgetConfig::from_json_str(&json)?
        }
        None => WidgetConfig::default(),
    };
    if let Some(millis) = duration_ms {
        config = config.with_notification_duration_ms(millis);
    }
    config.validate()?;
    Ok(config)
}

/// Presses every key in order and returns the final surface state
pub fn run_session<I, S>(keys: I, config: WidgetConfig) -> TerminalSurface
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut widget = CalculatorWidget::with_surface(TerminalSurface::default(), FastEvaluator::new())
        .with_config(config);
    for key in keys {
        let key = key.as_ref();
        if let Err(err) = widget.press_key(key) {
            debug!(key, %err, "recovered");
        }
    }
    widget.surface().clone()
}
