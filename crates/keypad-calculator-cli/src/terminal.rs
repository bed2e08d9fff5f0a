//! Terminal surface: collects widget output and prints it once the keys run out

use console::style;
use keypad_calculator::core::symbol::format_symbols;
use keypad_calculator::widget::{NotificationSink, RenderSurface};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;

/// One notice as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeReport {
    /// Message text
    pub message: String,
    /// How long the notice stays up
    pub duration_ms: u64,
}

/// Latest rendered state plus every notice raised along the way
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalSurface {
    /// Summary line, if shown
    pub summary: Option<String>,
    /// Live expression (ASCII operators)
    pub expression: String,
    /// Notices in the order they were raised
    pub notices: Vec<NoticeReport>,
}

impl RenderSurface for TerminalSurface {
    fn render(&mut self, summary: Option<&str>, expression: &str) {
        self.summary = summary.map(str::to_string);
        self.expression = expression.to_string();
    }
}

impl NotificationSink for TerminalSurface {
    fn notify(&mut self, message: &str, duration: Duration) {
        self.notices.push(NoticeReport {
            message: message.to_string(),
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        });
    }
}

impl TerminalSurface {
    /// Expression with display glyphs
    #[must_use]
    pub fn display_expression(&self) -> String {
        format_symbols(&self.expression)
    }

    /// Prints the summary and expression to `out` and the notices to `err`
    pub fn write_text<O: Write, E: Write>(
        &self,
        out: &mut O,
        err: &mut E,
        use_color: bool,
    ) -> io::Result<()> {
        for notice in &self.notices {
            let marker = if use_color {
                style("!").yellow().bold().force_styling(true).to_string()
            } else {
                "!".to_string()
            };
            writeln!(err, "{marker} {} ({}ms)", notice.message, notice.duration_ms)?;
        }

        if let Some(summary) = &self.summary {
            let summary = format_symbols(summary);
            if use_color {
                writeln!(out, "{}", style(summary).dim().force_styling(true))?;
            } else {
                writeln!(out, "{summary}")?;
            }
        }
        writeln!(out, "{}", self.display_expression())
    }
}
