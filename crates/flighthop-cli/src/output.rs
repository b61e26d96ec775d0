//! Output formatting for command results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Pretty-printed JSON for machine consumption.
    Json,
}

impl OutputFormat {
    /// Render a result in the selected format.
    ///
    /// The value serialises to JSON directly; `plain` supplies the text
    /// rendering and is only invoked in text mode.
    pub fn render<T: Serialize>(&self, value: &T, plain: impl FnOnce() -> String) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", plain());
                Ok(())
            }
            OutputFormat::Json => render_json(value),
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
