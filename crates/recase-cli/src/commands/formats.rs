//! Implementation of the `recase formats` command.

use owo_colors::OwoColorize;
use serde::Serialize;

use recase_core::Format;

use crate::{
    cli::{FormatsArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct FormatRow {
    name: &'static str,
    aliases: &'static [&'static str],
    example: &'static str,
}

impl From<Format> for FormatRow {
    fn from(format: Format) -> Self {
        Self {
            name: format.as_str(),
            aliases: format.aliases(),
            example: format.example(),
        }
    }
}

pub fn execute(args: FormatsArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Supported formats:")?;
            for format in Format::ALL {
                // Colour codes inflate the padded width, so pad the raw name
                // first and colour the padded string.
                let padded = format!("{:<14}", format.as_str());
                let name = if output.supports_color() {
                    padded.green().bold().to_string()
                } else {
                    padded
                };
                output.print(&format!(
                    "  {name} {:<24} aliases: {}",
                    format.example(),
                    format.aliases().join(", ")
                ))?;
            }
        }

        ListFormat::List => {
            for format in Format::ALL {
                println!("{format}");
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let rows: Vec<FormatRow> = Format::ALL.into_iter().map(FormatRow::from).collect();
            let json = serde_json::to_string_pretty(&rows).map_err(|e| CliError::IoError {
                message: "failed to serialise format list".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,example,aliases");
            for format in Format::ALL {
                println!(
                    "{},{},{}",
                    format.as_str(),
                    format.example(),
                    format.aliases().join(" ")
                );
            }
        }
    }

    Ok(())
}
