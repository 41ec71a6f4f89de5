//! Implementation of the `recase convert` command.

use serde::Serialize;
use tracing::info;

use recase_core::Transcoder;

use crate::{
    cli::{ConvertArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One input/output pair, as emitted in `--output-format json` mode.
#[derive(Serialize)]
struct Conversion<'a> {
    input: &'a str,
    output: String,
}

pub fn execute(
    args: ConvertArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let from = super::resolve_format(
        args.from,
        config.defaults.from.as_deref(),
        "from",
        "defaults.from",
    )?;
    let to = super::resolve_format(args.to, config.defaults.to.as_deref(), "to", "defaults.to")?;

    let transcoder = Transcoder::new(from, to);
    info!(%from, %to, count = args.identifiers.len(), "converting identifiers");

    // Fail on the first bad identifier, before printing anything, so that a
    // partially-converted batch never reaches a pipe.
    let mut rows = Vec::with_capacity(args.identifiers.len());
    for input in &args.identifiers {
        rows.push(Conversion {
            input,
            output: transcoder.convert(input)?,
        });
    }

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).map_err(|e| CliError::IoError {
                message: "failed to serialise conversions".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
        _ => {
            // Data goes straight to stdout, one result per line, so the output
            // composes with shell pipelines regardless of colour settings.
            for row in &rows {
                println!("{}", row.output);
            }
            if output.format() == OutputFormat::Human && !output.is_quiet() && rows.len() > 1 {
                output.info(&format!("Converted {} identifiers", rows.len()))?;
            }
        }
    }

    Ok(())
}
