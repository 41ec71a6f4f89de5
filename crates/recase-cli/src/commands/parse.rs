//! Implementation of the `recase parse` command.

use tracing::info;

use recase_core::Codec as _;

use crate::{
    cli::{OutputFormat, ParseArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ParseArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // `parse` reads, never writes, so the source default is the right
    // fallback for its single format flag.
    let format = super::resolve_format(
        args.format,
        config.defaults.from.as_deref(),
        "format",
        "defaults.from",
    )?;

    info!(%format, identifier = %args.identifier, "parsing identifier");
    let identifier = format.codec().decode(&args.identifier)?;

    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&identifier).map_err(|e| CliError::IoError {
            message: "failed to serialise identifier".into(),
            source: std::io::Error::other(e),
        })?;
        println!("{json}");
        return Ok(());
    }

    println!("privacy: {}", identifier.privacy());
    println!("words:");
    for word in identifier.words() {
        if word.is_marked() {
            println!("  {word} (marked)");
        } else {
            println!("  {word}");
        }
    }

    Ok(())
}
