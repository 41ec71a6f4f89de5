//! Command handlers.
//!
//! Each submodule exposes a single `execute` function that receives its parsed
//! arguments plus whatever context it needs (config, output manager).  All
//! user-facing behaviour lives here; `main.rs` only dispatches.

use recase_core::Format;

use crate::{
    cli::FormatArg,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod convert;
pub mod formats;
pub mod parse;

/// Resolve a format from a CLI flag, falling back to a config-file default.
///
/// The flag value is already validated by clap; the config value is free text
/// and goes through the core name parser, which accepts the same aliases.
fn resolve_format(
    flag_value: Option<FormatArg>,
    config_value: Option<&str>,
    flag: &'static str,
    config_key: &'static str,
) -> CliResult<Format> {
    if let Some(arg) = flag_value {
        return Ok(arg.into());
    }
    let Some(name) = config_value else {
        return Err(CliError::MissingFormat { flag, config_key });
    };
    name.parse().map_err(|source| CliError::UnsupportedFormat {
        name: name.to_owned(),
        source,
    })
}
