//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No conversion logic lives here beyond the
//! [`FormatArg`] → core [`Format`] mapping.

use clap::{Args, Parser, Subcommand, ValueEnum};

use recase_core::Format;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "recase",
    bin_name = "recase",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Convert identifiers between naming conventions",
    long_about = "Recase parses an identifier written in one naming convention \
                  (underscore, dash, UpperCamel, lowerCamel) into its structural \
                  form and re-renders it in any other, preserving privacy \
                  prefixes and acronym runs.",
    after_help = "EXAMPLES:\n\
        \x20 recase convert the_little_fox --from underscore --to upper-camel\n\
        \x20 recase convert SimpleHTTPRequest -f pascal -t snake\n\
        \x20 recase parse __the_little_BROWN_fox --format underscore\n\
        \x20 recase formats\n\
        \x20 recase completions bash > /usr/share/bash-completion/completions/recase",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert identifiers from one naming convention to another.
    #[command(
        visible_alias = "c",
        about = "Convert identifiers between formats",
        after_help = "EXAMPLES:\n\
            \x20 recase convert the_little_fox --from underscore --to upper-camel\n\
            \x20 recase convert simple_HTTP_request -f snake -t camel\n\
            \x20 recase convert one_thing another_thing -f snake -t kebab"
    )]
    Convert(ConvertArgs),

    /// Show the structural form of an identifier.
    #[command(
        visible_alias = "p",
        about = "Parse an identifier into privacy level and words",
        after_help = "EXAMPLES:\n\
            \x20 recase parse __the_little_BROWN_fox --format underscore\n\
            \x20 recase parse SimpleHTTPRequest -f pascal --output-format json"
    )]
    Parse(ParseArgs),

    /// List supported naming conventions.
    #[command(
        visible_alias = "ls",
        about = "List supported formats",
        after_help = "EXAMPLES:\n\
            \x20 recase formats\n\
            \x20 recase formats --format json"
    )]
    Formats(FormatsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 recase completions bash > ~/.local/share/bash-completion/completions/recase\n\
            \x20 recase completions zsh  > ~/.zfunc/_recase\n\
            \x20 recase completions fish > ~/.config/fish/completions/recase.fish"
    )]
    Completions(CompletionsArgs),
}

// ── convert ───────────────────────────────────────────────────────────────────

/// Arguments for `recase convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Identifiers to convert, in source-format spelling.
    #[arg(value_name = "IDENTIFIER", required = true, num_args = 1..)]
    pub identifiers: Vec<String>,

    /// Source format.  Falls back to `defaults.from` in the config file.
    #[arg(
        short = 'f',
        long = "from",
        value_name = "FORMAT",
        value_enum,
        help = "Source format"
    )]
    pub from: Option<FormatArg>,

    /// Destination format.  Falls back to `defaults.to` in the config file.
    #[arg(
        short = 't',
        long = "to",
        value_name = "FORMAT",
        value_enum,
        help = "Destination format"
    )]
    pub to: Option<FormatArg>,
}

// ── parse ─────────────────────────────────────────────────────────────────────

/// Arguments for `recase parse`.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Identifier to parse.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Format the identifier is written in.  Falls back to `defaults.from`
    /// in the config file.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_enum,
        help = "Source format"
    )]
    pub format: Option<FormatArg>,
}

// ── formats ───────────────────────────────────────────────────────────────────

/// Arguments for `recase formats`.
#[derive(Debug, Args)]
pub struct FormatsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `formats` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `recase completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Naming conventions, as spelled on the command line.
///
/// Mirrors the core [`Format`] enum; the common community names are accepted
/// as aliases (`snake`, `kebab`, `pascal`, `camel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum FormatArg {
    /// Also accepted as `snake`.
    #[value(alias = "snake")]
    Underscore,
    /// Also accepted as `kebab`.
    #[value(alias = "kebab")]
    Dash,
    /// Also accepted as `pascal`.
    #[value(alias = "pascal")]
    UpperCamel,
    /// Also accepted as `camel`.
    #[value(alias = "camel")]
    LowerCamel,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Underscore => Format::Underscore,
            FormatArg::Dash => Format::Dash,
            FormatArg::UpperCamel => Format::UpperCamel,
            FormatArg::LowerCamel => Format::LowerCamel,
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Format::from(*self).fmt(f)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn format_arg_maps_to_core_format() {
        assert_eq!(Format::from(FormatArg::Underscore), Format::Underscore);
        assert_eq!(Format::from(FormatArg::UpperCamel), Format::UpperCamel);
        assert_eq!(FormatArg::Dash.to_string(), "dash");
    }

    #[test]
    fn parse_convert_command() {
        let cli = Cli::parse_from([
            "recase",
            "convert",
            "the_fox",
            "--from",
            "underscore",
            "--to",
            "upper-camel",
        ]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected Convert command");
        };
        assert_eq!(args.identifiers, vec!["the_fox"]);
        assert_eq!(args.from, Some(FormatArg::Underscore));
        assert_eq!(args.to, Some(FormatArg::UpperCamel));
    }

    #[test]
    fn convert_accepts_community_aliases() {
        let cli = Cli::parse_from(["recase", "convert", "x", "-f", "snake", "-t", "pascal"]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected Convert command");
        };
        assert_eq!(args.from, Some(FormatArg::Underscore));
        assert_eq!(args.to, Some(FormatArg::UpperCamel));
    }

    #[test]
    fn convert_accepts_multiple_identifiers() {
        let cli = Cli::parse_from(["recase", "c", "a_b", "c_d", "-f", "snake", "-t", "camel"]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected Convert command");
        };
        assert_eq!(args.identifiers.len(), 2);
    }

    #[test]
    fn convert_requires_at_least_one_identifier() {
        let result = Cli::try_parse_from(["recase", "convert", "-f", "snake", "-t", "camel"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["recase", "--quiet", "--verbose", "formats"]);
        assert!(result.is_err());
    }
}
