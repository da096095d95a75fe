//! CLI argument definitions for rigcheck.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rig_model::{Category, Slot};

#[derive(Parser)]
#[command(
    name = "rigcheck",
    version,
    about = "PC build compatibility checker",
    long_about = "Load a parts catalog, apply picks and check the build.\n\n\
                  Reports compatible candidates, cascade clears, power budget\n\
                  and the cart hand-off for a selection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Engine options file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a catalog and report accepted and rejected rows.
    Catalog(CatalogArgs),

    /// List one category's candidates for a build.
    Candidates(CandidatesArgs),

    /// Apply picks and report selections, totals and review.
    Build(BuildArgs),

    /// Print the cart hand-off JSON for a build.
    Handoff(BuildArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog file (.csv or .json).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Catalog file (.csv or .json).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Pick a part for a slot, applied in order (e.g. --pick cpu=cpu-7600).
    #[arg(long = "pick", value_name = "SLOT=ID", value_parser = parse_pick)]
    pub picks: Vec<Pick>,

    /// Refuse blocked picks instead of clearing the parts they conflict with.
    #[arg(long = "strict")]
    pub strict: bool,

    /// How candidate reasons are reported (overrides the config file).
    #[arg(long = "reasons", value_enum)]
    pub reasons: Option<ReasonsArg>,
}

#[derive(Args)]
pub struct CandidatesArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Category to list.
    #[arg(long = "category", value_name = "CATEGORY", value_parser = parse_category)]
    pub category: Category,

    /// Only list parts that can be selected.
    #[arg(long = "selectable-only")]
    pub selectable_only: bool,
}

/// One `--pick slot=id` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub slot: Slot,
    pub id: String,
}

pub fn parse_pick(value: &str) -> Result<Pick, String> {
    let (slot, id) = value
        .split_once('=')
        .ok_or_else(|| format!("expected SLOT=ID, got '{value}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing part id in '{value}'"));
    }
    Ok(Pick {
        slot: slot.parse()?,
        id: id.to_string(),
    })
}

fn parse_category(value: &str) -> Result<Category, String> {
    value.parse()
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReasonsArg {
    /// First violated rule only.
    First,
    /// Every violated rule, joined with "; ".
    All,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick() {
        let pick = parse_pick("cpu=cpu-7600").unwrap();
        assert_eq!(pick.slot, Slot::Cpu);
        assert_eq!(pick.id, "cpu-7600");

        let pick = parse_pick("os-secondary= os-ubuntu").unwrap();
        assert_eq!(pick.slot, Slot::OsSecondary);
        assert_eq!(pick.id, "os-ubuntu");

        assert!(parse_pick("cpu").is_err());
        assert!(parse_pick("cpu=").is_err());
        assert!(parse_pick("toaster=t1").is_err());
    }

    #[test]
    fn test_cli_parses_picks() {
        let cli = Cli::try_parse_from([
            "rigcheck",
            "build",
            "catalog.csv",
            "--pick",
            "cpu=cpu-7600",
            "--pick",
            "motherboard=mb-b650",
            "--strict",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.picks.len(), 2);
        assert!(args.strict);
    }
}
