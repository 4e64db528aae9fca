use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kdecl_parser::{BodyStyle, Layout};

/// Top-level CLI parser for the `kdecl` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kdecl",
    version,
    about = "Print the function and class declarations of a Kotlin file as JSON"
)]
pub struct Cli {
    /// Kotlin source file to analyze
    pub path: PathBuf,

    /// Body text policy (overrides config)
    #[arg(long, value_enum)]
    pub body_style: Option<BodyStyleArg>,

    /// Nest declarations under their parent, or list them flat (overrides config)
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Extract from source with syntax errors instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BodyStyleArg {
    Collapsed,
    Verbatim,
}

impl From<BodyStyleArg> for BodyStyle {
    fn from(arg: BodyStyleArg) -> Self {
        match arg {
            BodyStyleArg::Collapsed => Self::Collapsed,
            BodyStyleArg::Verbatim => Self::Verbatim,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LayoutArg {
    Nested,
    Flat,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Nested => Self::Nested,
            LayoutArg::Flat => Self::Flat,
        }
    }
}
