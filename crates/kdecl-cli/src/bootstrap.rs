use anyhow::Context;
use kdecl_config::KdeclConfig;
use kdecl_parser::ExtractOptions;

use crate::cli::Cli;

/// Effective settings after layering command-line flags over configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub options: ExtractOptions,
    pub lenient: bool,
    pub pretty: bool,
}

pub fn load_config() -> anyhow::Result<KdeclConfig> {
    KdeclConfig::load_with_dotenv().context("failed to load kdecl configuration")
}

pub fn resolve(cli: &Cli, config: &KdeclConfig) -> Settings {
    let mut options = config.extract.options();
    if let Some(style) = cli.body_style {
        options.body_style = style.into();
    }
    if let Some(layout) = cli.layout {
        options.layout = layout.into();
    }

    Settings {
        options,
        lenient: cli.lenient || config.parse.lenient,
        pretty: cli.pretty || config.output.pretty,
    }
}
