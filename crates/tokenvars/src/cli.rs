// ABOUTME: Command line argument definitions for the tokenvars binary
// ABOUTME: Selects the input source, the blocks to print and their output format

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::report::Block;
use crate::source::Source;

#[derive(Debug, Parser)]
#[command(name = "tokenvars", version, about = "Convert design token JSON into stylesheet variables")]
pub struct Cli {
    /// Token document to convert, or `-` to read standard input
    #[arg(value_name = "INPUT")]
    pub input: Source,

    /// Which variable blocks to print
    #[arg(short, long, value_enum, default_value_t = Section::All)]
    pub section: Section,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wrap each block in its selector (`@theme inline`, `:root`, `.dark`)
    #[arg(long)]
    pub wrap: bool,

    /// Configuration file (default: <config_dir>/tokenvars/tokenvars.toml)
    #[arg(short, long, value_name = "FILE", env = "TOKENVARS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity, up to three times
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    Base,
    Light,
    Dark,
}

impl Section {
    pub fn blocks(self) -> &'static [Block] {
        match self {
            Section::All => &Block::ALL,
            Section::Base => &[Block::Base],
            Section::Light => &[Block::Light],
            Section::Dark => &[Block::Dark],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tokenvars", "tokens.json"]).unwrap();
        assert_eq!(cli.input, Source::File(PathBuf::from("tokens.json")));
        assert_eq!(cli.section, Section::All);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.wrap);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "tokenvars",
            "-s",
            "dark",
            "--format",
            "json",
            "--wrap",
            "-c",
            "custom.toml",
            "-vv",
            "-",
        ])
        .unwrap();

        assert_eq!(cli.input, Source::Stdin);
        assert_eq!(cli.section, Section::Dark);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.wrap);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["tokenvars"]).is_err());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(Cli::try_parse_from(["tokenvars", "-s", "contrast", "tokens.json"]).is_err());
    }

    #[test]
    fn test_section_blocks() {
        assert_eq!(Section::All.blocks(), &[Block::Base, Block::Light, Block::Dark]);
        assert_eq!(Section::Light.blocks(), &[Block::Light]);
    }
}
