//! CLI command definitions and handlers

mod build;
mod check;
mod init;
mod input;
mod measure;
mod profile;
mod reset;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a score threshold (0-100)
fn parse_threshold(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n > 100 {
        Err("threshold cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// voiceprint - keep your copy in your own voice
#[derive(Parser, Debug)]
#[command(name = "voiceprint")]
#[command(
    version,
    about = "Tone and voice consistency checker: build a voice profile from reference samples, then score new copy against it",
    long_about = "voiceprint measures writing along nine stylistic dimensions \
(formality, sentence length, vocabulary level, active voice, questions, \
perspective, power words, emphasis, sentence variety).\n\n\
Build a profile from two or three pieces of copy that sound the way you want, \
then check drafts against it.",
    after_help = "\
Examples:
  voiceprint build about.txt launch.txt       Build a profile from two samples
  voiceprint check draft.txt                  Score a draft against the profile
  cat draft.txt | voiceprint check -          Score text from stdin
  voiceprint check *.md --format json         JSON output for scripting
  voiceprint check draft.txt --fail-under 70  Exit code 1 below 70 (CI mode)
  voiceprint profile                          Show the stored profile"
)]
pub struct Cli {
    /// Workspace holding voiceprint.toml and the .voiceprint store
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a voiceprint.toml with the default settings
    Init,

    /// Build a voice profile from reference samples and store it
    #[command(after_help = "\
Examples:
  voiceprint build about.txt launch.txt
  voiceprint build --sample \"We keep it simple.\" --sample \"You deserve better.\"")]
    Build {
        /// Sample files (`-` reads stdin)
        files: Vec<PathBuf>,

        /// Inline sample text (repeatable)
        #[arg(long = "sample", short = 's')]
        samples: Vec<String>,
    },

    /// Score text against the stored profile
    Check {
        /// Files to check (`-` reads stdin)
        files: Vec<PathBuf>,

        /// Inline text to check
        #[arg(long, short = 't')]
        text: Option<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any overall score is below this (0-100)
        #[arg(long, value_parser = parse_threshold)]
        fail_under: Option<u32>,

        /// Plain status markers instead of emoji
        #[arg(long)]
        no_emoji: bool,
    },

    /// Print the raw voice measurement of one text
    Measure {
        /// File to measure (`-` reads stdin)
        file: PathBuf,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,
    },

    /// Show the stored voice profile
    Profile {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,
    },

    /// Delete the stored profile and samples
    Reset,

    /// Show version info
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&cli.dir),

        Commands::Build { files, samples } => build::run(&cli.dir, &files, samples),

        Commands::Check {
            files,
            text,
            format,
            output,
            fail_under,
            no_emoji,
        } => check::run(
            &cli.dir,
            check::CheckArgs {
                files,
                text,
                format,
                output,
                fail_under,
                no_emoji,
            },
        ),

        Commands::Measure { file, format } => measure::run(&cli.dir, &file, format.as_deref()),

        Commands::Profile { format } => profile::run(&cli.dir, format.as_deref()),

        Commands::Reset => reset::run(&cli.dir),

        Commands::Version => {
            println!("voiceprint {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("70"), Ok(70));
        assert!(parse_threshold("101").is_err());
        assert!(parse_threshold("high").is_err());
    }

    #[test]
    fn test_global_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["voiceprint", "profile", "--dir", "/tmp/ws"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("/tmp/ws"));
        assert!(matches!(cli.command, Commands::Profile { format: None }));
    }

    #[test]
    fn test_repeatable_samples() {
        let cli = Cli::try_parse_from(["voiceprint", "build", "-s", "One.", "-s", "Two."]).unwrap();
        match cli.command {
            Commands::Build { files, samples } => {
                assert!(files.is_empty());
                assert_eq!(samples, vec!["One.", "Two."]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
