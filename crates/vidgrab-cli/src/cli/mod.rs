//! CLI for vidgrab: the form's download flow without the form.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vidgrab_core::config;
use vidgrab_core::{OutputFormat, Quality};

use commands::{run_check, run_completions, run_config, run_download, run_options};

/// Top-level CLI for vidgrab.
#[derive(Debug, Parser)]
#[command(name = "vidgrab-cli")]
#[command(about = "vidgrab: download videos and audio through yt-dlp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to save and what to fetch; shared by `download` and `options`.
#[derive(Debug, Args)]
pub struct Selection {
    /// Directory to save into (default: config save_dir, else ~/Downloads).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Custom filename without extension (default: the video title).
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output format: mp4, mkv, webm, or mp3 (audio only).
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Quality: best, 720p, 480p, 360p, or audio.
    #[arg(short, long, value_name = "QUALITY")]
    pub quality: Option<Quality>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one video (or its audio) with yt-dlp.
    Download {
        /// Video page URL.
        url: String,

        #[command(flatten)]
        selection: Selection,
    },

    /// Print the yt-dlp options mapping a download would use, as JSON.
    Options {
        #[command(flatten)]
        selection: Selection,
    },

    /// Show which yt-dlp will be used and its version.
    Check,

    /// Show the config file path and effective configuration.
    Config,

    /// Write shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download { url, selection } => run_download(&cfg, &url, &selection)?,
            CliCommand::Options { selection } => run_options(&cfg, &selection)?,
            CliCommand::Check => run_check(&cfg)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
