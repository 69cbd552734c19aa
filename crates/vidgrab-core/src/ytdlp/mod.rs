//! Invocation of the external `yt-dlp` tool.
//!
//! Extraction, transfer, muxing and transcoding all happen inside yt-dlp;
//! this module only renders the options mapping to arguments, runs the
//! process to completion, and turns a failed exit into a [`DownloadError`].

mod error;
mod stderr;

pub use error::DownloadError;

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::options::DownloadOptions;
use stderr::StderrTail;

/// Program name looked up in `PATH` when no path is configured.
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Something that can fetch one URL with a given options mapping.
///
/// The worker thread is generic over this so tests can run without yt-dlp.
pub trait Extractor: Send + Sync {
    fn download(&self, url: &str, options: &DownloadOptions) -> Result<(), DownloadError>;
}

/// Runs the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    no_playlist: bool,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            no_playlist: true,
        }
    }

    /// Whether to pass `--no-playlist` (download only the linked video when
    /// the URL also names a playlist). On by default.
    pub fn no_playlist(mut self, yes: bool) -> Self {
        self.no_playlist = yes;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list for one download, URL last after `--`.
    pub fn build_args(&self, url: &str, options: &DownloadOptions) -> Vec<String> {
        let mut args = options.to_args();
        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }
        args.push("--newline".to_string());
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// First line of `yt-dlp --version`, or `None` if the program cannot run.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
    }

    fn spawn_error(&self, e: std::io::Error) -> DownloadError {
        if e.kind() == std::io::ErrorKind::NotFound {
            DownloadError::ToolNotFound(self.program.clone())
        } else {
            DownloadError::Io(e)
        }
    }
}

impl Extractor for YtDlp {
    fn download(&self, url: &str, options: &DownloadOptions) -> Result<(), DownloadError> {
        let args = self.build_args(url, options);
        tracing::info!(program = %self.program.display(), ?args, "starting yt-dlp");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Drain both pipes concurrently so neither can fill up and block the child.
        let tail = std::thread::scope(|s| {
            let err_reader = s.spawn(move || {
                let mut tail = StderrTail::default();
                if let Some(err) = stderr {
                    for line in BufReader::new(err).lines().map_while(Result::ok) {
                        tracing::warn!(target: "vidgrab_core::ytdlp::stderr", "{}", line);
                        tail.push(line);
                    }
                }
                tail
            });
            if let Some(out) = stdout {
                for line in BufReader::new(out).lines().map_while(Result::ok) {
                    tracing::debug!(target: "vidgrab_core::ytdlp::stdout", "{}", line);
                }
            }
            err_reader.join().unwrap_or_default()
        });

        let status = child.wait()?;
        if status.success() {
            tracing::info!("yt-dlp finished");
            return Ok(());
        }

        let code = status.code();
        let message = tail.failure_message(code);
        tracing::error!(?code, %message, "yt-dlp failed");
        Err(DownloadError::Failed { code, message })
    }
}
