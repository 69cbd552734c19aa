//! Errors from running the external extraction tool.

use std::path::PathBuf;

/// Failure of a single yt-dlp run. No variant is retried.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The configured program could not be found on disk or in `PATH`.
    #[error("yt-dlp not found at '{}'; install it or set ytdlp_path in config.toml", .0.display())]
    ToolNotFound(PathBuf),
    /// Spawning or waiting on the process failed.
    #[error("running yt-dlp: {0}")]
    Io(#[from] std::io::Error),
    /// The process exited unsuccessfully. `code` is `None` when killed by a signal.
    #[error("{message}")]
    Failed { code: Option<i32>, message: String },
}
