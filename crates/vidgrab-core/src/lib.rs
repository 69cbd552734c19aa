pub mod config;
pub mod logging;

pub mod format;
pub mod options;
pub mod request;
pub mod worker;
pub mod ytdlp;

pub use format::{get_options, OutputFormat, Quality};
pub use options::{DownloadOptions, PostProcessor};
pub use request::{DownloadRequest, RequestError};
pub use worker::{spawn_download, DownloadEvent, DownloadHandle};
pub use ytdlp::{DownloadError, Extractor, YtDlp};
