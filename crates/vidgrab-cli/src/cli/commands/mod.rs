//! CLI command handlers, one file per command.

mod check;
mod completions;
mod config;
mod download;
mod options;

pub use check::run_check;
pub use completions::run_completions;
pub use config::run_config;
pub use download::run_download;
pub use options::run_options;

use crate::cli::Selection;
use vidgrab_core::config::VidgrabConfig;
use vidgrab_core::{DownloadOptions, DownloadRequest};

/// Fill unset selections from config and resolve the options mapping.
fn resolve(cfg: &VidgrabConfig, url: &str, sel: &Selection) -> (DownloadRequest, DownloadOptions) {
    let dir = sel.dir.clone().unwrap_or_else(|| cfg.effective_save_dir());
    let request = DownloadRequest::new(url, dir, sel.name.as_deref());
    let format = sel.format.unwrap_or(cfg.default_format);
    let quality = sel.quality.unwrap_or(cfg.default_quality);
    (request, cfg.options(format, quality))
}
