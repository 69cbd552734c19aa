//! `vidgrab-cli download <url>` – run one download and wait for it.

use anyhow::{bail, Result};
use std::sync::Arc;
use vidgrab_core::config::VidgrabConfig;
use vidgrab_core::{spawn_download, DownloadEvent};

use super::resolve;
use crate::cli::Selection;

pub fn run_download(cfg: &VidgrabConfig, url: &str, sel: &Selection) -> Result<()> {
    let (request, options) = resolve(cfg, url, sel);
    request.validate()?;

    println!("Preparing to download {} ...", request.url);
    let handle = spawn_download(Arc::new(cfg.extractor()), request, options)?;

    match handle.wait() {
        DownloadEvent::Finished { output_template } => {
            println!("Download completed! ({output_template})");
            Ok(())
        }
        DownloadEvent::Failed { message } => bail!("download failed: {message}"),
        DownloadEvent::Started { .. } => bail!("download ended without a result"),
    }
}
