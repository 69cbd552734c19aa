//! `vidgrab-cli check` – report the yt-dlp executable in use.

use anyhow::{bail, Result};
use vidgrab_core::config::VidgrabConfig;

pub fn run_check(cfg: &VidgrabConfig) -> Result<()> {
    let ytdlp = cfg.extractor();
    match ytdlp.version() {
        Some(version) => {
            println!("yt-dlp: {} (version {})", ytdlp.program().display(), version);
            Ok(())
        }
        None => bail!(
            "yt-dlp not usable at '{}'; install it or set ytdlp_path in config.toml",
            ytdlp.program().display()
        ),
    }
}
