use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::format::{self, OutputFormat, Quality, DEFAULT_AUDIO_QUALITY};
use crate::options::DownloadOptions;
use crate::ytdlp::{YtDlp, DEFAULT_PROGRAM};

/// Global configuration loaded from `~/.config/vidgrab/config.toml`.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VidgrabConfig {
    /// yt-dlp executable: a bare name looked up in `PATH`, or a full path.
    pub ytdlp_path: String,
    /// Initial save location; `~/Downloads` when unset.
    pub save_dir: Option<PathBuf>,
    /// Format preselected in the form and used by the CLI without `--format`.
    pub default_format: OutputFormat,
    /// Quality preselected in the form and used by the CLI without `--quality`.
    pub default_quality: Quality,
    /// Bitrate in kbps for audio-only downloads.
    pub audio_quality: String,
    /// Pass `--no-playlist` so a watch URL inside a playlist fetches one video.
    pub no_playlist: bool,
}

impl Default for VidgrabConfig {
    fn default() -> Self {
        Self {
            ytdlp_path: DEFAULT_PROGRAM.to_string(),
            save_dir: None,
            default_format: OutputFormat::default(),
            default_quality: Quality::default(),
            audio_quality: DEFAULT_AUDIO_QUALITY.to_string(),
            no_playlist: true,
        }
    }
}

impl VidgrabConfig {
    /// Save location to offer when the user has not picked one.
    pub fn effective_save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(default_save_dir)
    }

    /// The configured yt-dlp runner.
    pub fn extractor(&self) -> YtDlp {
        YtDlp::new(&self.ytdlp_path).no_playlist(self.no_playlist)
    }

    /// Options for the given selections with the configured audio bitrate.
    pub fn options(&self, format: OutputFormat, quality: Quality) -> DownloadOptions {
        format::get_options_with_audio_quality(format, quality, &self.audio_quality)
    }
}

/// `$HOME/Downloads`, or `./Downloads` if `HOME` is unset.
pub fn default_save_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VidgrabConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<VidgrabConfig> {
    if !path.exists() {
        let default_cfg = VidgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: VidgrabConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
