//! The options mapping handed to yt-dlp.
//!
//! Field names match yt-dlp's embedded-API option keys so the mapping can be
//! printed as JSON for inspection; [`DownloadOptions::to_args`] renders the
//! same mapping as command-line flags for the `yt-dlp` executable.

use serde::{Deserialize, Serialize};

/// Post-processor key for audio extraction through FFmpeg.
pub const EXTRACT_AUDIO_KEY: &str = "FFmpegExtractAudio";

/// One post-processing step run by yt-dlp after the download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: String,
    pub preferredquality: String,
}

impl PostProcessor {
    pub fn extract_audio(codec: &str, quality: &str) -> Self {
        Self {
            key: EXTRACT_AUDIO_KEY.to_string(),
            preferredcodec: codec.to_string(),
            preferredquality: quality.to_string(),
        }
    }
}

/// Options for a single yt-dlp run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOptions {
    /// Format selector, e.g. `bestvideo+bestaudio/best`.
    pub format: String,
    /// Container used when merging separate video and audio streams.
    pub merge_output_format: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postprocessors: Vec<PostProcessor>,
    /// Output filename template; set from the download request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outtmpl: Option<String>,
}

impl DownloadOptions {
    pub fn with_outtmpl(mut self, outtmpl: impl Into<String>) -> Self {
        self.outtmpl = Some(outtmpl.into());
        self
    }

    pub fn extracts_audio(&self) -> bool {
        self.postprocessors.iter().any(|pp| pp.key == EXTRACT_AUDIO_KEY)
    }

    /// Render the mapping as `yt-dlp` command-line arguments.
    ///
    /// The executable only accepts video containers for
    /// `--merge-output-format`, so the flag is left out when audio is
    /// extracted; `--audio-format` names the output instead. Post-processors
    /// other than audio extraction have no flag equivalent and are skipped
    /// with a warning.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-f".to_string(), self.format.clone()];
        if !self.extracts_audio() {
            args.push("--merge-output-format".to_string());
            args.push(self.merge_output_format.clone());
        }

        for pp in &self.postprocessors {
            if pp.key == EXTRACT_AUDIO_KEY {
                args.push("-x".to_string());
                args.push("--audio-format".to_string());
                args.push(pp.preferredcodec.clone());
                args.push("--audio-quality".to_string());
                args.push(format!("{}K", pp.preferredquality));
            } else {
                tracing::warn!(key = %pp.key, "unsupported post-processor skipped");
            }
        }

        if let Some(ref tmpl) = self.outtmpl {
            args.push("-o".to_string());
            args.push(tmpl.clone());
        }

        args
    }
}
