//! Output format / quality selections and their mapping to yt-dlp options.
//!
//! The two dropdowns of the form resolve to a static [`DownloadOptions`]
//! mapping. Audio-only (either selection) takes precedence over quality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::options::{DownloadOptions, PostProcessor};

/// Bitrate (kbps) handed to the audio extraction post-processor by default.
pub const DEFAULT_AUDIO_QUALITY: &str = "192";

/// Format selector used for every audio-only download.
const AUDIO_FORMAT: &str = "bestaudio/best";

/// Container name used for audio-only downloads.
const AUDIO_CODEC: &str = "mp3";

/// Returned when a label does not name any format or quality.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} '{label}'")]
pub struct FormatParseError {
    what: &'static str,
    label: String,
}

/// Output container selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mp4,
    Mkv,
    Webm,
    /// Audio only, extracted to MP3.
    Mp3,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Mp4,
        OutputFormat::Mkv,
        OutputFormat::Webm,
        OutputFormat::Mp3,
    ];

    /// Label shown in the format dropdown.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Mkv => "mkv",
            OutputFormat::Webm => "webm",
            OutputFormat::Mp3 => "mp3 (audio only)",
        }
    }

    /// Bare container name (label without the "(audio only)" suffix).
    pub fn container(self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Mkv => "mkv",
            OutputFormat::Webm => "webm",
            OutputFormat::Mp3 => "mp3",
        }
    }

    pub fn is_audio_only(self) -> bool {
        self == OutputFormat::Mp3
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|f| needle == f.label() || needle == f.container())
            .ok_or_else(|| FormatParseError {
                what: "format",
                label: s.to_string(),
            })
    }
}

/// Video quality selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Best,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "audio")]
    AudioOnly,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Best,
        Quality::P720,
        Quality::P480,
        Quality::P360,
        Quality::AudioOnly,
    ];

    /// Label shown in the quality dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Quality::Best => "Best quality",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
            Quality::AudioOnly => "Audio only",
        }
    }

    /// Short form accepted on the command line and in config.toml.
    pub fn short_name(self) -> &'static str {
        match self {
            Quality::Best => "best",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
            Quality::AudioOnly => "audio",
        }
    }

    /// Maximum video height, or `None` for "best" and audio-only.
    pub fn max_height(self) -> Option<u32> {
        match self {
            Quality::P720 => Some(720),
            Quality::P480 => Some(480),
            Quality::P360 => Some(360),
            Quality::Best | Quality::AudioOnly => None,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Quality::ALL
            .into_iter()
            .find(|q| needle == q.label().to_ascii_lowercase() || needle == q.short_name())
            .ok_or_else(|| FormatParseError {
                what: "quality",
                label: s.to_string(),
            })
    }
}

/// Resolve the two selections into yt-dlp options, with the default audio bitrate.
pub fn get_options(format: OutputFormat, quality: Quality) -> DownloadOptions {
    get_options_with_audio_quality(format, quality, DEFAULT_AUDIO_QUALITY)
}

/// Like [`get_options`], with the audio bitrate (kbps, e.g. `"192"`) supplied by the caller.
pub fn get_options_with_audio_quality(
    format: OutputFormat,
    quality: Quality,
    audio_quality: &str,
) -> DownloadOptions {
    if format.is_audio_only() || quality == Quality::AudioOnly {
        return DownloadOptions {
            format: AUDIO_FORMAT.to_string(),
            merge_output_format: AUDIO_CODEC.to_string(),
            postprocessors: vec![PostProcessor::extract_audio(AUDIO_CODEC, audio_quality)],
            outtmpl: None,
        };
    }

    let format_selector = match quality.max_height() {
        Some(h) => format!("bestvideo[height<={h}]+bestaudio/best[height<={h}]"),
        None => "bestvideo+bestaudio/best".to_string(),
    };

    DownloadOptions {
        format: format_selector,
        merge_output_format: format.container().to_string(),
        postprocessors: Vec::new(),
        outtmpl: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_audio(opts: &DownloadOptions) {
        assert_eq!(opts.format, "bestaudio/best");
        assert_eq!(opts.merge_output_format, "mp3");
        assert_eq!(opts.postprocessors.len(), 1);
        let pp = &opts.postprocessors[0];
        assert_eq!(pp.key, "FFmpegExtractAudio");
        assert_eq!(pp.preferredcodec, "mp3");
        assert_eq!(pp.preferredquality, "192");
    }

    #[test]
    fn mp3_format_is_audio_for_every_quality() {
        for q in Quality::ALL {
            assert_audio(&get_options(OutputFormat::Mp3, q));
        }
    }

    #[test]
    fn audio_quality_overrides_video_format() {
        for f in [OutputFormat::Mp4, OutputFormat::Mkv, OutputFormat::Webm] {
            assert_audio(&get_options(f, Quality::AudioOnly));
        }
    }

    #[test]
    fn best_quality_keeps_container() {
        let opts = get_options(OutputFormat::Mkv, Quality::Best);
        assert_eq!(opts.format, "bestvideo+bestaudio/best");
        assert_eq!(opts.merge_output_format, "mkv");
        assert!(opts.postprocessors.is_empty());
    }

    #[test]
    fn height_capped_qualities() {
        let cases = [
            (Quality::P720, "bestvideo[height<=720]+bestaudio/best[height<=720]"),
            (Quality::P480, "bestvideo[height<=480]+bestaudio/best[height<=480]"),
            (Quality::P360, "bestvideo[height<=360]+bestaudio/best[height<=360]"),
        ];
        for (q, expected) in cases {
            let opts = get_options(OutputFormat::Webm, q);
            assert_eq!(opts.format, expected);
            assert_eq!(opts.merge_output_format, "webm");
            assert!(opts.postprocessors.is_empty());
        }
    }

    #[test]
    fn custom_audio_quality() {
        let opts = get_options_with_audio_quality(OutputFormat::Mp4, Quality::AudioOnly, "320");
        assert_eq!(opts.postprocessors[0].preferredquality, "320");
    }

    #[test]
    fn parse_labels_and_short_names() {
        for f in OutputFormat::ALL {
            assert_eq!(f.label().parse::<OutputFormat>().unwrap(), f);
            assert_eq!(f.container().parse::<OutputFormat>().unwrap(), f);
        }
        for q in Quality::ALL {
            assert_eq!(q.label().parse::<Quality>().unwrap(), q);
            assert_eq!(q.short_name().parse::<Quality>().unwrap(), q);
        }
        assert_eq!("MKV".parse::<OutputFormat>().unwrap(), OutputFormat::Mkv);
        assert_eq!("best QUALITY".parse::<Quality>().unwrap(), Quality::Best);
    }

    #[test]
    fn parse_unknown_label_fails() {
        let err = "avi".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unknown format 'avi'");
        assert!("1080p".parse::<Quality>().is_err());
    }
}
