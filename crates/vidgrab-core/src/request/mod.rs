//! Download request: the URL, destination directory, and optional custom name.
//!
//! Validation only checks that the URL is non-empty and the destination is an
//! existing directory. Everything else is left to yt-dlp.

mod sanitize;

pub use sanitize::{escape_template, sanitize_filename};

use std::path::{Path, PathBuf};

/// Template yt-dlp expands to the video title and real extension.
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Suffix appended to custom names; yt-dlp fills in the extension.
const EXT_SUFFIX: &str = ".%(ext)s";

/// Bytes kept free for the extension yt-dlp appends to a custom name.
const EXT_RESERVE: usize = 16;

/// Why a request was rejected before anything was started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Please enter a valid URL.")]
    EmptyUrl,
    #[error("Please select a valid save location.")]
    InvalidSaveDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub save_dir: PathBuf,
    pub custom_filename: Option<String>,
}

impl DownloadRequest {
    /// Build a request from raw form/CLI input. Surrounding whitespace is
    /// trimmed and an empty custom name counts as no custom name.
    pub fn new(url: &str, save_dir: impl AsRef<Path>, custom_filename: Option<&str>) -> Self {
        let save_dir = save_dir.as_ref();
        let save_dir = match save_dir.to_str() {
            Some(s) => PathBuf::from(s.trim()),
            None => save_dir.to_path_buf(),
        };
        Self {
            url: url.trim().to_string(),
            save_dir,
            custom_filename: custom_filename
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.url.is_empty() {
            return Err(RequestError::EmptyUrl);
        }
        if self.save_dir.as_os_str().is_empty() || !self.save_dir.is_dir() {
            return Err(RequestError::InvalidSaveDir);
        }
        Ok(())
    }

    /// The yt-dlp output template for this request.
    ///
    /// `<save_dir>/%(title)s.%(ext)s` by default, `<save_dir>/<name>.%(ext)s`
    /// with a custom name. Literal `%` in the directory or name is escaped.
    pub fn output_template(&self) -> String {
        let file_part = self
            .custom_filename
            .as_deref()
            .map(|name| sanitize_filename(name, EXT_RESERVE))
            .filter(|name| !name.is_empty())
            .map(|name| format!("{}{}", escape_template(&name), EXT_SUFFIX))
            .unwrap_or_else(|| TITLE_TEMPLATE.to_string());

        let dir = escape_template(&self.save_dir.to_string_lossy());
        Path::new(&dir).join(file_part).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_input() {
        let req = DownloadRequest::new("  https://youtu.be/abc \n", " /tmp ", Some("  "));
        assert_eq!(req.url, "https://youtu.be/abc");
        assert_eq!(req.save_dir, PathBuf::from("/tmp"));
        assert!(req.custom_filename.is_none());
    }

    #[test]
    fn empty_url_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let req = DownloadRequest::new("   ", dir.path(), None);
        assert_eq!(req.validate(), Err(RequestError::EmptyUrl));
        assert_eq!(
            RequestError::EmptyUrl.to_string(),
            "Please enter a valid URL."
        );
    }

    #[test]
    fn url_checked_before_dir() {
        let req = DownloadRequest::new("", "", None);
        assert_eq!(req.validate(), Err(RequestError::EmptyUrl));
    }

    #[test]
    fn missing_or_empty_dir_rejected() {
        let req = DownloadRequest::new("https://x", "", None);
        assert_eq!(req.validate(), Err(RequestError::InvalidSaveDir));
        let req = DownloadRequest::new("https://x", "/definitely/not/here", None);
        assert_eq!(req.validate(), Err(RequestError::InvalidSaveDir));
    }

    #[test]
    fn file_is_not_a_save_dir() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let req = DownloadRequest::new("https://x", f.path(), None);
        assert_eq!(req.validate(), Err(RequestError::InvalidSaveDir));
    }

    #[test]
    fn valid_request() {
        let dir = tempfile::tempdir().unwrap();
        let req = DownloadRequest::new("https://x", dir.path(), None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn title_template_without_custom_name() {
        let req = DownloadRequest::new("https://x", "/home/me/Downloads", None);
        assert_eq!(
            req.output_template(),
            "/home/me/Downloads/%(title)s.%(ext)s"
        );
    }

    #[test]
    fn custom_name_template() {
        let req = DownloadRequest::new("https://x", "/home/me/Downloads", Some("talk"));
        assert_eq!(req.output_template(), "/home/me/Downloads/talk.%(ext)s");
    }

    #[test]
    fn custom_name_is_sanitized_and_escaped() {
        let req = DownloadRequest::new("https://x", "/d", Some("50% off/sale"));
        assert_eq!(req.output_template(), "/d/50%% off_sale.%(ext)s");
    }

    #[test]
    fn unusable_custom_name_falls_back_to_title() {
        let req = DownloadRequest::new("https://x", "/d", Some(".."));
        assert_eq!(req.output_template(), "/d/%(title)s.%(ext)s");
    }

    #[test]
    fn percent_in_dir_is_escaped() {
        let req = DownloadRequest::new("https://x", "/d/100%", None);
        assert_eq!(req.output_template(), "/d/100%%/%(title)s.%(ext)s");
    }
}
