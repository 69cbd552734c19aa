//! The download form: state, event handling, and layout.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use vidgrab_core::config::VidgrabConfig;
use vidgrab_core::{
    spawn_download, DownloadEvent, DownloadHandle, DownloadRequest, Extractor, OutputFormat,
    Quality,
};

pub const WINDOW_TITLE: &str = "YouTube Video Downloader (yt-dlp)";
pub const WINDOW_SIZE: [f32; 2] = [600.0, 380.0];

const STATUS_READY: &str = "Ready to download";
const STATUS_PREPARING: &str = "📥 Preparing to download...";
const STATUS_DONE: &str = "✅ Download completed!";
const STATUS_FAILED: &str = "❌ Error during download.";

/// How often the form polls the worker while a download runs.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the form wants shown in a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// Everything the form shows or edits, independent of rendering.
pub struct FormState {
    pub url: String,
    pub save_path: String,
    pub use_custom_filename: bool,
    pub custom_filename: String,
    pub format: OutputFormat,
    pub quality: Quality,
    pub status: String,
    download: Option<DownloadHandle>,
    extractor: Arc<dyn Extractor>,
    config: VidgrabConfig,
}

impl FormState {
    pub fn new(config: VidgrabConfig, extractor: Arc<dyn Extractor>) -> Self {
        Self {
            url: String::new(),
            save_path: config.effective_save_dir().display().to_string(),
            use_custom_filename: false,
            custom_filename: String::new(),
            format: config.default_format,
            quality: config.default_quality,
            status: STATUS_READY.to_string(),
            download: None,
            extractor,
            config,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.download.is_some()
    }

    /// Validate the inputs and hand the download to a worker thread.
    /// Returns a warning to show when nothing was started.
    pub fn start_download(&mut self) -> Option<Notice> {
        if self.is_busy() {
            return None;
        }

        let custom = self
            .use_custom_filename
            .then_some(self.custom_filename.as_str());
        let request = DownloadRequest::new(&self.url, &self.save_path, custom);
        if let Err(e) = request.validate() {
            tracing::debug!(error = %e, "download request rejected");
            return Some(Notice::Warning(e.to_string()));
        }

        let options = self.config.options(self.format, self.quality);
        match spawn_download(Arc::clone(&self.extractor), request, options) {
            Ok(handle) => {
                self.status = STATUS_PREPARING.to_string();
                self.download = Some(handle);
                None
            }
            Err(e) => {
                tracing::error!("could not start download: {e:#}");
                self.status = STATUS_FAILED.to_string();
                Some(Notice::Error(format!("{e:#}")))
            }
        }
    }

    /// Drain worker events. Returns an error to show if the download failed.
    pub fn poll(&mut self) -> Option<Notice> {
        let mut notice = None;
        while let Some(handle) = self.download.as_mut() {
            let Some(event) = handle.try_recv() else {
                break;
            };
            match event {
                DownloadEvent::Started { url } => {
                    tracing::debug!(%url, "worker picked up download");
                }
                DownloadEvent::Finished { .. } => {
                    self.status = STATUS_DONE.to_string();
                    self.download = None;
                }
                DownloadEvent::Failed { message } => {
                    self.status = STATUS_FAILED.to_string();
                    self.download = None;
                    notice = Some(Notice::Error(message));
                }
            }
        }
        notice
    }

    pub fn set_save_path(&mut self, path: PathBuf) {
        self.save_path = path.display().to_string();
    }
}

pub struct VidgrabApp {
    form: FormState,
}

impl VidgrabApp {
    pub fn new(config: VidgrabConfig) -> Self {
        let extractor: Arc<dyn Extractor> = Arc::new(config.extractor());
        Self {
            form: FormState::new(config, extractor),
        }
    }

    fn browse_location(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        let current = PathBuf::from(self.form.save_path.trim());
        if current.is_dir() {
            dialog = dialog.set_directory(&current);
        }
        if let Some(folder) = dialog.pick_folder() {
            self.form.set_save_path(folder);
        }
    }

    fn show_notice(notice: Notice) {
        let (level, title, text) = match notice {
            Notice::Warning(t) => (rfd::MessageLevel::Warning, "Warning", t),
            Notice::Error(t) => (rfd::MessageLevel::Error, "Error", t),
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(text)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) -> Option<Notice> {
        let mut notice = None;
        let busy = self.form.is_busy();

        ui.label("Enter YouTube video URL:");
        ui.add(
            egui::TextEdit::singleline(&mut self.form.url)
                .desired_width(f32::INFINITY)
                .margin(egui::vec2(6.0, 5.0)),
        );
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Save location:");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Browse...").clicked() {
                    self.browse_location();
                }
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.save_path)
                        .desired_width(f32::INFINITY),
                );
            });
        });
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.form.use_custom_filename, "Use custom filename");
            ui.add_enabled(
                self.form.use_custom_filename,
                egui::TextEdit::singleline(&mut self.form.custom_filename)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Format:");
            egui::ComboBox::from_id_salt("format")
                .selected_text(self.form.format.label())
                .width(130.0)
                .show_ui(ui, |ui| {
                    for f in OutputFormat::ALL {
                        ui.selectable_value(&mut self.form.format, f, f.label());
                    }
                });
            ui.add_space(15.0);
            ui.label("Quality:");
            egui::ComboBox::from_id_salt("quality")
                .selected_text(self.form.quality.label())
                .width(130.0)
                .show_ui(ui, |ui| {
                    for q in Quality::ALL {
                        ui.selectable_value(&mut self.form.quality, q, q.label());
                    }
                });
        });
        ui.add_space(15.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new("🎬 Download Video");
            if ui.add_enabled(!busy, button).clicked() {
                notice = self.form.start_download();
            }
            ui.add_space(15.0);
            ui.label(&self.form.status);
            ui.add_space(10.0);
        });

        // Indeterminate bar: a sweep while busy, empty otherwise.
        let fraction = if busy {
            let t = ui.input(|i| i.time);
            (t * 0.75).fract() as f32
        } else {
            0.0
        };
        ui.add(egui::ProgressBar::new(fraction).desired_height(8.0));

        notice
    }
}

impl eframe::App for VidgrabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut notice = self.form.poll();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(20.0))
            .show(ctx, |ui| {
                if let Some(n) = self.ui_form(ui) {
                    notice = Some(n);
                }
            });

        if self.form.is_busy() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
        if let Some(n) = notice {
            Self::show_notice(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidgrab_core::{DownloadError, DownloadOptions};

    struct Canned(Result<(), String>);

    impl Extractor for Canned {
        fn download(&self, _: &str, _: &DownloadOptions) -> Result<(), DownloadError> {
            self.0.clone().map_err(|message| DownloadError::Failed {
                code: Some(1),
                message,
            })
        }
    }

    fn form(result: Result<(), String>, save_path: &std::path::Path) -> FormState {
        let mut f = FormState::new(VidgrabConfig::default(), Arc::new(Canned(result)));
        f.set_save_path(save_path.to_path_buf());
        f
    }

    fn poll_until_idle(f: &mut FormState) -> Option<Notice> {
        for _ in 0..500 {
            let n = f.poll();
            if !f.is_busy() {
                return n;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("download never finished");
    }

    #[test]
    fn initial_state() {
        let f = FormState::new(VidgrabConfig::default(), Arc::new(Canned(Ok(()))));
        assert_eq!(f.status, "Ready to download");
        assert_eq!(f.format, OutputFormat::Mp4);
        assert_eq!(f.quality, Quality::Best);
        assert!(f.save_path.ends_with("Downloads"));
        assert!(!f.use_custom_filename);
        assert!(!f.is_busy());
    }

    #[test]
    fn empty_url_warns_and_starts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = form(Ok(()), dir.path());
        f.url = "   ".to_string();
        assert_eq!(
            f.start_download(),
            Some(Notice::Warning("Please enter a valid URL.".to_string()))
        );
        assert!(!f.is_busy());
        assert_eq!(f.status, "Ready to download");
    }

    #[test]
    fn bad_dir_warns() {
        let mut f = form(Ok(()), std::path::Path::new("/no/such/dir/here"));
        f.url = "https://youtu.be/x".to_string();
        assert_eq!(
            f.start_download(),
            Some(Notice::Warning(
                "Please select a valid save location.".to_string()
            ))
        );
    }

    #[test]
    fn successful_download_updates_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = form(Ok(()), dir.path());
        f.url = "https://youtu.be/x".to_string();
        assert_eq!(f.start_download(), None);
        assert!(f.is_busy());
        assert_eq!(f.status, "📥 Preparing to download...");
        assert_eq!(f.start_download(), None, "second click while busy is ignored");

        assert_eq!(poll_until_idle(&mut f), None);
        assert_eq!(f.status, "✅ Download completed!");
    }

    #[test]
    fn failed_download_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = form(Err("ERROR: Private video".to_string()), dir.path());
        f.url = "https://youtu.be/x".to_string();
        f.use_custom_filename = true;
        f.custom_filename = "mine".to_string();
        assert_eq!(f.start_download(), None);

        assert_eq!(
            poll_until_idle(&mut f),
            Some(Notice::Error("ERROR: Private video".to_string()))
        );
        assert_eq!(f.status, "❌ Error during download.");
    }
}
