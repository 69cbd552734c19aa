//! Background download thread.
//!
//! One named OS thread per download runs the extractor to completion and
//! reports over a channel. The worker never touches UI state: the form polls
//! [`DownloadHandle::try_recv`] each frame, the CLI blocks on
//! [`DownloadHandle::wait`]. There is no cancellation, queueing, or timeout.

use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver, TryRecvError};

use crate::options::DownloadOptions;
use crate::request::DownloadRequest;
use crate::ytdlp::Extractor;

/// Progress of one download as seen by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
    Started { url: String },
    Finished { output_template: String },
    Failed { message: String },
}

impl DownloadEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DownloadEvent::Started { .. })
    }
}

/// Receiving end of a running download.
pub struct DownloadHandle {
    events: Receiver<DownloadEvent>,
    thread: Option<thread::JoinHandle<()>>,
}

impl DownloadHandle {
    /// Next event if one is ready. A worker that died without reporting
    /// (panic inside the extractor) yields a synthetic `Failed`.
    pub fn try_recv(&mut self) -> Option<DownloadEvent> {
        match self.events.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.thread.take().map(|t| {
                let _ = t.join();
                DownloadEvent::Failed {
                    message: "download thread exited unexpectedly".to_string(),
                }
            }),
        }
    }

    /// Block until the download finishes; returns the terminal event.
    pub fn wait(mut self) -> DownloadEvent {
        while let Ok(ev) = self.events.recv() {
            if ev.is_terminal() {
                if let Some(t) = self.thread.take() {
                    let _ = t.join();
                }
                return ev;
            }
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
        DownloadEvent::Failed {
            message: "download thread exited unexpectedly".to_string(),
        }
    }
}

/// Start `request` on a background thread. The request's output template is
/// written into `options` before the extractor runs.
pub fn spawn_download<E>(
    extractor: Arc<E>,
    request: DownloadRequest,
    options: DownloadOptions,
) -> Result<DownloadHandle>
where
    E: Extractor + ?Sized + 'static,
{
    let (tx, rx) = channel::unbounded();
    let output_template = request.output_template();
    let options = options.with_outtmpl(output_template.clone());

    let thread = thread::Builder::new()
        .name("vidgrab-download".to_string())
        .spawn(move || {
            let url = request.url;
            tracing::info!(%url, %output_template, "download started");
            let _ = tx.send(DownloadEvent::Started { url: url.clone() });

            let event = match extractor.download(&url, &options) {
                Ok(()) => {
                    tracing::info!(%url, "download completed");
                    DownloadEvent::Finished { output_template }
                }
                Err(e) => {
                    tracing::error!(%url, error = %e, "download failed");
                    DownloadEvent::Failed {
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(event);
        })
        .context("spawn download thread")?;

    Ok(DownloadHandle {
        events: rx,
        thread: Some(thread),
    })
}
