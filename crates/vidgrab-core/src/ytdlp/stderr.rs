//! Picking a user-facing message out of yt-dlp's stderr.

use std::collections::VecDeque;

/// Number of trailing stderr lines kept for error reporting.
pub(crate) const TAIL_LINES: usize = 64;

/// Bounded tail of stderr lines.
#[derive(Debug, Default)]
pub(crate) struct StderrTail {
    lines: VecDeque<String>,
}

impl StderrTail {
    pub(crate) fn push(&mut self, line: String) {
        if self.lines.len() == TAIL_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Message for a failed run: the last `ERROR:` line, else the last
    /// non-empty line, else a generic note with the exit status.
    pub(crate) fn failure_message(&self, code: Option<i32>) -> String {
        let last_error = self
            .lines
            .iter()
            .rev()
            .map(|l| l.trim())
            .find(|l| l.starts_with("ERROR:"));
        let last_line = || self.lines.iter().rev().map(|l| l.trim()).find(|l| !l.is_empty());

        match last_error.or_else(last_line) {
            Some(line) => line.to_string(),
            None => match code {
                Some(c) => format!("yt-dlp exited with status {c}"),
                None => "yt-dlp was terminated by a signal".to_string(),
            },
        }
    }
}
