use std::io::{self, BufRead, Write};

use thiserror::Error;
use wordfreq_core::{update, Effect, Msg, SessionState};
use wordfreq_logging::{wf_debug, wf_info};

use crate::render::render_effect;
use crate::SessionText;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Counters for one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub reports: usize,
}

/// Line-oriented read-eval-print loop over any reader and writer.
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: SessionText,
}

impl Session {
    pub fn new(text: SessionText) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &SessionText {
        &self.text
    }

    /// Runs until `input` is exhausted.
    ///
    /// A clean end of stream returns the summary; a failing reader ends the
    /// session with `SessionError::Read`. Bytes that are not valid UTF-8 are
    /// not a failure.
    pub fn run<R, W>(&self, mut input: R, mut out: W) -> Result<SessionSummary, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        let (mut state, effects) = SessionState::start();
        self.apply(&mut out, &effects, &mut summary)?;
        wf_info!("session started");

        let mut buf = Vec::new();
        while !state.is_terminated() {
            buf.clear();
            let msg = match input.read_until(b'\n', &mut buf) {
                Ok(0) => Msg::EndOfStream,
                Ok(_) => {
                    summary.lines_read += 1;
                    // Invalid UTF-8 becomes U+FFFD, which only ever separates words.
                    let line = String::from_utf8_lossy(&buf);
                    Msg::LineRead(strip_line_ending(&line).to_string())
                }
                Err(err) => {
                    wf_debug!("reading input failed: {}", err);
                    let (_terminated, effects) = update(state, Msg::ReadFailed);
                    self.apply(&mut out, &effects, &mut summary)?;
                    return Err(SessionError::Read(err));
                }
            };

            let (next, effects) = update(state, msg);
            self.apply(&mut out, &effects, &mut summary)?;
            state = next;
        }

        wf_info!(
            "session ended: {} lines, {} reports",
            summary.lines_read,
            summary.reports
        );
        Ok(summary)
    }

    fn apply<W: Write>(
        &self,
        out: &mut W,
        effects: &[Effect],
        summary: &mut SessionSummary,
    ) -> Result<(), SessionError> {
        for effect in effects {
            match effect {
                Effect::EmptyInputNotice => summary.blank_lines += 1,
                Effect::Report(entries) => {
                    summary.reports += 1;
                    wf_debug!("report with {} entries", entries.len());
                }
                Effect::Banner | Effect::Prompt => {}
            }
            render_effect(out, &self.text, effect).map_err(SessionError::Write)?;
        }
        Ok(())
    }
}

/// Drops one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
