//! Form state behind the main window
//!
//! Holds the two path fields and the status line, starts runs and collects
//! the worker's message. The UI reads and writes the fields directly.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::error::Result;
use crate::runner::{spawn_analysis, AnalysisRequest, EngineLocator, StatusMessage};

#[derive(Default)]
pub struct AnalysisSession {
    pub input_path: String,
    pub output_path: String,
    status: Option<StatusMessage>,
    status_rx: Option<Receiver<StatusMessage>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_text(&self) -> String {
        self.status.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_running(&self) -> bool {
        self.status_rx.is_some()
    }

    /// Validate the form, find the engine and start a run.
    ///
    /// On error nothing changes; the caller reports it to the user.
    pub fn submit(&mut self, engine: &EngineLocator) -> Result<()> {
        let request = AnalysisRequest::from_fields(&self.input_path, &self.output_path)?;
        let engine_path = engine.resolve()?;

        let rx = spawn_analysis(engine_path, request)?;
        self.status = Some(StatusMessage::Running);
        self.status_rx = Some(rx);
        Ok(())
    }

    /// Drain pending worker messages without blocking.
    /// Returns true if the status line changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.status_rx else {
            return false;
        };

        let mut changed = false;
        loop {
            match rx.try_recv() {
                Ok(status) => {
                    let done = status.is_final();
                    self.status = Some(status);
                    changed = true;
                    if done {
                        self.status_rx = None;
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Analysis worker exited without reporting");
                    self.status = Some(StatusMessage::Exception {
                        reason: "analysis worker stopped unexpectedly".to_string(),
                    });
                    self.status_rx = None;
                    changed = true;
                    break;
                }
            }
        }
        changed
    }
}
