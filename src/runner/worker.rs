//! Background worker that runs the engine off the UI thread

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use super::invoke::run_engine;
use super::request::{AnalysisRequest, StatusMessage};
use crate::error::{Error, Result};

/// Spawn a worker for one run. It sends exactly one final status message.
pub fn spawn_analysis(
    engine: PathBuf,
    request: AnalysisRequest,
) -> Result<Receiver<StatusMessage>> {
    let (tx, rx) = channel();

    thread::Builder::new()
        .name("analysis-worker".to_string())
        .spawn(move || {
            let status = run_engine(&engine, &request);
            // UI may already be gone
            let _ = tx.send(status);
        })
        .map_err(Error::Spawn)?;

    Ok(rx)
}
