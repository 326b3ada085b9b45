//! Running the analysis executable

use std::path::Path;
use std::process::Command;

use super::request::{AnalysisRequest, StatusMessage};

/// Keeps a console engine from opening its own window under the GUI.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// `engine <input> <output>`, without a console window on Windows.
fn engine_command(engine: &Path, request: &AnalysisRequest) -> Command {
    let mut command = Command::new(engine);
    command.arg(&request.input).arg(&request.output);
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }
    command
}

/// Run the engine once as `engine <input> <output>` and wait for it.
///
/// Exit code 0 is success; any other exit reports the engine's stderr
/// verbatim. Failure to launch or wait on the process is an exception.
pub fn run_engine(engine: &Path, request: &AnalysisRequest) -> StatusMessage {
    log::info!(
        "Running {} {} {}",
        engine.display(),
        request.input.display(),
        request.output.display()
    );

    let output = match engine_command(engine, request).output() {
        Ok(output) => output,
        Err(e) => {
            log::error!("Failed to run {}: {}", engine.display(), e);
            return StatusMessage::Exception {
                reason: e.to_string(),
            };
        }
    };

    if !output.stdout.is_empty() {
        log::debug!("engine stdout: {}", String::from_utf8_lossy(&output.stdout));
    }

    if output.status.success() {
        log::info!("Analysis finished: {}", request.output.display());
        StatusMessage::Completed {
            output: request.output.clone(),
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::warn!("Engine exited with {}: {}", output.status, stderr.trim_end());
        StatusMessage::Failed { stderr }
    }
}
