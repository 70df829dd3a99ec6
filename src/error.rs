use std::io;

use thiserror::Error;

/// Fatal errors that abort the process with a non-zero exit code.
///
/// Game-end conditions (crashes, a full board) are ordinary values handled
/// by the controller and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode or the alternate screen could not be entered.
    #[error("failed to initialize the terminal: {0}")]
    TerminalSetup(#[source] io::Error),

    /// Terminal I/O failed after startup.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
