use std::io;

/// Failures that stop a script run. Booking failures are not among them:
/// those are reported as result lines.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Line {line}: malformed command: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read script: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to write result: {0}")]
    Write(#[source] io::Error),
}
