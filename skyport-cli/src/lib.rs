pub mod command;
pub mod error;

pub use command::{Command, CommandReport};
pub use error::ScriptError;

use skyport_store::BookingStore;
use std::io::{BufRead, Write};

/// Replay a JSON-lines command script, writing one JSON report per command.
///
/// Blank lines and `#` comments are skipped. Returns the number of commands run.
pub fn run_script<R: BufRead, W: Write>(
    store: &mut BookingStore,
    input: R,
    mut output: W,
) -> Result<usize, ScriptError> {
    let mut executed = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command: Command = serde_json::from_str(trimmed).map_err(|source| ScriptError::Malformed {
            line: index + 1,
            source,
        })?;

        let report = command.execute(store);
        tracing::debug!(line = index + 1, op = report.op, "Command executed");

        serde_json::to_writer(&mut output, &report).map_err(|e| ScriptError::Write(e.into()))?;
        writeln!(output).map_err(ScriptError::Write)?;
        executed += 1;
    }

    Ok(executed)
}
