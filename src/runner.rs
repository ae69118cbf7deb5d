//! Child process execution for step scripts.
//!
//! Scripts run in the foreground: stdio is inherited so their own output and
//! prompts reach the operator directly, and the call blocks until the child
//! exits. A step succeeds only if the child exits with status 0.

use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

use crate::errors::StepError;
use crate::steps::Invocation;

/// Run one step script and wait for it to finish.
///
/// # Errors
///
/// Returns [`StepError::SpawnError`] if the interpreter cannot be started and
/// [`StepError::ScriptFailed`] if the script exits with a non-zero status.
pub fn run_invocation(invocation: &Invocation) -> Result<(), StepError> {
    let script = invocation.script.display().to_string();

    // Values are never logged, only the names handed to the child.
    debug!(
        program = %invocation.program,
        script = %script,
        cwd = %invocation.working_dir.display(),
        env = ?invocation.env_keys(),
        "spawning step script"
    );

    let status = Command::new(&invocation.program)
        .arg(&invocation.script)
        .current_dir(&invocation.working_dir)
        .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .status()
        .map_err(|e| StepError::SpawnError {
            script: script.clone(),
            reason: e.to_string(),
        })?;

    check_status(&script, status)
}

fn check_status(script: &str, status: ExitStatus) -> Result<(), StepError> {
    if status.success() {
        info!(script, "step script finished");
        Ok(())
    } else {
        warn!(script, code = ?status.code(), "step script failed");
        Err(StepError::ScriptFailed {
            script: script.to_string(),
            code: status.code(),
        })
    }
}
