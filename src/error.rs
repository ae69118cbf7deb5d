//! Error formatting utilities.
//!
//! This module provides helpers for turning an error chain into a
//! human-readable message and into the process exit status.

use anyhow::Error;

use crate::constants;
use crate::errors::{MenuError, StepError};

/// Format an error and its source chain into a detailed error message.
///
/// This function extracts the full error chain from an `anyhow::Error`,
/// joining all error messages with " → " to provide comprehensive error context.
///
/// # Example
///
/// ```
/// use repo_bootstrap::error::format_error_chain;
///
/// let err = anyhow::anyhow!("exit status 3")
///     .context("scripts/2-bootstrap_tf_aws.sh failed")
///     .context("Run all steps aborted");
/// let formatted = format_error_chain(&err);
/// assert_eq!(
///     formatted,
///     "Run all steps aborted → scripts/2-bootstrap_tf_aws.sh failed → exit status 3"
/// );
/// ```
pub fn format_error_chain(error: &Error) -> String {
    let mut error_chain = vec![format!("{}", error)];
    let mut current = error.source();
    while let Some(err) = current {
        error_chain.push(format!("{}", err));
        current = err.source();
    }
    error_chain.join(" → ")
}

/// Map an error to the status the process should exit with.
///
/// A failed step script propagates its own exit code, an invalid menu
/// selection exits with 2, anything else with 1.
pub fn exit_code(error: &Error) -> i32 {
    for cause in error.chain() {
        if let Some(step) = cause.downcast_ref::<StepError>() {
            return step.exit_code();
        }
        if cause.downcast_ref::<MenuError>().is_some() {
            return constants::exit::INVALID_CHOICE;
        }
    }
    constants::exit::FAILURE
}
