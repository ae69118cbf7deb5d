use thiserror::Error;

/// Errors raised while reading the operator's menu selection.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("{}", crate::constants::messages::INVALID_CHOICE)]
    InvalidChoice(String),
}

/// Errors raised while running a step script.
#[derive(Error, Debug)]
pub enum StepError {
    #[error("Failed to start {script}: {reason}")]
    SpawnError { script: String, reason: String },
    #[error("{script} exited with status {}", describe_code(.code))]
    ScriptFailed { script: String, code: Option<i32> },
}

impl StepError {
    /// Exit status the tool should terminate with after this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::ScriptFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => crate::constants::exit::FAILURE,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

/// Errors raised while locating the repository root.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Failed to run git: {0}")]
    GitUnavailable(String),
    #[error("Not inside a git working tree: {0}")]
    NotARepository(String),
    #[error("Failed to enter repository root {path}: {reason}")]
    EnterFailed { path: String, reason: String },
}

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(String),
    #[error("Failed to parse settings file: {0}")]
    ParseError(String),
}
