use anyhow::Result;
use std::path::PathBuf;

use crate::errors::{StepError, WorkspaceError};
use crate::steps::Invocation;
use crate::{prompt, runner, workspace};

/// Terminal interaction used by the resolver and the menu loop.
pub trait Console {
    /// Ask a question and return the answer without its line terminator.
    fn ask(&self, question: &str) -> Result<String>;
    /// Block until the operator presses Enter.
    fn acknowledge(&self, message: &str) -> Result<()>;
    /// Read one raw line holding the menu selection.
    fn read_choice(&self, question: &str) -> Result<String>;
    fn clear_screen(&self) -> Result<()>;
}

pub struct RealConsole;

impl Console for RealConsole {
    fn ask(&self, question: &str) -> Result<String> {
        prompt::ask(question)
    }

    fn acknowledge(&self, message: &str) -> Result<()> {
        prompt::wait_for_enter(message)
    }

    fn read_choice(&self, question: &str) -> Result<String> {
        prompt::read_choice(question)
    }

    fn clear_screen(&self) -> Result<()> {
        prompt::clear_screen()
    }
}

/// Runs a step script to completion.
pub trait StepRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), StepError>;
}

pub struct RealStepRunner;

impl StepRunner for RealStepRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), StepError> {
        runner::run_invocation(invocation)
    }
}

/// Locates the repository root the scripts live under.
pub trait WorkspaceRoot {
    /// Resolve the root and make it the working directory.
    fn enter(&self) -> Result<PathBuf, WorkspaceError>;
}

pub struct GitWorkspaceRoot;

impl WorkspaceRoot for GitWorkspaceRoot {
    fn enter(&self) -> Result<PathBuf, WorkspaceError> {
        workspace::enter_repository_root()
    }
}
