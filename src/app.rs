//! The menu loop: resolve variables once, then dispatch selections until the
//! operator exits or something fails.

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::app_deps::{
    Console, GitWorkspaceRoot, RealConsole, RealStepRunner, StepRunner, WorkspaceRoot,
};
use crate::cli::Cli;
use crate::config::{Settings, SettingsFile};
use crate::constants::messages;
use crate::menu::{self, MenuChoice};
use crate::paths;
use crate::steps::Step;
use crate::variables::{self, VariableSet};

/// What the loop does after handling a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App;

impl App {
    /// Run against the real terminal, git and scripts.
    pub fn run(cli: &Cli) -> Result<()> {
        let settings = Self::load_settings(cli)?;
        debug!(?settings, "effective settings");
        Self::run_with_deps(
            &RealConsole,
            &RealStepRunner,
            &GitWorkspaceRoot,
            &settings,
            &mut io::stdout(),
        )
    }

    /// Merge the settings file (if one is found) with command-line overrides.
    pub fn load_settings(cli: &Cli) -> Result<Settings> {
        let file = match paths::find_settings_file(cli.config.as_deref()) {
            Some(path) => Some(SettingsFile::from_file(&path)?),
            None => None,
        };
        Ok(Settings::resolve(file, &cli.overrides()))
    }

    /// Resolve the variable set, print it, and enter the menu loop.
    pub fn run_with_deps<W: Write>(
        console: &dyn Console,
        runner: &dyn StepRunner,
        workspace: &dyn WorkspaceRoot,
        settings: &Settings,
        out: &mut W,
    ) -> Result<()> {
        let variables = variables::resolve(&settings.definitions_file, console, out)?;
        variables::print_variables(out, &variables, &settings.mask)?;
        Self::menu_loop(console, runner, workspace, settings, &variables, out)
    }

    /// Show the menu until "Exit" is chosen.
    ///
    /// Invalid input, a missing repository root and failed scripts all end
    /// the loop with an error.
    pub fn menu_loop<W: Write>(
        console: &dyn Console,
        runner: &dyn StepRunner,
        workspace: &dyn WorkspaceRoot,
        settings: &Settings,
        variables: &VariableSet,
        out: &mut W,
    ) -> Result<()> {
        loop {
            console.clear_screen()?;
            let root = workspace
                .enter()
                .context("Cannot locate the repository root")?;
            menu::render_menu(out)?;

            let line = console.read_choice(messages::MENU_PROMPT)?;
            let choice = menu::parse_choice(&line)?;
            writeln!(out, "{} . . . working on it!", choice.label())?;

            let flow = Self::dispatch(choice, console, runner, settings, variables, &root, out)?;
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Carry out one menu selection.
    pub fn dispatch<W: Write>(
        choice: MenuChoice,
        console: &dyn Console,
        runner: &dyn StepRunner,
        settings: &Settings,
        variables: &VariableSet,
        root: &Path,
        out: &mut W,
    ) -> Result<Flow> {
        match choice {
            MenuChoice::Run(step) => {
                Self::run_step(step, console, runner, settings, variables, root, out)?;
            }
            MenuChoice::RunAll => {
                writeln!(
                    out,
                    "{}",
                    "####### Performing all steps 1 to 5 #######".green()
                )?;
                for step in Step::SEQUENCE {
                    Self::run_step(step, console, runner, settings, variables, root, out)
                        .context("Run all steps aborted")?;
                }
                writeln!(
                    out,
                    "{}",
                    "####### DONE!!! . . . your repo is all set! #######".green()
                )?;
                out.flush()?;
                console.acknowledge(messages::RUN_ALL_ACK)?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                out.flush()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Print the banner, get acknowledgment if the step needs it, and run the script.
    pub fn run_step<W: Write>(
        step: Step,
        console: &dyn Console,
        runner: &dyn StepRunner,
        settings: &Settings,
        variables: &VariableSet,
        root: &Path,
        out: &mut W,
    ) -> Result<()> {
        let banner = step.banner(variables);
        if step.is_destructive() {
            writeln!(out, "{}", banner.yellow())?;
        } else {
            writeln!(out, "{}", banner.blue())?;
        }
        out.flush()?;

        if let Some(message) = step.acknowledgment() {
            console.acknowledge(message)?;
        }

        let invocation = step.invocation(root, &settings.shell, variables);
        info!(step = step.number(), script = step.script(), "running step");
        runner
            .run(&invocation)
            .with_context(|| format!("Step {} ({}) failed", step.number(), step.label()))
    }
}
