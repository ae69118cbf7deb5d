//! Line-based terminal interaction.
//!
//! Every prompt has a `*_with` variant taking an explicit reader and writer
//! so tests can drive it without a terminal.
use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

/// Print `question`, read one line, and return it without its line terminator.
///
/// The text is otherwise returned verbatim: no trimming or validation.
/// Reaching end of input is an error, since there is nothing left to answer with.
pub fn ask_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("Input closed while waiting for an answer");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prompt on the real terminal.
pub fn ask(question: &str) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask_with(&mut input, &mut io::stdout(), question)
}

/// Show `message` and block until the operator presses Enter.
pub fn wait_for_enter_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> anyhow::Result<()> {
    ask_with(input, output, &message.yellow().to_string())?;
    Ok(())
}

pub fn wait_for_enter(message: &str) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    wait_for_enter_with(&mut input, &mut io::stdout(), message)
}

/// Read one raw line for the menu selection.
///
/// End of input yields an empty line, which the menu rejects.
pub fn read_choice_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> anyhow::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

pub fn read_choice(question: &str) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    read_choice_with(&mut input, &mut io::stdout(), question)
}

/// Clear the whole screen and move the cursor home.
pub fn clear_screen() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
