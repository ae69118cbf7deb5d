//! The fixed menu: its entries, rendering, and parsing of a selection.

use std::io::Write;

use crate::errors::MenuError;
use crate::steps::Step;

/// One menu entry as selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Step),
    RunAll,
    Exit,
}

impl MenuChoice {
    /// Every entry in display order. Numbers are 1-based and contiguous;
    /// "All of the above" and "Exit" always come last.
    pub fn all() -> Vec<MenuChoice> {
        Step::ALL
            .iter()
            .copied()
            .map(MenuChoice::Run)
            .chain([MenuChoice::RunAll, MenuChoice::Exit])
            .collect()
    }

    pub fn number(self) -> usize {
        match self {
            MenuChoice::Run(step) => step.number(),
            MenuChoice::RunAll => Step::ALL.len() + 1,
            MenuChoice::Exit => Step::ALL.len() + 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Run(step) => step.label(),
            MenuChoice::RunAll => "All of the above",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Parse one input line into a menu choice.
///
/// Only the line terminator is stripped. The rest must be ASCII digits whose
/// value is a valid entry number; surrounding spaces, signs and empty input
/// are rejected.
pub fn parse_choice(input: &str) -> Result<MenuChoice, MenuError> {
    let line = input.trim_end_matches(['\n', '\r']);
    let invalid = || MenuError::InvalidChoice(line.to_string());

    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Leading zeros are allowed ("07"); strip them so long inputs cannot overflow.
    let significant = line.trim_start_matches('0');
    let number: usize = if significant.is_empty() {
        0
    } else {
        significant.parse().map_err(|_| invalid())?
    };

    MenuChoice::all()
        .into_iter()
        .find(|choice| choice.number() == number)
        .ok_or_else(invalid)
}

/// Render the menu as a boxed table.
pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    let entries = MenuChoice::all();
    let title = "Configuration Step";
    let width = entries
        .iter()
        .map(|e| e.label().chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len())
        + 2;
    let bar = "─".repeat(width);

    writeln!(out, "┌────┬{}┐", bar)?;
    writeln!(out, "│ #  │ {:<w$} │", title, w = width - 2)?;
    writeln!(out, "├────┼{}┤", bar)?;
    for entry in &entries {
        writeln!(
            out,
            "│ {:<2} │ {:<w$} │",
            entry.number(),
            entry.label(),
            w = width - 2
        )?;
    }
    writeln!(out, "└────┴{}┘", bar)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(parse_choice("1"), Ok(MenuChoice::Run(Step::RepoStructure)));
        assert_eq!(
            parse_choice("6\n"),
            Ok(MenuChoice::Run(Step::UndoBootstrap))
        );
        assert_eq!(parse_choice("7\r\n"), Ok(MenuChoice::RunAll));
        assert_eq!(parse_choice("8"), Ok(MenuChoice::Exit));
        assert_eq!(parse_choice("05"), Ok(MenuChoice::Run(Step::ProtectMain)));
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        for input in ["0", "9", "abc", "", "\n", " 1", "1 ", "-1", "+2", "1.0", "00"] {
            assert_eq!(
                parse_choice(input),
                Err(MenuError::InvalidChoice(
                    input.trim_end_matches(['\n', '\r']).to_string()
                )),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_huge_number() {
        assert!(parse_choice("99999999999999999999999999").is_err());
        assert_eq!(
            parse_choice("0000000000000000000000000008"),
            Ok(MenuChoice::Exit)
        );
    }

    #[test]
    fn test_entries_are_contiguous_with_run_all_and_exit_last() {
        let entries = MenuChoice::all();
        assert_eq!(entries.len(), 8);
        for (idx, entry) in entries.iter().enumerate() {
            assert_eq!(entry.number(), idx + 1);
        }
        assert_eq!(entries[6], MenuChoice::RunAll);
        assert_eq!(entries[7], MenuChoice::Exit);
    }

    #[test]
    fn test_render_menu_lists_every_entry() {
        let mut out = Vec::new();
        render_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[1].contains("Configuration Step"));
        assert!(lines[3].contains("│ 1  │ Building basic repo structure"));
        assert!(lines[10].contains("│ 8  │ Exit"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
