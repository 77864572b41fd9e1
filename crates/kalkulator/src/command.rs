//! REPL line lexer.
//!
//! A line is split on whitespace. Each token is a keyword (`history`,
//! `mode scientific`, ...), a function name (`sqrt`, `sin`, ...) or a run
//! of keypad characters such as `12.5`, `7+3=` or `×`, which expands to one
//! action per character. Unknown tokens are reported and skipped; the rest
//! of the line still runs.

use kalkulator_core::{CalcMode, Digit, Operator, Precision, ScientificFn};
use kalkulator_ui::Action;

use crate::error::AppError;

/// One thing a REPL line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Route an action to the page.
    Action(Action),
    /// Leave the REPL.
    Quit,
}

/// Result of lexing one line.
#[derive(Debug, Default)]
pub struct ParsedLine {
    /// Commands in input order.
    pub commands: Vec<Command>,
    /// Tokens that could not be understood.
    pub errors: Vec<AppError>,
}

/// Lexes one REPL line.
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    let mut parsed = ParsedLine::default();
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        match token.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => parsed.commands.push(Command::Quit),
            "mode" => match tokens.next() {
                Some(value) => match value.parse::<CalcMode>() {
                    Ok(mode) => parsed.push(Action::SetMode(mode)),
                    Err(e) => parsed.errors.push(e.into()),
                },
                None => parsed.errors.push(AppError::MissingArgument("mode".into())),
            },
            "precision" => match tokens.next() {
                Some(value) => match value.parse::<Precision>() {
                    Ok(precision) => parsed.push(Action::SetPrecision(precision)),
                    Err(e) => parsed.errors.push(e.into()),
                },
                None => parsed
                    .errors
                    .push(AppError::MissingArgument("precision".into())),
            },
            lowered => match keyword(lowered) {
                Some(action) => parsed.push(action),
                None => match token.parse::<ScientificFn>() {
                    Ok(function) => parsed.push(Action::Function(function)),
                    Err(_) => match keypad_run(token) {
                        Some(actions) => parsed.extend(actions),
                        None => parsed.errors.push(AppError::UnknownToken(token.to_owned())),
                    },
                },
            },
        }
    }

    parsed
}

impl ParsedLine {
    fn push(&mut self, action: Action) {
        self.commands.push(Command::Action(action));
    }

    fn extend(&mut self, actions: Vec<Action>) {
        self.commands.extend(actions.into_iter().map(Command::Action));
    }
}

fn keyword(token: &str) -> Option<Action> {
    let action = match token {
        "=" | "enter" => Action::Calculate,
        "c" | "clear" => Action::Clear,
        "neg" | "+/-" => Action::ToggleSign,
        "history" => Action::ToggleHistory,
        "clear-history" => Action::ClearHistory,
        "copy" => Action::CopyResult,
        "about" => Action::OpenAbout,
        "close" => Action::DismissAbout,
        "skip" | "s" | "esc" | "escape" => Action::Skip,
        _ => return None,
    };
    Some(action)
}

/// Expands a run of keypad characters, or `None` if any character is not
/// a keypad key.
fn keypad_run(token: &str) -> Option<Vec<Action>> {
    token
        .chars()
        .map(|c| {
            if let Ok(digit) = Digit::try_from(c) {
                return Some(Action::Digit(digit));
            }
            match c {
                '.' => Some(Action::Decimal),
                '=' => Some(Action::Calculate),
                '%' => Some(Action::Percent),
                _ => {
                    let mut buf = [0; 4];
                    c.encode_utf8(&mut buf)
                        .parse::<Operator>()
                        .ok()
                        .map(Action::Operator)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(line: &str) -> Vec<Action> {
        parse_line(line)
            .commands
            .into_iter()
            .filter_map(|command| match command {
                Command::Action(action) => Some(action),
                Command::Quit => None,
            })
            .collect()
    }

    fn digit(value: u8) -> Action {
        Action::Digit(Digit::new(value).unwrap())
    }

    #[test]
    fn test_number_expands_to_keys() {
        assert_eq!(
            actions("12.5"),
            vec![digit(1), digit(2), Action::Decimal, digit(5)]
        );
    }

    #[test]
    fn test_compact_expression() {
        assert_eq!(
            actions("7+3="),
            vec![
                digit(7),
                Action::Operator(Operator::Add),
                digit(3),
                Action::Calculate
            ]
        );
    }

    #[test]
    fn test_keywords_and_functions() {
        assert_eq!(
            actions("neg % sqrt x² history copy"),
            vec![
                Action::ToggleSign,
                Action::Percent,
                Action::Function(ScientificFn::Sqrt),
                Action::Function(ScientificFn::Square),
                Action::ToggleHistory,
                Action::CopyResult,
            ]
        );
    }

    #[test]
    fn test_mode_and_precision_take_arguments() {
        assert_eq!(
            actions("mode scientific precision 4"),
            vec![
                Action::SetMode(CalcMode::Scientific),
                Action::SetPrecision(Precision::Four),
            ]
        );

        let parsed = parse_line("precision 3 mode");
        assert!(parsed.commands.is_empty());
        assert_eq!(parsed.errors.len(), 2);
        assert!(matches!(parsed.errors[1], AppError::MissingArgument(_)));
    }

    #[test]
    fn test_unknown_tokens_are_skipped() {
        let parsed = parse_line("1 banana 2");
        assert_eq!(parsed.commands.len(), 2);
        assert!(matches!(
            &parsed.errors[..],
            [AppError::UnknownToken(token)] if token == "banana"
        ));
    }

    #[test]
    fn test_skip_aliases() {
        assert_eq!(
            actions("skip S esc"),
            vec![Action::Skip, Action::Skip, Action::Skip]
        );
    }

    #[test]
    fn test_quit() {
        assert_eq!(parse_line("exit").commands, vec![Command::Quit]);
        assert!(parse_line("   ").commands.is_empty());
    }
}
