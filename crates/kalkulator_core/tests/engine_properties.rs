//! Behavioural properties of the arithmetic engine, driven key by key.

use kalkulator_core::{number, Digit, Engine, History, Operator, Precision};

fn press(engine: &mut Engine, keys: &str) {
    for key in keys.split_whitespace() {
        match key {
            "=" => {
                engine.calculate();
            }
            "." => engine.append_decimal(),
            "C" => engine.clear(),
            "±" => engine.toggle_sign(),
            "%" => engine.percentage(),
            _ => {
                if let Ok(op) = key.parse::<Operator>() {
                    engine.choose_operator(op);
                } else {
                    for c in key.chars() {
                        if c == '.' {
                            engine.append_decimal();
                        } else {
                            engine.append_digit(Digit::try_from(c).unwrap());
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_appending_digits_preserves_value() {
    for text in ["0", "5", "10", "000123", "9876543210", "0042", "1000001"] {
        let mut engine = Engine::new();
        press(&mut engine, text);

        let expected: f64 = text.parse().unwrap();
        assert_eq!(number::parse(engine.display()), expected, "digits {text}");
        let trimmed = text.trim_start_matches('0');
        let expected_text = if trimmed.is_empty() { "0" } else { trimmed };
        assert_eq!(engine.display(), expected_text);
    }
}

#[test]
fn test_chaining_ignores_precedence() {
    let mut engine = Engine::new();
    press(&mut engine, "2 + 3 × 4 =");
    assert_eq!(engine.display(), "20");

    let mut engine = Engine::new();
    press(&mut engine, "10 - 4 ÷ 2 =");
    assert_eq!(engine.display(), "3");

    let mut engine = Engine::new();
    press(&mut engine, "2 ^ 3 - 1 =");
    assert_eq!(engine.display(), "7");
}

#[test]
fn test_history_is_bounded_and_most_recent_first() {
    let mut engine = Engine::new();
    for i in 1..=12 {
        press(&mut engine, &format!("C {i} + 1 ="));
    }

    let history = engine.history();
    assert_eq!(history.len(), History::CAPACITY);
    assert_eq!(history.latest(), Some("12 + 1 = 13"));
    assert_eq!(history.iter().last(), Some("3 + 1 = 4"));
}

#[test]
fn test_division_by_zero_returns_zero() {
    let mut engine = Engine::new();
    press(&mut engine, "8 ÷ 0 =");
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.last_result(), 0.0);
    assert!(engine.last_result().is_finite());
}

#[test]
fn test_precision_controls_rounding() {
    let cases = [
        (Precision::Zero, "0"),
        (Precision::Two, "0.33"),
        (Precision::Four, "0.3333"),
        (Precision::Six, "0.333333"),
    ];
    for (precision, expected) in cases {
        let mut engine = Engine::with_precision(precision);
        press(&mut engine, "1 ÷ 3 =");
        assert_eq!(engine.display(), expected, "{precision}");
        assert_eq!(
            engine.history().latest(),
            Some(format!("1 ÷ 3 = {expected}").as_str())
        );
    }
}

#[test]
fn test_result_keeps_feeding_the_next_entry() {
    let mut engine = Engine::new();
    press(&mut engine, "7 + 3 =");
    assert_eq!(engine.display(), "10");
    assert_eq!(engine.history().latest(), Some("7 + 3 = 10"));

    // Digits typed after a result append to it.
    press(&mut engine, "5");
    assert_eq!(engine.display(), "105");
    assert_eq!(engine.last_result(), 10.0);
}

#[test]
fn test_operands_with_trailing_point_format_cleanly() {
    let mut engine = Engine::new();
    press(&mut engine, "12. × 0.5 =");
    assert_eq!(engine.history().latest(), Some("12 × 0.5 = 6"));
}

#[test]
fn test_rounding_uses_exact_binary_value() {
    // Each of these is stored just below the half.
    let cases = [("2.675", "2.67"), ("1.115", "1.11"), ("10.235", "10.23")];
    for (operand, expected) in cases {
        let mut engine = Engine::with_precision(Precision::Two);
        press(&mut engine, &format!("{operand} + 0 ="));
        assert_eq!(engine.display(), expected, "{operand}");
        assert_eq!(
            engine.history().latest(),
            Some(format!("{operand} + 0 = {expected}").as_str())
        );
    }
}

#[test]
fn test_exact_half_rounds_away_from_zero() {
    let mut engine = Engine::with_precision(Precision::Two);
    press(&mut engine, "0.125 + 0 =");
    assert_eq!(engine.display(), "0.13");

    press(&mut engine, "C 0.125 ± - 0 =");
    assert_eq!(engine.display(), "-0.13");
}
