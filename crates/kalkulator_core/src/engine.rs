//! # Arithmetic Engine
//!
//! One flat state machine driven by keypad events:
//!
//! ```text
//!   digit / "." / ±  / %  / fn  ──> display
//!   operator ──> [calculate if pending] ──> pending = (display, op), display = "0"
//!   "="      ──> pending op applied to (operand, display) ──> history, last result
//! ```
//!
//! Operators apply immediately and left to right: `2 + 3 × 4 =` is
//! `(2 + 3) × 4`. Nothing here fails. Division by zero yields zero and
//! unparseable displays turn into `NaN`.

use std::fmt;

use crate::error::{CalcError, CalcResult};
use crate::history::History;
use crate::number;
use crate::operator::{Operator, ScientificFn};
use crate::settings::Precision;

/// Display contents after reset.
pub const DEFAULT_DISPLAY: &str = "0";

/// A single decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its value, or `None` above nine.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
            .ok_or(CalcError::InvalidDigit(c))
    }
}

/// A resolved calculation, as recorded in history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// Left operand (the captured pending operand).
    pub lhs: f64,
    /// Operator applied.
    pub operator: Operator,
    /// Right operand (the display at the time of calculation).
    pub rhs: f64,
    /// Rounded result.
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            number::format(self.lhs),
            self.operator,
            number::format(self.rhs),
            number::format(self.result)
        )
    }
}

/// The operand/operator pair awaiting a second operand.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    operand: String,
    operator: Operator,
}

/// The calculator state machine.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Text currently shown.
    display: String,
    /// Captured operand and operator, set together.
    pending: Option<Pending>,
    /// Most recent result.
    last_result: f64,
    /// Formatted past calculations.
    history: History,
    /// Rounding applied to results.
    precision: Precision,
}

impl Engine {
    /// Creates an engine with the default precision.
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(Precision::default())
    }

    /// Creates an engine rounding to `precision`.
    #[must_use]
    pub fn with_precision(precision: Precision) -> Self {
        Self {
            display: DEFAULT_DISPLAY.to_owned(),
            pending: None,
            last_result: 0.0,
            history: History::new(),
            precision,
        }
    }

    /// Returns the display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the captured operand, if an operator is pending.
    #[must_use]
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    /// Returns the pending operator.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Returns `"<operand> <operator>"` while an operator is pending.
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        self.pending
            .as_ref()
            .map(|p| format!("{} {}", p.operand, p.operator))
    }

    /// Returns the most recent result (0 before the first calculation).
    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Returns the calculation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the rounding precision.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Changes the rounding precision for later results.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Appends a digit, replacing a lone default zero.
    pub fn append_digit(&mut self, digit: Digit) {
        if self.display == DEFAULT_DISPLAY {
            self.display.clear();
        }
        self.display.push(digit.as_char());
    }

    /// Appends a decimal point unless one is already shown.
    pub fn append_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Selects an operator, resolving any pending one first.
    pub fn choose_operator(&mut self, operator: Operator) {
        if self.pending.is_some() {
            self.calculate();
        }
        let operand = std::mem::replace(&mut self.display, DEFAULT_DISPLAY.to_owned());
        self.pending = Some(Pending { operand, operator });
    }

    /// Applies the pending operator.
    ///
    /// Returns the recorded calculation, or `None` when no operator is
    /// pending (in which case nothing changes).
    pub fn calculate(&mut self) -> Option<Calculation> {
        let Pending { operand, operator } = self.pending.take()?;

        let lhs = number::parse(&operand);
        let rhs = number::parse(&self.display);
        let result = number::round_to(operator.apply(lhs, rhs), self.precision.places());

        let calculation = Calculation {
            lhs,
            operator,
            rhs,
            result,
        };
        tracing::debug!(%calculation, "calculated");

        self.history.record(calculation.to_string());
        self.last_result = result;
        self.display = number::format(result);

        Some(calculation)
    }

    /// Resets display and pending state. History and last result survive.
    pub fn clear(&mut self) {
        DEFAULT_DISPLAY.clone_into(&mut self.display);
        self.pending = None;
    }

    /// Empties the history log.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Negates the display value.
    pub fn toggle_sign(&mut self) {
        self.display = number::format(number::parse(&self.display) * -1.0);
    }

    /// Divides the display value by one hundred.
    pub fn percentage(&mut self) {
        self.display = number::format(number::parse(&self.display) / 100.0);
    }

    /// Applies a scientific function to the display value.
    ///
    /// The result is written with exactly as many fraction digits as the
    /// precision asks for.
    pub fn apply_function(&mut self, function: ScientificFn) {
        let value = function.apply(number::parse(&self.display));
        self.display = number::to_fixed(value, self.precision.places());
        tracing::debug!(%function, display = %self.display, "applied function");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    fn type_number(engine: &mut Engine, text: &str) {
        for c in text.chars() {
            if c == '.' {
                engine.append_decimal();
            } else {
                engine.append_digit(digit(c));
            }
        }
    }

    #[test]
    fn test_seven_plus_three() {
        let mut engine = Engine::new();
        type_number(&mut engine, "7");
        engine.choose_operator(Operator::Add);
        type_number(&mut engine, "3");
        let calculation = engine.calculate().unwrap();

        assert_eq!(calculation.result, 10.0);
        assert_eq!(engine.display(), "10");
        assert_eq!(engine.history().latest(), Some("7 + 3 = 10"));
        assert_eq!(engine.last_result(), 10.0);
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.pending_operand(), None);
    }

    #[test]
    fn test_leading_zero_replaced() {
        let mut engine = Engine::new();
        type_number(&mut engine, "007");
        assert_eq!(engine.display(), "7");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut engine = Engine::new();
        type_number(&mut engine, "1.2.3");
        assert_eq!(engine.display(), "1.23");

        let mut engine = Engine::new();
        engine.append_decimal();
        assert_eq!(engine.display(), "0.");
    }

    #[test]
    fn test_chaining_is_left_to_right() {
        let mut engine = Engine::new();
        type_number(&mut engine, "2");
        engine.choose_operator(Operator::Add);
        type_number(&mut engine, "3");
        engine.choose_operator(Operator::Multiply);

        assert_eq!(engine.pending_expression().as_deref(), Some("5 ×"));
        assert_eq!(engine.display(), "0");

        type_number(&mut engine, "4");
        engine.calculate();

        assert_eq!(engine.display(), "20");
        let lines: Vec<_> = engine.history().iter().collect();
        assert_eq!(lines, vec!["5 × 4 = 20", "2 + 3 = 5"]);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        let mut engine = Engine::new();
        type_number(&mut engine, "9");
        engine.choose_operator(Operator::Divide);
        engine.calculate();

        assert_eq!(engine.display(), "0");
        assert_eq!(engine.history().latest(), Some("9 ÷ 0 = 0"));
    }

    #[test]
    fn test_precision_rounding() {
        let mut engine = Engine::with_precision(Precision::Two);
        type_number(&mut engine, "1");
        engine.choose_operator(Operator::Divide);
        type_number(&mut engine, "3");
        engine.calculate();
        assert_eq!(engine.display(), "0.33");

        engine.set_precision(Precision::Zero);
        engine.choose_operator(Operator::Multiply);
        type_number(&mut engine, "10");
        engine.calculate();
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn test_calculate_without_operator_is_noop() {
        let mut engine = Engine::new();
        type_number(&mut engine, "42");
        assert!(engine.calculate().is_none());
        assert_eq!(engine.display(), "42");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_clear_keeps_history_and_last_result() {
        let mut engine = Engine::new();
        type_number(&mut engine, "6");
        engine.choose_operator(Operator::Multiply);
        type_number(&mut engine, "7");
        engine.calculate();
        type_number(&mut engine, "5");
        engine.choose_operator(Operator::Add);
        engine.clear();

        assert_eq!(engine.display(), DEFAULT_DISPLAY);
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.last_result(), 42.0);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_sign_and_percentage() {
        let mut engine = Engine::new();
        type_number(&mut engine, "12.");
        engine.toggle_sign();
        assert_eq!(engine.display(), "-12");
        engine.percentage();
        assert_eq!(engine.display(), "-0.12");

        let mut engine = Engine::new();
        engine.toggle_sign();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_scientific_uses_fixed_places() {
        let mut engine = Engine::with_precision(Precision::Two);
        type_number(&mut engine, "9");
        engine.apply_function(ScientificFn::Sqrt);
        assert_eq!(engine.display(), "3.00");

        engine.set_precision(Precision::Four);
        engine.apply_function(ScientificFn::Square);
        assert_eq!(engine.display(), "9.0000");
    }

    #[test]
    fn test_nan_display_propagates() {
        let mut engine = Engine::new();
        engine.toggle_sign();
        engine.append_digit(digit('1'));
        engine.toggle_sign();
        engine.apply_function(ScientificFn::Sqrt);
        assert_eq!(engine.display(), "NaN");

        engine.append_digit(digit('5'));
        assert_eq!(engine.display(), "NaN5");
        engine.percentage();
        assert_eq!(engine.display(), "NaN");
    }

    #[test]
    fn test_digit_validation() {
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::try_from('x'), Err(CalcError::InvalidDigit('x')));
    }
}
