//! Binary operators and unary scientific functions.

use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division. Dividing by zero yields zero.
    Divide,
    /// Exponentiation.
    Power,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Self; 5] = [
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Power,
    ];

    /// Returns the glyph used on keys and in history lines.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "x" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(CalcError::UnknownOperator(other.to_owned())),
        }
    }
}

/// A unary function from the scientific keypad row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScientificFn {
    /// Square root.
    Sqrt,
    /// Square.
    Square,
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
    /// Tangent (radians).
    Tan,
    /// Base-10 logarithm.
    Log10,
    /// Natural logarithm.
    Ln,
}

impl ScientificFn {
    /// Every function, in keypad order.
    pub const ALL: [Self; 7] = [
        Self::Sqrt,
        Self::Square,
        Self::Log10,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
    ];

    /// Returns the key label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
        }
    }

    /// Applies the function.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScientificFn {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqrt" | "√" => Ok(Self::Sqrt),
            "square" | "sq" | "x²" => Ok(Self::Square),
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "log" | "log10" => Ok(Self::Log10),
            "ln" => Ok(Self::Ln),
            _ => Err(CalcError::UnknownFunction(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_is_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_power() {
        assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!("x".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("÷".parse::<Operator>(), Ok(Operator::Divide));
        assert_eq!("−".parse::<Operator>(), Ok(Operator::Subtract));
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_scientific_functions() {
        assert_eq!(ScientificFn::Sqrt.apply(9.0), 3.0);
        assert_eq!(ScientificFn::Square.apply(-4.0), 16.0);
        assert!((ScientificFn::Log10.apply(1000.0) - 3.0).abs() < 1e-12);
        assert!(ScientificFn::Ln.apply(-1.0).is_nan());
        assert_eq!("SIN".parse::<ScientificFn>(), Ok(ScientificFn::Sin));
    }
}
