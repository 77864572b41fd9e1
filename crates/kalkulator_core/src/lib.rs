//! # Kalkulator Core
//!
//! The arithmetic engine behind the Kalkulator widget.
//!
//! ## Design Principles
//!
//! 1. **Display is text** - digits are appended to a string, and every
//!    transition parses it leniently and formats the result back
//! 2. **Immediate execution** - operators apply left to right, no precedence
//! 3. **Total operations** - nothing fails; `x ÷ 0` is `0`, junk parses to `NaN`
//! 4. **Bounded history** - ten lines, most recent first
//!
//! ## Example
//!
//! ```rust
//! use kalkulator_core::{Digit, Engine, Operator};
//!
//! let mut engine = Engine::new();
//! engine.append_digit(Digit::new(7).unwrap());
//! engine.choose_operator(Operator::Add);
//! engine.append_digit(Digit::new(3).unwrap());
//! engine.calculate();
//!
//! assert_eq!(engine.display(), "10");
//! assert_eq!(engine.history().latest(), Some("7 + 3 = 10"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod engine;
pub mod error;
pub mod history;
pub mod number;
pub mod operator;
pub mod settings;

pub use engine::{Calculation, Digit, Engine, DEFAULT_DISPLAY};
pub use error::{CalcError, CalcResult};
pub use history::History;
pub use operator::{Operator, ScientificFn};
pub use settings::{CalcMode, Precision};
