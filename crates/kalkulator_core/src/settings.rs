//! Precision and mode selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Number of decimal places results are rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Precision {
    /// Whole numbers.
    Zero,
    /// Two decimal places.
    #[default]
    Two,
    /// Four decimal places.
    Four,
    /// Six decimal places.
    Six,
}

impl Precision {
    /// Every selectable precision, in menu order.
    pub const ALL: [Self; 4] = [Self::Zero, Self::Two, Self::Four, Self::Six];

    /// Returns the number of decimal places.
    #[must_use]
    pub const fn places(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Two => 2,
            Self::Four => 4,
            Self::Six => 6,
        }
    }
}

impl TryFrom<u32> for Precision {
    type Error = CalcError;

    fn try_from(places: u32) -> CalcResult<Self> {
        match places {
            0 => Ok(Self::Zero),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            other => Err(CalcError::InvalidPrecision(other)),
        }
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        u32::from(precision.places())
    }
}

impl FromStr for Precision {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let places: u32 = s
            .trim()
            .parse()
            .map_err(|_| CalcError::MalformedPrecision(s.to_owned()))?;
        Self::try_from(places)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} decimal", self.places())
    }
}

/// Keypad layout selected by the mode dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    /// Digits, the four basic operators, sign and percentage.
    #[default]
    Standard,
    /// Standard keypad plus the scientific row and `^`.
    Scientific,
    /// Standard keypad under a separate label.
    Programmer,
}

impl CalcMode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Scientific, Self::Programmer];

    /// Returns true if scientific functions and `^` are reachable.
    #[must_use]
    pub const fn allows_scientific(self) -> bool {
        matches!(self, Self::Scientific)
    }

    /// Returns the menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Scientific => "Scientific",
            Self::Programmer => "Programmer",
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalcMode {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "scientific" => Ok(Self::Scientific),
            "programmer" => Ok(Self::Programmer),
            _ => Err(CalcError::UnknownMode(s.to_owned())),
        }
    }
}
