//! User actions: everything a button, menu item or key can ask for.

use kalkulator_core::{CalcMode, Digit, Operator, Precision, ScientificFn};

/// One user interaction, routed to the active widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Digit key.
    Digit(Digit),
    /// Decimal point key.
    Decimal,
    /// Operator key.
    Operator(Operator),
    /// `=` key.
    Calculate,
    /// `C` key.
    Clear,
    /// `+/-` key.
    ToggleSign,
    /// `%` key.
    Percent,
    /// Scientific row key.
    Function(ScientificFn),
    /// Mode dropdown selection.
    SetMode(CalcMode),
    /// Precision dropdown selection.
    SetPrecision(Precision),
    /// "Toggle History" menu item or history card.
    ToggleHistory,
    /// "Clear History" menu item or trash button.
    ClearHistory,
    /// "Copy Result" menu item.
    CopyResult,
    /// "About Calculator" button.
    OpenAbout,
    /// Close the about dialog.
    DismissAbout,
    /// Skip the loading screen.
    Skip,
}

impl Action {
    /// Returns true for actions that need scientific mode.
    #[must_use]
    pub const fn requires_scientific(self) -> bool {
        matches!(
            self,
            Self::Function(_) | Self::Operator(Operator::Power)
        )
    }
}
