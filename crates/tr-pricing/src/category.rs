//! Tool categories and their charge policies.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Category of rentable tool.
///
/// The set is closed and fixed at build time. Each category carries a
/// daily rental rate and flags controlling whether weekend days and
/// observed holidays in the rental window are chargeable:
///
/// | category   | daily rate | weekends | holidays |
/// |------------|-----------:|----------|----------|
/// | Ladder     | $1.99      | charged  | free     |
/// | Chainsaw   | $1.49      | free     | charged  |
/// | Jackhammer | $2.99      | free     | free     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// Ladder.
    Ladder,
    /// Chainsaw.
    Chainsaw,
    /// Jackhammer.
    Jackhammer,
}

impl ToolCategory {
    /// Daily rental rate in US dollars.
    pub fn daily_rate(&self) -> Decimal {
        match self {
            ToolCategory::Ladder => dec!(1.99),
            ToolCategory::Chainsaw => dec!(1.49),
            ToolCategory::Jackhammer => dec!(2.99),
        }
    }

    /// Whether Saturdays and Sundays in the rental window are charged.
    pub fn charges_weekends(&self) -> bool {
        matches!(self, ToolCategory::Ladder)
    }

    /// Whether observed holidays in the rental window are charged.
    pub fn charges_holidays(&self) -> bool {
        matches!(self, ToolCategory::Chainsaw)
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ToolCategory::Ladder => "Ladder",
            ToolCategory::Chainsaw => "Chainsaw",
            ToolCategory::Jackhammer => "Jackhammer",
        };
        write!(f, "{name}")
    }
}
