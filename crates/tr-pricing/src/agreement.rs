//! `RentalAgreement` and the charge pipeline.

use std::fmt;

use rust_decimal::Decimal;
use tr_core::money::{format_usd, round, Rounding};
use tr_time::{Date, HolidayCalendar, UsRentalCalendar};

use crate::tool::Tool;

/// A rental agreement for a checked-out tool.
///
/// Produced exactly once per successful [`Tool::checkout`] call and
/// immutable afterwards. Derived values are computed on demand from the
/// stored fields, so repeated calls are referentially consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalAgreement {
    tool: Tool,
    checkout_date: Date,
    rental_days: i32,
    discount_percent: i32,
}

impl RentalAgreement {
    /// Checkout is the only constructor path; validation happens there.
    pub(crate) fn new(
        tool: Tool,
        checkout_date: Date,
        rental_days: i32,
        discount_percent: i32,
    ) -> Self {
        Self {
            tool,
            checkout_date,
            rental_days,
            discount_percent,
        }
    }

    // ── Stored fields ─────────────────────────────────────────────────────────

    /// The rented tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Date of checkout.
    pub fn checkout_date(&self) -> Date {
        self.checkout_date
    }

    /// Rental duration in days.
    pub fn rental_days(&self) -> i32 {
        self.rental_days
    }

    /// Discount as a whole percentage in `[0, 100]`.
    pub fn discount_percent(&self) -> i32 {
        self.discount_percent
    }

    // ── Derived values ────────────────────────────────────────────────────────

    /// Date the tool is due back: checkout date plus the rental duration.
    pub fn due_date(&self) -> Date {
        self.checkout_date + self.rental_days
    }

    /// Number of billable days in the charge window.
    ///
    /// The window runs from the day after checkout through the due date.
    /// Weekend days drop out of the count unless the category charges
    /// weekends; observed holidays drop out unless it charges holidays.
    /// The weekend scan is half-open (the due date itself is not scanned);
    /// the holiday scan includes both ends.
    pub fn charge_days(&self) -> i32 {
        let category = self.tool.category();
        let calendar = UsRentalCalendar;
        let window_start = self.checkout_date + 1;
        let due = self.due_date();

        let mut days = self.rental_days;
        if !category.charges_weekends() {
            days -= calendar.weekend_days_within(window_start, due);
        }
        if !category.charges_holidays() {
            days -= calendar.holidays_within(window_start, due);
        }
        days
    }

    /// Charge before discount: daily rate × charge days, rounded half-up
    /// to cents.
    pub fn pre_discount_charge(&self) -> Decimal {
        let raw = self.tool.category().daily_rate() * Decimal::from(self.charge_days());
        round(raw, 2, Rounding::HalfUp)
    }

    /// Discount amount: the discount percentage of the pre-discount
    /// charge, rounded half-down to cents.
    ///
    /// The midpoint convention differs from [`Self::pre_discount_charge`];
    /// a tie here rounds in the renter's favor.
    pub fn discount_amount(&self) -> Decimal {
        let fraction = Decimal::new(self.discount_percent as i64, 2);
        round(fraction * self.pre_discount_charge(), 2, Rounding::HalfDown)
    }

    /// Final charge: pre-discount charge minus discount amount.
    ///
    /// Both terms are already at cent precision, so the subtraction is
    /// exact and no further rounding is applied.
    pub fn final_charge(&self) -> Decimal {
        self.pre_discount_charge() - self.discount_amount()
    }
}

impl fmt::Display for RentalAgreement {
    /// The rental summary: twelve newline-terminated lines in fixed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.tool.category();
        writeln!(f, "Tool code: {}", self.tool.code())?;
        writeln!(f, "Tool type: {category}")?;
        writeln!(f, "Tool brand: {}", self.tool.brand())?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(f, "Checkout date: {}", self.checkout_date)?;
        writeln!(f, "Due date: {}", self.due_date())?;
        writeln!(f, "Daily rental charge: {}", format_usd(category.daily_rate()))?;
        writeln!(f, "Charge days: {}", self.charge_days())?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_usd(self.pre_discount_charge())
        )?;
        writeln!(f, "Discount percent: {}%", self.discount_percent)?;
        writeln!(f, "Discount amount: {}", format_usd(self.discount_amount()))?;
        writeln!(f, "Final charge: {}", format_usd(self.final_charge()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::Brand;
    use crate::category::ToolCategory;
    use rust_decimal_macros::dec;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn agreement(category: ToolCategory, checkout: Date, days: i32, discount: i32) -> RentalAgreement {
        Tool::new("TEST", category, Brand::Ridgid)
            .checkout(checkout, days, discount)
            .unwrap()
    }

    #[test]
    fn due_date_is_checkout_plus_duration() {
        let a = agreement(ToolCategory::Ladder, date(2020, 7, 2), 3, 0);
        assert_eq!(a.due_date(), date(2020, 7, 5));
    }

    #[test]
    fn fully_chargeable_category_over_a_quiet_week() {
        // Mon Jun 1, 2020 checkout, 5 weekdays, no holidays in the window.
        let a = agreement(ToolCategory::Ladder, date(2020, 6, 1), 5, 0);
        assert_eq!(a.charge_days(), 5);
        assert_eq!(a.pre_discount_charge(), dec!(9.95));
    }

    #[test]
    fn every_window_day_excluded_yields_zero_charge() {
        // Fri Jul 2, 2021 checkout for 3 days: window Sat 3rd, Sun 4th,
        // Mon 5th (observed Independence Day). Jackhammer charges none.
        let a = agreement(ToolCategory::Jackhammer, date(2021, 7, 2), 3, 0);
        assert_eq!(a.charge_days(), 0);
        assert_eq!(a.pre_discount_charge(), dec!(0.00));
        assert_eq!(a.final_charge(), dec!(0.00));
    }

    #[test]
    fn discount_midpoint_rounds_down() {
        // One charge day at $2.99 with 50% discount: 1.495 must land on
        // 1.49, not the 1.50 a half-up rounding would give.
        let a = agreement(ToolCategory::Jackhammer, date(2020, 7, 2), 4, 50);
        assert_eq!(a.pre_discount_charge(), dec!(2.99));
        assert_eq!(a.discount_amount(), dec!(1.49));
        assert_eq!(a.final_charge(), dec!(1.50));
    }

    #[test]
    fn full_discount_zeroes_the_final_charge() {
        let a = agreement(ToolCategory::Ladder, date(2020, 6, 1), 5, 100);
        assert_eq!(a.discount_amount(), a.pre_discount_charge());
        assert_eq!(a.final_charge(), dec!(0.00));
    }
}
