//! Holiday calendar trait and the US rental calendar.
//!
//! A calendar decides which days of a rental window are weekends and which
//! are observed holidays. Observance follows the US convention: a fixed
//! holiday falling on Saturday is observed the preceding Friday, one
//! falling on Sunday the following Monday.

use crate::date::Date;
use crate::weekday::Weekday;

/// A holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (Rental)"`).
    fn name(&self) -> &str;

    /// Observed holiday dates for `year`, in calendar order.
    fn observed_holidays(&self, year: u16) -> Vec<Date>;

    /// Count Saturdays and Sundays in the half-open range `[start, end)`.
    ///
    /// Returns 0 when `end <= start`.
    fn weekend_days_within(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut day = start;
        while day < end {
            if day.weekday().is_weekend() {
                count += 1;
            }
            day = day + 1;
        }
        count
    }

    /// Count observed holidays in the closed range `[start, end]`.
    ///
    /// Holidays are resolved for the year of `start` only; a range that
    /// crosses a year boundary does not pick up the following year's
    /// observances.
    fn holidays_within(&self, start: Date, end: Date) -> i32 {
        self.observed_holidays(start.year())
            .into_iter()
            .filter(|holiday| *holiday >= start && *holiday <= end)
            .count() as i32
    }
}

/// United States rental calendar.
///
/// Recognized holidays:
/// * Independence Day (Jul 4; if Sat → preceding Fri; if Sun → following Mon)
/// * Labor Day (1st Mon in Sep)
#[derive(Debug, Clone, Copy, Default)]
pub struct UsRentalCalendar;

impl HolidayCalendar for UsRentalCalendar {
    fn name(&self) -> &str {
        "US (Rental)"
    }

    fn observed_holidays(&self, year: u16) -> Vec<Date> {
        [independence_day_observed(year), labor_day(year)]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// July 4, shifted to the nearest weekday when it falls on a weekend.
///
/// Returns `None` when `year` is outside the supported date range.
pub fn independence_day_observed(year: u16) -> Option<Date> {
    let fourth = Date::from_ymd(year, 7, 4).ok()?;
    let observed = match fourth.weekday() {
        Weekday::Saturday => fourth - 1,
        Weekday::Sunday => fourth + 1,
        _ => fourth,
    };
    Some(observed)
}

/// Labor Day: the first Monday of September.
///
/// Returns `None` when `year` is outside the supported date range.
pub fn labor_day(year: u16) -> Option<Date> {
    Date::nth_weekday(1, Weekday::Monday, year, 9).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn independence_day_on_weekday_stays_put() {
        // July 4, 2023 is a Tuesday.
        assert_eq!(independence_day_observed(2023), Some(date(2023, 7, 4)));
    }

    #[test]
    fn independence_day_on_saturday_moves_to_friday() {
        // July 4, 2015 and 2020 are Saturdays.
        assert_eq!(independence_day_observed(2015), Some(date(2015, 7, 3)));
        assert_eq!(independence_day_observed(2020), Some(date(2020, 7, 3)));
    }

    #[test]
    fn independence_day_on_sunday_moves_to_monday() {
        // July 4, 2021 is a Sunday.
        assert_eq!(independence_day_observed(2021), Some(date(2021, 7, 5)));
    }

    #[test]
    fn labor_day_is_first_september_monday() {
        assert_eq!(labor_day(2015), Some(date(2015, 9, 7)));
        assert_eq!(labor_day(2020), Some(date(2020, 9, 7)));
        assert_eq!(labor_day(2025), Some(date(2025, 9, 1)));
    }

    #[test]
    fn observed_holidays_in_calendar_order() {
        let cal = UsRentalCalendar;
        assert_eq!(
            cal.observed_holidays(2020),
            vec![date(2020, 7, 3), date(2020, 9, 7)]
        );
    }

    #[test]
    fn weekend_days_exclude_the_end_date() {
        let cal = UsRentalCalendar;
        // Fri Jul 3 .. Tue Jul 7, 2015: Sat 4th and Sun 5th fall inside,
        // the end date is not scanned.
        assert_eq!(cal.weekend_days_within(date(2015, 7, 3), date(2015, 7, 7)), 2);
        // Ending on a Saturday does not count it.
        assert_eq!(cal.weekend_days_within(date(2015, 7, 6), date(2015, 7, 11)), 0);
        // Empty and inverted ranges count nothing.
        assert_eq!(cal.weekend_days_within(date(2015, 7, 3), date(2015, 7, 3)), 0);
        assert_eq!(cal.weekend_days_within(date(2015, 7, 7), date(2015, 7, 3)), 0);
    }

    #[test]
    fn holidays_within_is_closed_on_both_ends() {
        let cal = UsRentalCalendar;
        let observed = date(2020, 7, 3);
        assert_eq!(cal.holidays_within(observed, observed), 1);
        assert_eq!(cal.holidays_within(date(2020, 7, 3), date(2020, 7, 5)), 1);
        assert_eq!(cal.holidays_within(date(2020, 7, 4), date(2020, 7, 5)), 0);
    }
}
