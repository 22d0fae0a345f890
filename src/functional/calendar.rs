//! Calendar arithmetic used by the date-bound rules.
//!
//! All helpers take "today" as an argument; nothing here reads the clock.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Zero-value date that stands in for "not supplied".
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Treats the sentinel date as absent.
pub fn supplied(date: Option<NaiveDate>) -> Option<NaiveDate> {
    date.filter(|d| *d != sentinel_date())
}

/// Whole years between `birth` and `today`.
///
/// One year is subtracted when the birthday has not occurred yet this year.
/// Negative when `birth` lies after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// `date` shifted back by whole years; Feb 29 clamps to Feb 28.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// `date` shifted forward by whole years; Feb 29 clamps to Feb 28.
pub fn years_after(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MAX)
}

pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}
