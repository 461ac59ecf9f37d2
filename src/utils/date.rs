//! Date offset helpers
//!
//! Calendar-date arithmetic relative to today or an explicit reference date.
//! Day counts must be strictly positive; direction is carried by the function
//! name, not the sign of the argument.

use chrono::{Days, Local, NaiveDate};

use crate::error::DateError;

/// The date `number_of_days` after today (local time).
///
/// # Arguments
/// * `number_of_days` - how many days past today, must be greater than 0
///
/// # Returns
/// * `Result<NaiveDate, DateError>` - the future date, or `InvalidArgument`
///   if the count is not positive or leaves the calendar range
pub fn days_from_today(number_of_days: i64) -> Result<NaiveDate, DateError> {
    let today = Local::now().date_naive();
    add_days(today, number_of_days)
}

/// The date `number_of_days` before today (local time).
pub fn days_before_today(number_of_days: i64) -> Result<NaiveDate, DateError> {
    let today = Local::now().date_naive();
    days_before(today, number_of_days)
}

/// The date `number_of_days` before the given reference date.
///
/// The reference date may lie in the future; only the day count is checked.
pub fn days_before(date: NaiveDate, number_of_days: i64) -> Result<NaiveDate, DateError> {
    let days = positive_days(number_of_days)?;
    date.checked_sub_days(days)
        .ok_or_else(|| DateError::InvalidArgument(format!("{number_of_days} days before {date} is out of range")))
}

fn add_days(date: NaiveDate, number_of_days: i64) -> Result<NaiveDate, DateError> {
    let days = positive_days(number_of_days)?;
    date.checked_add_days(days)
        .ok_or_else(|| DateError::InvalidArgument(format!("{number_of_days} days after {date} is out of range")))
}

fn positive_days(number_of_days: i64) -> Result<Days, DateError> {
    if number_of_days <= 0 {
        return Err(DateError::InvalidArgument(
            "number of days must be greater than 0".to_string(),
        ));
    }
    Ok(Days::new(number_of_days as u64))
}
