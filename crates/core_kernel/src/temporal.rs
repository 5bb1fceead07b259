//! Calendar helpers for month-based projections
//!
//! Loan payoff dates count whole calendar months. Month addition clamps to the last day of shorter months
//! (Jan 31 + 1 month = Feb 28/29), matching chrono's `Months` semantics.

use chrono::{Months, NaiveDate};

use crate::error::CoreError;

/// Adds a number of calendar months to a date
///
/// # Errors
///
/// Returns `CoreError::DateOutOfRange` if the result falls outside the
/// range chrono can represent.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, CoreError> {
    date.checked_add_months(Months::new(months)).ok_or_else(|| {
        CoreError::DateOutOfRange(format!("{} + {} months", date, months))
    })
}
