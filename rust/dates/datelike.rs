use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::convert::From;
use thiserror::Error;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Error returned when a date input cannot be converted to a valid calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("date input could not be converted to a valid calendar date")]
pub struct InvalidDateInput;

/// Container for date-like input representations.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateInput {
    /// A calendar date with a time-of-day component.
    Datetime(NaiveDateTime),
    /// A calendar date with null time.
    Date(NaiveDate),
    /// Milliseconds relative to the Unix epoch, interpreted in UTC.
    TimestampMillis(i64),
}

impl From<NaiveDateTime> for DateInput {
    fn from(item: NaiveDateTime) -> Self {
        DateInput::Datetime(item)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(item: NaiveDate) -> Self {
        DateInput::Date(item)
    }
}

impl From<i64> for DateInput {
    fn from(item: i64) -> Self {
        DateInput::TimestampMillis(item)
    }
}

impl DateInput {
    /// Convert the input to a `NaiveDateTime`.
    ///
    /// Returns [`InvalidDateInput`] if the representation does not map to a real calendar
    /// date. Only [`DateInput::TimestampMillis`] values outside the representable date
    /// range fail this conversion.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, InvalidDateInput> {
        match self {
            DateInput::Datetime(d) => Ok(*d),
            DateInput::Date(d) => Ok(d.and_hms_opt(0, 0, 0).unwrap()),
            DateInput::TimestampMillis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|d| d.naive_utc())
                .ok_or(InvalidDateInput),
        }
    }
}
