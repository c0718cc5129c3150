//! Perform business day arithmetic on calendar dates, ignoring time-of-day components.
//!
//! A **business day** is any day that is not a Saturday or a Sunday. The weekend is fixed
//! by that convention; there is no locale configuration and no holiday awareness in this
//! module.
//!
//! # Date inputs
//!
//! Operations accept the [`DateInput`] container enum, which covers the representations
//! convertible to a calendar date: a [`NaiveDateTime`](chrono::NaiveDateTime), a
//! [`NaiveDate`](chrono::NaiveDate) with null time, or a count of milliseconds relative to
//! the Unix epoch. Conversion is fallible only for timestamps outside the representable
//! date range, yielding [`InvalidDateInput`].
//!
//! ```rust
//! use busdays::dates::{ndt, DateInput};
//! let date = DateInput::TimestampMillis(1_389_312_000_000);
//! assert_eq!(ndt(2014, 1, 10), date.to_datetime().unwrap());
//! ```
//!
//! # Business day difference
//!
//! [`bus_day_diff`] returns the signed number of business day periods between two dates.
//! The count is seeded from whole weeks, at five business days per week, and corrected by
//! walking the remaining days, which is never more than six of them.
//!
//! ```rust
//! use busdays::dates::{bus_day_diff, ndt};
//! let result = bus_day_diff(ndt(2014, 7, 20).into(), ndt(2014, 1, 10).into());
//! assert_eq!(Ok(136), result);
//! ```
//!
//! # Rolling and stepping
//!
//! Non-business days can be **rolled** forwards or backwards onto business days with
//! [`roll_forward_bus_day`] and [`roll_backward_bus_day`], and a date can be stepped by a
//! signed number of business days with [`add_bus_days`].
//!
//! ```rust
//! use busdays::dates::{add_bus_days, ndt};
//! // Friday 10th January 2014, plus one business day.
//! assert_eq!(ndt(2014, 1, 13), add_bus_days(&ndt(2014, 1, 10), 1));
//! ```

mod busdiff;
mod datelike;
mod dayroll;

mod serde;

pub use crate::dates::{
    busdiff::bus_day_diff,
    datelike::{ndt, DateInput, InvalidDateInput},
    dayroll::{
        add_bus_days, add_cal_days, cal_day_diff, is_bus_day, is_same_day, is_weekend,
        roll_backward_bus_day, roll_forward_bus_day,
    },
};
