// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

use chrono::prelude::*;
use chrono::Days;
use std::cmp::Ordering;

/// Returns whether the date falls on the fixed Saturday/Sunday weekend.
pub fn is_weekend(date: &NaiveDateTime) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns whether the date is a business day, i.e. not part of the weekend.
pub fn is_bus_day(date: &NaiveDateTime) -> bool {
    !is_weekend(date)
}

/// Returns whether two datetimes fall on the same calendar day, ignoring time-of-day.
pub fn is_same_day(date1: &NaiveDateTime, date2: &NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

/// Return the signed number of whole calendar days between two datetimes, ignoring
/// time-of-day.
///
/// The result is positive when `date1` falls after `date2`.
pub fn cal_day_diff(date1: &NaiveDateTime, date2: &NaiveDateTime) -> i64 {
    (date1.date() - date2.date()).num_days()
}

/// Add a given number of calendar days to a `date`, where `days` may be negative.
pub fn add_cal_days(date: &NaiveDateTime, days: i64) -> NaiveDateTime {
    if days < 0 {
        *date - Days::new(u64::try_from(-days).unwrap())
    } else {
        *date + Days::new(u64::try_from(days).unwrap())
    }
}

/// Return the `date`, if a business day, or get the next business date after `date`.
pub fn roll_forward_bus_day(date: &NaiveDateTime) -> NaiveDateTime {
    let mut new_date = *date;
    while !is_bus_day(&new_date) {
        new_date = new_date + Days::new(1);
    }
    new_date
}

/// Return the `date`, if a business day, or get the business day preceding `date`.
pub fn roll_backward_bus_day(date: &NaiveDateTime) -> NaiveDateTime {
    let mut new_date = *date;
    while !is_bus_day(&new_date) {
        new_date = new_date - Days::new(1);
    }
    new_date
}

/// Add a given number of business days to a `date`, under lag rules.
///
/// *Note*: if the given `date` is a non-business day it is first rolled onto a business
/// day in the direction of travel, and a number of **zero** business days rolls
/// **forwards**. Adding or subtracting 1 business day from a non-business day is then
/// equivalent to rolling forwards or backwards, respectively.
pub fn add_bus_days(date: &NaiveDateTime, days: i32) -> NaiveDateTime {
    if is_bus_day(date) {
        return step_bus_days(date, days);
    }
    match days.cmp(&0_i32) {
        Ordering::Equal => roll_forward_bus_day(date),
        Ordering::Less => step_bus_days(&roll_backward_bus_day(date), days + 1),
        Ordering::Greater => step_bus_days(&roll_forward_bus_day(date), days - 1),
    }
}

// `date` must already be a business day.
fn step_bus_days(date: &NaiveDateTime, days: i32) -> NaiveDateTime {
    let mut new_date = *date;
    let mut counter: i32 = 0;
    if days < 0 {
        // then we subtract business days
        while counter > days {
            new_date = roll_backward_bus_day(&(new_date - Days::new(1)));
            counter -= 1;
        }
    } else {
        // add business days
        while counter < days {
            new_date = roll_forward_bus_day(&(new_date + Days::new(1)));
            counter += 1;
        }
    }
    new_date
}
