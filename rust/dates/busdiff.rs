use crate::dates::{add_cal_days, cal_day_diff, is_same_day, is_weekend, DateInput, InvalidDateInput};

/// Get the number of business day periods between two given dates.
///
/// Business days are days that are not in the Saturday/Sunday weekend. Like
/// [`cal_day_diff`], time-of-day components are removed from the dates before the
/// difference is calculated. The result is positive when `date_left` falls after
/// `date_right` and negative otherwise.
///
/// Returns [`InvalidDateInput`] if either input fails conversion to a valid calendar
/// date. This is checked before any arithmetic is performed.
///
/// # Examples
/// How many business days are between 10th January 2014 and 20th July 2014?
/// ```rust
/// use busdays::dates::{bus_day_diff, ndt};
/// let result = bus_day_diff(ndt(2014, 7, 20).into(), ndt(2014, 1, 10).into());
/// assert_eq!(Ok(136), result);
/// ```
pub fn bus_day_diff(date_left: DateInput, date_right: DateInput) -> Result<i64, InvalidDateInput> {
    let date_left = date_left.to_datetime()?;
    let mut date_right = date_right.to_datetime()?;

    let cal_diff = cal_day_diff(&date_left, &date_right);
    let sign: i64 = if cal_diff < 0 { -1 } else { 1 };

    // integer division truncates toward zero, also for negative differences
    let weeks = cal_diff / 7;

    let mut result = weeks * 5;
    date_right = add_cal_days(&date_right, weeks * 7);

    // the loop below runs at most 6 times, for the remaining days that do not make up a
    // full week
    while !is_same_day(&date_left, &date_right) {
        // sign accounts for both negative and positive differences
        if !is_weekend(&date_right) {
            result += sign;
        }
        date_right = add_cal_days(&date_right, sign);
    }

    Ok(result)
}
