use crate::dates::{add_bus_days, add_cal_days, bus_day_diff, ndt, DateInput, InvalidDateInput};
use chrono::NaiveDate;

#[test]
fn whole_weeks_add_five_per_week() {
    let start = ndt(2014, 1, 10); // Friday
    for k in 0..9_i64 {
        let later = add_cal_days(&start, 7 * k);
        assert_eq!(Ok(5 * k), bus_day_diff(later.into(), start.into()));
        assert_eq!(Ok(-5 * k), bus_day_diff(start.into(), later.into()));
    }
}

#[test]
fn antisymmetric_between_weekday_endpoints() {
    let left = ndt(2014, 1, 20); // Monday
    let rights = [
        ndt(2014, 1, 10), // Friday
        ndt(2014, 1, 14), // Tuesday
        ndt(2014, 1, 29), // Wednesday
        ndt(2014, 3, 6),  // Thursday
    ];
    for right in rights.iter() {
        let forward = bus_day_diff(left.into(), (*right).into()).unwrap();
        let backward = bus_day_diff((*right).into(), left.into()).unwrap();
        assert_eq!(forward, -backward);
    }
}

#[test]
fn count_grows_by_one_per_weekday_absorbed() {
    // stepping the later date forward from Friday 10th January 2014 across the
    // following week: the count changes exactly when the day stepped over is a weekday
    let right = ndt(2014, 1, 10);
    let expected = [1, 2, 3, 4, 5, 6, 6, 6, 7];
    for (i, want) in expected.iter().enumerate() {
        let left = add_cal_days(&right, 3 + i as i64); // Monday 13th onwards
        assert_eq!(Ok(*want), bus_day_diff(left.into(), right.into()));
    }
}

#[test]
fn multi_year_range() {
    // ten years, Friday to Friday: 521 whole weeks and three remainder weekdays
    let result = bus_day_diff(ndt(2024, 1, 10).into(), ndt(2014, 1, 10).into());
    assert_eq!(Ok(2608), result);
}

#[test]
fn mixed_input_representations() {
    let date = DateInput::Date(NaiveDate::from_ymd_opt(2014, 1, 13).unwrap());
    let stamp = DateInput::TimestampMillis(1_389_312_000_000); // 2014-01-10 UTC
    assert_eq!(Ok(1), bus_day_diff(date, stamp));
}

#[test]
fn invalid_input_is_detected_before_arithmetic() {
    let invalid = DateInput::TimestampMillis(i64::MIN);
    assert_eq!(
        Err(InvalidDateInput),
        bus_day_diff(invalid, ndt(2014, 1, 10).into())
    );
    assert_eq!(
        Err(InvalidDateInput),
        bus_day_diff(ndt(2014, 1, 10).into(), invalid)
    );
}

#[test]
fn diff_inverts_bus_day_stepping() {
    let start = ndt(2014, 1, 15); // Wednesday
    for n in [-9_i32, -5, -1, 0, 1, 4, 7, 23] {
        let stepped = add_bus_days(&start, n);
        assert_eq!(
            Ok(n as i64),
            bus_day_diff(stepped.into(), start.into())
        );
    }
}
