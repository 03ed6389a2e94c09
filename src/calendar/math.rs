//! Month arithmetic for the picker.
//!
//! Nothing here ever produces an invalid date: whenever a day of the month
//! would not exist in the destination month, it is clamped down to that
//! month's last day.
use crate::error::OutOfTimeError;
use time::{Date, Month, OffsetDateTime, Weekday};

pub(crate) const DAYS_IN_WEEK: u8 = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Returns the year and month `offset` months away from `year`-`month`.
///
/// Years beyond the range of `i32` saturate; such years are rejected later
/// by [`Date::from_calendar_date`].
pub fn shift_month(year: i32, month: Month, offset: i32) -> (i32, Month) {
    let index = i64::from(year) * 12 + i64::from(u8::from(month)) - 1 + i64::from(offset);
    let year = i32::try_from(index.div_euclid(12))
        .unwrap_or(if index < 0 { i32::MIN } else { i32::MAX });
    // rem_euclid(12) is always in 0..12
    let month = Month::January.nth_next(u8::try_from(index.rem_euclid(12)).unwrap_or(0));
    (year, month)
}

/// Number of days in the month `month_offset` months away from `date`'s
/// month (0 is `date`'s own month, -1 the previous one, 1 the next one)
pub fn days_in_month(date: Date, month_offset: i32) -> u8 {
    let (year, month) = shift_month(date.year(), date.month(), month_offset);
    month.length(year)
}

/// Weekday of the first day of `date`'s month
pub fn first_weekday_of_month(date: Date) -> Weekday {
    date.weekday().nth_prev((date.day() - 1) % DAYS_IN_WEEK)
}

/// Weekday of the last day of `date`'s month
pub fn last_weekday_of_month(date: Date) -> Weekday {
    first_weekday_of_month(date).nth_next((days_in_month(date, 0) - 1) % DAYS_IN_WEEK)
}

/// Maps `weekday` to its zero-based column in a week that starts on
/// `week_start`
pub fn adjust_weekday(weekday: Weekday, week_start: Weekday) -> u8 {
    if week_start == Weekday::Sunday {
        return weekday.index0();
    }
    ((DAYS_IN_WEEK - week_start.index0()) + weekday.index0()) % DAYS_IN_WEEK
}

/// Moves `value` by `offset` months.
///
/// If `value`'s day does not exist in the destination month, it is clamped
/// to the destination's last day first, so Jan 31 + 1 month is the last day
/// of February.  The time of day and UTC offset are kept.
pub fn jump_month(value: OffsetDateTime, offset: i32) -> Result<OffsetDateTime, OutOfTimeError> {
    if offset == 0 {
        return Ok(value);
    }
    let (year, month) = shift_month(value.year(), value.month(), offset);
    let day = value.day().min(days_in_month(value.date(), offset));
    let date = Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)?;
    Ok(value.replace_date(date))
}

/// Moves `value` to `month` of `year`, clamping the day to the length of
/// that month and keeping the time of day and UTC offset
pub fn jump_year_month(
    value: OffsetDateTime,
    year: i32,
    month: Month,
) -> Result<OffsetDateTime, OutOfTimeError> {
    let day = value.day().min(month.length(year));
    let date = Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)?;
    Ok(value.replace_date(date))
}
