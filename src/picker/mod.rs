//! The picker session: holds the value being picked, applies user input to
//! it, and reports the result.
mod config;
mod view;
pub use self::config::{CancelReports, CommitMode, Mode, PickerConfig, PickerStrings};
pub use self::view::PickerView;
use crate::calendar::math::{jump_month, jump_year_month, shift_month};
use crate::error::{Field, OutOfTimeError, PickerError};
use std::fmt;
use time::{Date, OffsetDateTime, Time};

/// Number of years before the initial year offered by the year selector
const YEARS_BEFORE: i32 = 100;

/// Number of years after the initial year offered by the year selector
const YEARS_AFTER: i32 = 10;

/// What the completion callback is told
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// An edit made under [`CommitMode::Live`]; the picker stays open
    Updated(OffsetDateTime),
    /// The user confirmed the value; the picker is closed
    Committed(OffsetDateTime),
    /// The user dismissed the picker; the picker is closed
    Cancelled(OffsetDateTime),
}

impl Outcome {
    pub fn value(&self) -> OffsetDateTime {
        match *self {
            Outcome::Updated(v) | Outcome::Committed(v) | Outcome::Cancelled(v) => v,
        }
    }

    /// `true` unless the picker was cancelled
    pub fn is_ok(&self) -> bool {
        !matches!(self, Outcome::Cancelled(_))
    }

    fn is_final(&self) -> bool {
        !matches!(self, Outcome::Updated(_))
    }
}

/// One user interaction, as delivered by the host
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PickerEvent {
    Day(u8),
    AdjacentDay { day: u8, offset: i8 },
    PreviousMonth,
    NextMonth,
    Month(String),
    Year(String),
    Hour(String),
    Minute(String),
    Now,
    Commit,
    Cancel,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Open,
    Committed,
    Cancelled,
}

/// Source of the current moment for [`Picker::now`]
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

impl<F: Fn() -> OffsetDateTime> Clock for F {
    fn now(&self) -> OffsetDateTime {
        self()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

type Callback = Box<dyn FnMut(Outcome)>;

/// A date (or date & time) picking session.
///
/// Every operation either succeeds, replacing the current value and
/// returning the regenerated view, or fails with a [`PickerError`] and leaves
/// the picker exactly as it was.  Once the picker has been committed or
/// cancelled, all operations fail with [`PickerError::Closed`].
///
/// The completion callback receives exactly one [`Outcome::Committed`] or
/// [`Outcome::Cancelled`] over the picker's lifetime; dropping a picker that
/// is still open cancels it.
pub struct Picker {
    value: OffsetDateTime,
    initial: OffsetDateTime,
    config: PickerConfig,
    view: PickerView,
    on_actioned: Callback,
    clock: Box<dyn Clock>,
    closed: Option<Outcome>,
}

impl Picker {
    pub fn new<F>(value: OffsetDateTime, config: PickerConfig, on_actioned: F) -> Picker
    where
        F: FnMut(Outcome) + 'static,
    {
        let view = PickerView::new(value, &config);
        Picker {
            value,
            initial: value,
            config,
            view,
            on_actioned: Box::new(on_actioned),
            clock: Box::new(SystemClock),
            closed: None,
        }
    }

    /// Use `clock` instead of the system clock for [`Picker::now`]
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Picker {
        self.clock = Box::new(clock);
        self
    }

    pub fn value(&self) -> OffsetDateTime {
        self.value
    }

    pub fn view(&self) -> &PickerView {
        &self.view
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        match self.closed {
            None | Some(Outcome::Updated(_)) => Status::Open,
            Some(Outcome::Committed(_)) => Status::Committed,
            Some(Outcome::Cancelled(_)) => Status::Cancelled,
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    /// The committed or cancelled outcome, once the picker is closed
    pub fn outcome(&self) -> Option<Outcome> {
        self.closed
    }

    /// Year selector options, most recent first
    pub fn year_options(&self) -> Vec<String> {
        let anchor = self.initial.year();
        ((anchor - YEARS_BEFORE)..=(anchor + YEARS_AFTER))
            .rev()
            .map(|y| y.to_string())
            .collect()
    }

    /// Month selector options, January first
    pub fn month_options(&self) -> &[String] {
        self.config.strings.month_names()
    }

    pub fn handle(&mut self, event: PickerEvent) -> Result<&PickerView, PickerError> {
        match event {
            PickerEvent::Day(day) => self.select_day(day),
            PickerEvent::AdjacentDay { day, offset } => self.select_adjacent_month_day(day, offset),
            PickerEvent::PreviousMonth => self.navigate_month(-1),
            PickerEvent::NextMonth => self.navigate_month(1),
            PickerEvent::Month(name) => self.select_month(&name),
            PickerEvent::Year(text) => self.select_year(&text),
            PickerEvent::Hour(text) => self.set_hour(&text),
            PickerEvent::Minute(text) => self.set_minute(&text),
            PickerEvent::Now => self.now(),
            PickerEvent::Commit => self.commit(),
            PickerEvent::Cancel => self.cancel(),
        }
    }

    /// Selects `day` of the displayed month
    pub fn select_day(&mut self, day: u8) -> Result<&PickerView, PickerError> {
        self.apply("select day", true, |value| {
            Date::from_calendar_date(value.year(), value.month(), day)
                .map(|date| value.replace_date(date))
                .map_err(|_| PickerError::UnknownDay { day, offset: 0 })
        })
    }

    /// Selects `day` of the month before (`offset == -1`) or after
    /// (`offset == 1`) the displayed one
    pub fn select_adjacent_month_day(
        &mut self,
        day: u8,
        offset: i8,
    ) -> Result<&PickerView, PickerError> {
        self.apply("select adjacent day", true, |value| {
            if !matches!(offset, -1 | 1) {
                return Err(PickerError::UnknownDay { day, offset });
            }
            let (year, month) = shift_month(value.year(), value.month(), offset.into());
            if day == 0 || day > month.length(year) {
                return Err(PickerError::UnknownDay { day, offset });
            }
            let date = Date::from_calendar_date(year, month, day)
                .map_err(|_| OutOfTimeError)?;
            Ok(value.replace_date(date))
        })
    }

    /// Moves `offset` months forwards or backwards, clamping the day
    pub fn navigate_month(&mut self, offset: i32) -> Result<&PickerView, PickerError> {
        self.apply("navigate month", false, |value| Ok(jump_month(value, offset)?))
    }

    /// Selects the month whose configured name is exactly `name`
    pub fn select_month(&mut self, name: &str) -> Result<&PickerView, PickerError> {
        let found = self.config.strings.find_month(name);
        self.apply("select month", false, |value| {
            let month = found.ok_or_else(|| PickerError::UnknownMonth(name.to_owned()))?;
            Ok(jump_year_month(value, value.year(), month)?)
        })
    }

    pub fn select_year(&mut self, text: &str) -> Result<&PickerView, PickerError> {
        self.apply("select year", false, |value| {
            let year = text.parse::<i32>().map_err(|_| PickerError::Parse {
                field: Field::Year,
                text: text.to_owned(),
            })?;
            Ok(jump_year_month(value, year, value.month())?)
        })
    }

    /// Sets the hour from one or two digits (0–23).  Seconds and subseconds
    /// are reset to zero.
    pub fn set_hour(&mut self, text: &str) -> Result<&PickerView, PickerError> {
        self.set_clock_field("set hour", ClockField::Hour, text)
    }

    /// Sets the minute from one or two digits (0–59).  Seconds and
    /// subseconds are reset to zero.
    pub fn set_minute(&mut self, text: &str) -> Result<&PickerView, PickerError> {
        self.set_clock_field("set minute", ClockField::Minute, text)
    }

    /// Jumps to the current moment, keeping the value's UTC offset
    pub fn now(&mut self) -> Result<&PickerView, PickerError> {
        let now = self.clock.now();
        self.apply("now", false, |value| Ok(now.to_offset(value.offset())))
    }

    pub fn commit(&mut self) -> Result<&PickerView, PickerError> {
        self.ensure_open()?;
        self.close(Outcome::Committed(self.value));
        Ok(&self.view)
    }

    pub fn cancel(&mut self) -> Result<&PickerView, PickerError> {
        self.ensure_open()?;
        let value = match self.config.cancel_reports {
            CancelReports::Initial => self.initial,
            CancelReports::Current => self.value,
        };
        self.close(Outcome::Cancelled(value));
        Ok(&self.view)
    }

    fn set_clock_field(
        &mut self,
        op: &str,
        field: ClockField,
        text: &str,
    ) -> Result<&PickerView, PickerError> {
        let mode = self.config.mode;
        self.apply(op, true, |value| {
            let n = parse_clock_field(mode, field, text)?;
            with_time_of_day(value, field, n)
        })
    }

    fn ensure_open(&self) -> Result<(), PickerError> {
        match self.status() {
            Status::Open => Ok(()),
            Status::Committed => Err(PickerError::Closed("committed")),
            Status::Cancelled => Err(PickerError::Closed("cancelled")),
        }
    }

    // `live` marks edits that are reported immediately under
    // `CommitMode::Live`
    fn apply<F>(&mut self, op: &str, live: bool, f: F) -> Result<&PickerView, PickerError>
    where
        F: FnOnce(OffsetDateTime) -> Result<OffsetDateTime, PickerError>,
    {
        let value = self
            .ensure_open()
            .and_then(|()| f(self.value))
            .inspect_err(|e| log::warn!("Rejected {op}: {e}"))?;
        log::debug!("{op}: {} -> {value}", self.value);
        self.value = value;
        self.view = PickerView::new(value, &self.config);
        if live && self.config.commit_mode == CommitMode::Live {
            (self.on_actioned)(Outcome::Updated(value));
        }
        Ok(&self.view)
    }

    fn close(&mut self, outcome: Outcome) {
        debug_assert!(outcome.is_final(), "only final outcomes close the picker");
        log::info!("Picker closed: {outcome:?}");
        self.closed = Some(outcome);
        (self.on_actioned)(outcome);
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("value", &self.value)
            .field("initial", &self.initial)
            .field("config", &self.config)
            .field("view", &self.view)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl Drop for Picker {
    fn drop(&mut self) {
        if self.is_open() {
            if let Err(e) = self.cancel() {
                log::warn!("Failed to cancel dropped picker: {e}");
            }
        }
    }
}

/// The editable halves of the time of day
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ClockField {
    Hour,
    Minute,
}

impl ClockField {
    fn max(self) -> u8 {
        match self {
            ClockField::Hour => 23,
            ClockField::Minute => 59,
        }
    }
}

impl From<ClockField> for Field {
    fn from(field: ClockField) -> Field {
        match field {
            ClockField::Hour => Field::Hour,
            ClockField::Minute => Field::Minute,
        }
    }
}

fn parse_clock_field(mode: Mode, field: ClockField, text: &str) -> Result<u8, PickerError> {
    if mode == Mode::DateOnly {
        return Err(PickerError::DateOnly);
    }
    let parse_error = || PickerError::Parse {
        field: field.into(),
        text: text.to_owned(),
    };
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    let value = text.parse::<u8>().map_err(|_| parse_error())?;
    if value > field.max() {
        return Err(PickerError::OutOfRange {
            field: field.into(),
            value,
        });
    }
    Ok(value)
}

// Replaces `field` with `n`, keeping the other half of the time of day
fn with_time_of_day(
    value: OffsetDateTime,
    field: ClockField,
    n: u8,
) -> Result<OffsetDateTime, PickerError> {
    let (hour, minute) = match field {
        ClockField::Hour => (n, value.minute()),
        ClockField::Minute => (value.hour(), n),
    };
    let time = Time::from_hms(hour, minute, 0).map_err(|_| PickerError::OutOfRange {
        field: field.into(),
        value: n,
    })?;
    Ok(value.replace_time(time))
}

/// Two-digit hour options, `00` through `23`
pub fn hour_options() -> Vec<String> {
    (0..=23).map(|h| format!("{h:02}")).collect()
}

/// Two-digit minute options, `00` through `59`
pub fn minute_options() -> Vec<String> {
    (0..=59).map(|m| format!("{m:02}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::GridCell;
    use std::cell::RefCell;
    use std::rc::Rc;
    use time::macros::datetime;

    type Reports = Rc<RefCell<Vec<Outcome>>>;

    fn recording_picker(value: OffsetDateTime, config: PickerConfig) -> (Picker, Reports) {
        let reports = Reports::default();
        let sink = Rc::clone(&reports);
        let picker = Picker::new(value, config, move |outcome| sink.borrow_mut().push(outcome));
        (picker, reports)
    }

    #[test]
    fn test_navigate_without_clamping() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-29 12:00 UTC), PickerConfig::date());
        let view = picker.navigate_month(1).unwrap();
        assert_eq!(view.value(), datetime!(2024-03-29 12:00 UTC));
        assert_eq!(view.month_label(), "March");
        assert_eq!(view.year_label(), "2024");
    }

    #[test]
    fn test_navigate_with_clamping() {
        let (mut picker, _) = recording_picker(datetime!(2024-01-31 09:30 UTC), PickerConfig::date());
        picker.handle(PickerEvent::NextMonth).unwrap();
        assert_eq!(picker.value(), datetime!(2024-02-29 09:30 UTC));
        picker.handle(PickerEvent::PreviousMonth).unwrap();
        assert_eq!(picker.value(), datetime!(2024-01-29 09:30 UTC));
    }

    #[test]
    fn test_navigate_across_year() {
        let (mut picker, _) = recording_picker(datetime!(2024-12-31 00:00 UTC), PickerConfig::date());
        let view = picker.navigate_month(1).unwrap();
        assert_eq!(view.month_label(), "January");
        assert_eq!(view.year_label(), "2025");
    }

    #[test]
    fn test_select_day_marks_one_cell() {
        let (mut picker, _) = recording_picker(datetime!(2024-07-03 10:00 UTC), PickerConfig::date());
        let view = picker.select_day(15).unwrap();
        let selected = view.cells().iter().filter(|c| c.is_selected()).collect::<Vec<_>>();
        assert_eq!(
            selected,
            [&GridCell::CurrentMonthDay {
                day: 15,
                selected: true
            }]
        );
        assert_eq!(view.cells().iter().filter(|c| !c.is_selected()).count(), 48);
        assert_eq!(picker.value(), datetime!(2024-07-15 10:00 UTC));
    }

    #[test]
    fn test_select_missing_day() {
        let (mut picker, _) = recording_picker(datetime!(2023-02-10 10:00 UTC), PickerConfig::date());
        let before = picker.view().clone();
        let e = picker.select_day(29).unwrap_err();
        assert_eq!(e, PickerError::UnknownDay { day: 29, offset: 0 });
        assert!(e.is_validation_failure());
        assert_eq!(picker.view(), &before);
    }

    #[test]
    fn test_select_adjacent_month_day() {
        let (mut picker, _) = recording_picker(datetime!(2024-03-10 08:00 +1), PickerConfig::date());
        let view = picker
            .handle(PickerEvent::AdjacentDay {
                day: 29,
                offset: -1,
            })
            .unwrap();
        assert_eq!(view.value(), datetime!(2024-02-29 08:00 +1));
        assert_eq!(view.month_label(), "February");
        picker.select_adjacent_month_day(2, 1).unwrap();
        assert_eq!(picker.value(), datetime!(2024-03-02 08:00 +1));
    }

    #[test]
    fn test_select_adjacent_month_day_rejected() {
        let (mut picker, _) = recording_picker(datetime!(2024-03-10 08:00 UTC), PickerConfig::date());
        assert_eq!(
            picker.select_adjacent_month_day(30, -1),
            Err(PickerError::UnknownDay {
                day: 30,
                offset: -1
            })
        );
        assert_eq!(
            picker.select_adjacent_month_day(1, 2),
            Err(PickerError::UnknownDay { day: 1, offset: 2 })
        );
        assert_eq!(
            picker.select_adjacent_month_day(0, 1),
            Err(PickerError::UnknownDay { day: 0, offset: 1 })
        );
        assert_eq!(picker.value(), datetime!(2024-03-10 08:00 UTC));
    }

    #[test]
    fn test_clicking_cells() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-15 12:00 UTC), PickerConfig::date());
        // With weeks starting on Monday, the first cell of February 2024 is
        // January 29th
        let event = picker.view().cells()[0].event().unwrap();
        picker.handle(event).unwrap();
        assert_eq!(picker.value(), datetime!(2024-01-29 12:00 UTC));
        assert_eq!(picker.view().cells()[0].event(), Some(PickerEvent::Day(1)));
    }

    #[test]
    fn test_select_month() {
        let (mut picker, _) = recording_picker(datetime!(2023-05-31 18:45:12 UTC), PickerConfig::date());
        let view = picker.select_month("June").unwrap();
        assert_eq!(view.value(), datetime!(2023-06-30 18:45:12 UTC));
        assert_eq!(view.month_label(), "June");
        let before = picker.view().clone();
        assert_eq!(
            picker.select_month("Juno"),
            Err(PickerError::UnknownMonth(String::from("Juno")))
        );
        assert_eq!(picker.view(), &before);
    }

    #[test]
    fn test_select_year() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-29 07:00 UTC), PickerConfig::date());
        let view = picker.handle(PickerEvent::Year(String::from("2023"))).unwrap();
        assert_eq!(view.value(), datetime!(2023-02-28 07:00 UTC));
        assert_eq!(view.year_label(), "2023");
    }

    #[test]
    fn test_select_unparsable_year() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-29 07:00 UTC), PickerConfig::date());
        let before = picker.view().clone();
        let e = picker.select_year("abc").unwrap_err();
        assert_eq!(
            e,
            PickerError::Parse {
                field: Field::Year,
                text: String::from("abc")
            }
        );
        assert_eq!(picker.view(), &before);
        assert_eq!(picker.view().year_label(), "2024");
        assert_eq!(picker.view().month_label(), "February");
    }

    #[test]
    fn test_select_year_out_of_time() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-29 07:00 UTC), PickerConfig::date());
        assert_eq!(
            picker.select_year("10000"),
            Err(PickerError::OutOfTime(OutOfTimeError))
        );
        assert_eq!(picker.value(), datetime!(2024-02-29 07:00 UTC));
    }

    #[test]
    fn test_year_options() {
        let (mut picker, _) = recording_picker(datetime!(2024-02-29 07:00 UTC), PickerConfig::date());
        picker.select_year("1990").unwrap();
        let years = picker.year_options();
        assert_eq!(years.len(), 111);
        assert_eq!(years.first().map(String::as_str), Some("2034"));
        assert_eq!(years.last().map(String::as_str), Some("1924"));
        assert_eq!(picker.month_options().len(), 12);
    }

    #[test]
    fn test_set_time_of_day() {
        let (mut picker, reports) = recording_picker(
            datetime!(2024-06-01 10:20:30.25 +2),
            PickerConfig::date_time(),
        );
        let view = picker.set_hour("7").unwrap();
        assert_eq!(view.hour_text(), Some("07"));
        assert_eq!(view.minute_text(), Some("20"));
        assert_eq!(picker.value(), datetime!(2024-06-01 07:20 +2));
        picker.handle(PickerEvent::Minute(String::from("05"))).unwrap();
        assert_eq!(picker.value(), datetime!(2024-06-01 07:05 +2));
        assert_eq!(
            *reports.borrow(),
            [
                Outcome::Updated(datetime!(2024-06-01 07:20 +2)),
                Outcome::Updated(datetime!(2024-06-01 07:05 +2)),
            ]
        );
    }

    #[test]
    fn test_reject_bad_minute() {
        let (mut picker, reports) =
            recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date_time());
        let before = picker.view().clone();
        let e = picker.set_minute("61").unwrap_err();
        assert_eq!(
            e,
            PickerError::OutOfRange {
                field: Field::Minute,
                value: 61
            }
        );
        assert!(e.is_validation_failure());
        assert_eq!(picker.view(), &before);
        assert_eq!(picker.value(), datetime!(2024-06-01 10:20 UTC));
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_reject_bad_hour_text() {
        let (mut picker, _) = recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date_time());
        for text in ["", "24", "123", "1a", "-1", "+5", " 5"] {
            let e = picker.set_hour(text).unwrap_err();
            assert!(e.is_validation_failure(), "{text:?} was not rejected as input");
        }
        assert_eq!(picker.view().hour_text(), Some("10"));
    }

    #[test]
    fn test_date_only_has_no_time() {
        let (mut picker, _) = recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date());
        assert_eq!(picker.view().hour_text(), None);
        assert_eq!(picker.set_hour("11"), Err(PickerError::DateOnly));
        assert!(!PickerError::DateOnly.is_validation_failure());
    }

    #[test]
    fn test_live_mode_reports_day_clicks() {
        let (mut picker, reports) =
            recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date_time());
        picker.select_day(3).unwrap();
        picker.navigate_month(1).unwrap();
        assert_eq!(
            *reports.borrow(),
            [Outcome::Updated(datetime!(2024-06-03 10:20 UTC))]
        );
        assert!(picker.is_open());
    }

    #[test]
    fn test_confirm_mode_reports_once() {
        let (mut picker, reports) = recording_picker(
            datetime!(2024-06-01 10:20 UTC),
            PickerConfig::date_time().commit_mode(CommitMode::Confirm),
        );
        picker.select_day(3).unwrap();
        picker.set_hour("11").unwrap();
        assert!(reports.borrow().is_empty());
        picker.handle(PickerEvent::Commit).unwrap();
        assert_eq!(picker.status(), Status::Committed);
        assert_eq!(
            picker.select_day(4),
            Err(PickerError::Closed("committed"))
        );
        assert_eq!(picker.cancel(), Err(PickerError::Closed("committed")));
        drop(picker);
        assert_eq!(
            *reports.borrow(),
            [Outcome::Committed(datetime!(2024-06-03 11:20 UTC))]
        );
    }

    #[test]
    fn test_cancel_reports_initial() {
        let (mut picker, reports) = recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date());
        picker.select_day(9).unwrap();
        picker.cancel().unwrap();
        assert_eq!(picker.status(), Status::Cancelled);
        let outcome = picker.outcome().unwrap();
        assert!(!outcome.is_ok());
        assert_eq!(outcome.value(), datetime!(2024-06-01 10:20 UTC));
        assert_eq!(*reports.borrow(), [outcome]);
    }

    #[test]
    fn test_cancel_reports_current() {
        let (mut picker, reports) = recording_picker(
            datetime!(2024-06-01 10:20 UTC),
            PickerConfig::date().cancel_reports(CancelReports::Current),
        );
        picker.select_day(9).unwrap();
        picker.handle(PickerEvent::Cancel).unwrap();
        assert_eq!(
            *reports.borrow(),
            [Outcome::Cancelled(datetime!(2024-06-09 10:20 UTC))]
        );
    }

    #[test]
    fn test_drop_cancels_open_picker() {
        let (mut picker, reports) = recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date());
        picker.navigate_month(-1).unwrap();
        drop(picker);
        assert_eq!(
            *reports.borrow(),
            [Outcome::Cancelled(datetime!(2024-06-01 10:20 UTC))]
        );
    }

    #[test]
    fn test_now_keeps_offset() {
        let (picker, _) = recording_picker(datetime!(2020-01-01 00:00 +2), PickerConfig::date_time());
        let mut picker = picker.with_clock(|| datetime!(2024-06-01 10:20:30 UTC));
        let view = picker.handle(PickerEvent::Now).unwrap();
        assert_eq!(view.value(), datetime!(2024-06-01 12:20:30 +2));
        assert_eq!(view.hour_text(), Some("12"));
        assert_eq!(view.minute_text(), Some("20"));
        assert_eq!(view.month_label(), "June");
        assert_eq!(view.year_label(), "2024");
    }

    #[test]
    fn test_live_mode_reports_adjacent_day_clicks() {
        let (mut picker, reports) =
            recording_picker(datetime!(2024-03-10 08:00 UTC), PickerConfig::date_time());
        picker.select_adjacent_month_day(29, -1).unwrap();
        picker
            .handle(PickerEvent::AdjacentDay { day: 1, offset: 1 })
            .unwrap();
        assert_eq!(
            *reports.borrow(),
            [
                Outcome::Updated(datetime!(2024-02-29 08:00 UTC)),
                Outcome::Updated(datetime!(2024-03-01 08:00 UTC)),
            ]
        );
    }

    #[test]
    fn test_confirm_mode_ignores_adjacent_day_clicks() {
        let (mut picker, reports) =
            recording_picker(datetime!(2024-03-10 08:00 UTC), PickerConfig::date());
        picker.select_adjacent_month_day(29, -1).unwrap();
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_clock_errors_name_their_field() {
        let (mut picker, _) =
            recording_picker(datetime!(2024-06-01 10:20 UTC), PickerConfig::date_time());
        assert_eq!(
            picker.set_hour("24"),
            Err(PickerError::OutOfRange {
                field: Field::Hour,
                value: 24
            })
        );
        assert_eq!(
            picker.set_minute("6x"),
            Err(PickerError::Parse {
                field: Field::Minute,
                text: String::from("6x")
            })
        );
        let value = datetime!(2024-06-01 10:20:30 UTC);
        assert_eq!(
            with_time_of_day(value, ClockField::Minute, 60),
            Err(PickerError::OutOfRange {
                field: Field::Minute,
                value: 60
            })
        );
        assert_eq!(
            with_time_of_day(value, ClockField::Minute, 45),
            Ok(datetime!(2024-06-01 10:45 UTC))
        );
    }

    #[test]
    fn test_option_lists() {
        let hours = hour_options();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], "00");
        assert_eq!(hours[23], "23");
        let minutes = minute_options();
        assert_eq!(minutes.len(), 60);
        assert_eq!(minutes[59], "59");
    }
}
