use time::{Month, Weekday};

/// Whether the picker edits a date or a date and a time of day
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    DateOnly,
    DateAndTime,
}

/// When edits are reported to the completion callback
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CommitMode {
    /// Only commit and cancel are reported
    Confirm,
    /// Day clicks and hour/minute edits are also reported, as
    /// [`Outcome::Updated`](super::Outcome::Updated), as soon as they happen
    Live,
}

/// Which value a cancelled picker reports
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CancelReports {
    /// The value the picker was created with
    #[default]
    Initial,
    /// The last value edited before cancelling
    Current,
}

/// Labels shown by the picker.  Month names double as the options of the
/// month selector, so [`PickerStrings::find_month`] must be given one of
/// them verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickerStrings {
    months: [String; 12],
    // Sunday first
    weekdays: [String; 7],
    now: String,
    time: String,
}

impl PickerStrings {
    pub fn new(months: [String; 12], weekdays: [String; 7], now: String, time: String) -> Self {
        PickerStrings {
            months,
            weekdays,
            now,
            time,
        }
    }

    pub fn month_name(&self, month: Month) -> &str {
        &self.months[usize::from(u8::from(month) - 1)]
    }

    pub fn month_names(&self) -> &[String] {
        &self.months
    }

    /// Looks up a month by its exact name
    pub fn find_month(&self, name: &str) -> Option<Month> {
        let index = self.months.iter().position(|s| s == name)?;
        u8::try_from(index).ok().map(|i| Month::January.nth_next(i))
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &str {
        &self.weekdays[usize::from(weekday.number_days_from_sunday())]
    }

    pub fn now_label(&self) -> &str {
        &self.now
    }

    pub fn time_label(&self) -> &str {
        &self.time
    }
}

impl Default for PickerStrings {
    fn default() -> PickerStrings {
        PickerStrings {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
            now: String::from("Now"),
            time: String::from("Time"),
        }
    }
}

/// Construction-time settings of a [`Picker`](super::Picker).  None of them
/// can change once the picker exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickerConfig {
    pub(super) mode: Mode,
    pub(super) week_start: Weekday,
    pub(super) commit_mode: CommitMode,
    pub(super) cancel_reports: CancelReports,
    pub(super) strings: PickerStrings,
}

impl PickerConfig {
    /// A date-only picker reporting only on commit or cancel
    pub fn date() -> PickerConfig {
        PickerConfig {
            mode: Mode::DateOnly,
            week_start: Weekday::Monday,
            commit_mode: CommitMode::Confirm,
            cancel_reports: CancelReports::default(),
            strings: PickerStrings::default(),
        }
    }

    /// A date & time picker reporting every edit as it happens
    pub fn date_time() -> PickerConfig {
        PickerConfig {
            mode: Mode::DateAndTime,
            commit_mode: CommitMode::Live,
            ..PickerConfig::date()
        }
    }

    pub fn week_start(mut self, weekday: Weekday) -> Self {
        self.week_start = weekday;
        self
    }

    pub fn commit_mode(mut self, commit_mode: CommitMode) -> Self {
        self.commit_mode = commit_mode;
        self
    }

    pub fn cancel_reports(mut self, cancel_reports: CancelReports) -> Self {
        self.cancel_reports = cancel_reports;
        self
    }

    pub fn strings(mut self, strings: PickerStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn first_weekday(&self) -> Weekday {
        self.week_start
    }

    pub fn labels(&self) -> &PickerStrings {
        &self.strings
    }
}
