use super::config::{Mode, PickerConfig};
use crate::calendar::{month_grid, GridCell, GRID_CELLS};
use time::OffsetDateTime;

/// Everything a host needs to draw the picker, derived from the picker's
/// current value.  A new view is built after every change; views are never
/// edited in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickerView {
    value: OffsetDateTime,
    cells: [GridCell; GRID_CELLS],
    weekdays: [String; 7],
    month: String,
    year: String,
    time: Option<(String, String)>,
}

impl PickerView {
    pub(super) fn new(value: OffsetDateTime, config: &PickerConfig) -> PickerView {
        let strings = &config.strings;
        let mut weekday = config.week_start;
        let weekdays = std::array::from_fn(|_| {
            let name = strings.weekday_name(weekday).to_owned();
            weekday = weekday.next();
            name
        });
        let time = (config.mode == Mode::DateAndTime)
            .then(|| (format!("{:02}", value.hour()), format!("{:02}", value.minute())));
        PickerView {
            value,
            cells: month_grid(value.date(), config.week_start),
            weekdays,
            month: strings.month_name(value.month()).to_owned(),
            year: value.year().to_string(),
            time,
        }
    }

    pub fn value(&self) -> OffsetDateTime {
        self.value
    }

    pub fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.cells
    }

    /// Weekday names in column order
    pub fn weekday_labels(&self) -> &[String; 7] {
        &self.weekdays
    }

    pub fn month_label(&self) -> &str {
        &self.month
    }

    pub fn year_label(&self) -> &str {
        &self.year
    }

    /// Two-digit hour text; `None` for date-only pickers
    pub fn hour_text(&self) -> Option<&str> {
        self.time.as_ref().map(|(hour, _)| hour.as_str())
    }

    /// Two-digit minute text; `None` for date-only pickers
    pub fn minute_text(&self) -> Option<&str> {
        self.time.as_ref().map(|(_, minute)| minute.as_str())
    }
}
