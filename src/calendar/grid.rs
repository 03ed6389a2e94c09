use super::math::{
    adjust_weekday, days_in_month, first_weekday_of_month, last_weekday_of_month, DAYS_IN_WEEK,
};
use crate::picker::PickerEvent;
use time::{Date, Weekday};

/// Number of rows in a month grid.  Every month gets the same number of rows
/// so that the picker keeps a constant height while navigating.
pub const GRID_ROWS: usize = 7;

/// Number of cells in a month grid
pub const GRID_CELLS: usize = GRID_ROWS * DAYS_IN_WEEK as usize;

/// One day slot of a month grid
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GridCell {
    #[default]
    Blank,
    /// A day of the previous (`offset == -1`) or next (`offset == 1`) month
    /// that shares a week with the displayed month
    OtherMonthDay { day: u8, offset: i8 },
    CurrentMonthDay { day: u8, selected: bool },
}

impl GridCell {
    pub fn is_selected(&self) -> bool {
        matches!(self, GridCell::CurrentMonthDay { selected: true, .. })
    }

    /// Returns the event produced by clicking on this cell, if any
    pub fn event(&self) -> Option<PickerEvent> {
        match *self {
            GridCell::Blank => None,
            GridCell::OtherMonthDay { day, offset } => {
                Some(PickerEvent::AdjacentDay { day, offset })
            }
            GridCell::CurrentMonthDay { day, .. } => Some(PickerEvent::Day(day)),
        }
    }
}

/// Lays out the month containing `date` with `week_start` in the first
/// column, marking `date`'s day as selected
pub fn month_grid(date: Date, week_start: Weekday) -> [GridCell; GRID_CELLS] {
    let first = adjust_weekday(first_weekday_of_month(date), week_start);
    let last = adjust_weekday(last_weekday_of_month(date), week_start);
    let days = days_in_month(date, 0);
    let days_before = days_in_month(date, -1);
    let leading = (1..=first).map(|n| GridCell::OtherMonthDay {
        day: days_before - first + n,
        offset: -1,
    });
    let current = (1..=days).map(|day| GridCell::CurrentMonthDay {
        day,
        selected: day == date.day(),
    });
    let trailing = (1..DAYS_IN_WEEK - last).map(|day| GridCell::OtherMonthDay { day, offset: 1 });
    let mut cells = [GridCell::Blank; GRID_CELLS];
    for (slot, cell) in cells.iter_mut().zip(leading.chain(current).chain(trailing)) {
        *slot = cell;
    }
    cells
}
