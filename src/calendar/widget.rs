use super::grid::{GridCell, GRID_ROWS};
use super::math::DAYS_IN_WEEK;
use crate::picker::{hour_options, minute_options, Picker, PickerStrings, PickerView};
use crate::select::{SelectEntry, SelectField, Selector, WideSelect};
use crate::theme::{
    BASE_STYLE, FIELD_STYLE, OTHER_MONTH_STYLE, SELECTED_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::prelude::*;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the picker in columns
pub const PANEL_WIDTH: u16 = DAY_WIDTH * DAYS_IN_WEEK as u16;

/// Number of lines taken up by the title, its rule, and the weekday names
const HEADER_LINES: u16 = 3;

/// Line on which the time of day is shown in date & time pickers
const TIME_LINE: u16 = HEADER_LINES + GRID_ROWS as u16;

const ACS_HLINE: char = '─';
const PREV_ARROW: &str = "◀";
const NEXT_ARROW: &str = "▶";

/// Draws a [`PickerView`]: month & year title between the navigation
/// arrows, the weekday names, the 7×7 day grid, and (for date & time
/// pickers) the time-of-day inputs with a "Now" button
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PickerPanel<'a> {
    view: &'a PickerView,
    strings: &'a PickerStrings,
}

impl<'a> PickerPanel<'a> {
    pub fn new(view: &'a PickerView, strings: &'a PickerStrings) -> Self {
        PickerPanel { view, strings }
    }

    pub fn for_picker(picker: &'a Picker) -> Self {
        PickerPanel::new(picker.view(), picker.config().labels())
    }

    /// Number of lines needed to draw the panel
    pub fn height(&self) -> u16 {
        if self.view.hour_text().is_some() {
            TIME_LINE + 1
        } else {
            TIME_LINE
        }
    }

    pub fn width(&self) -> u16 {
        PANEL_WIDTH
    }
}

impl Widget for PickerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(self.view.month_label(), self.view.year_label());
        canvas.draw_weekdays(self.view.weekday_labels());
        for (i, cell) in std::iter::zip(0u16.., self.view.cells()) {
            canvas.draw_cell(i, *cell);
        }
        if let (Some(hour), Some(minute)) = (self.view.hour_text(), self.view.minute_text()) {
            canvas.draw_time(
                self.strings.time_label(),
                hour,
                minute,
                self.strings.now_label(),
            );
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, month: &str, year: &str) {
        self.mvprint(0, 0, PREV_ARROW, TITLE_STYLE);
        let title = format!("{month} {year}");
        let width = u16::try_from(Span::raw(title.as_str()).width()).unwrap_or(u16::MAX);
        self.mvprint(0, PANEL_WIDTH.saturating_sub(width) / 2, title, TITLE_STYLE);
        self.mvprint(0, PANEL_WIDTH - 1, NEXT_ARROW, TITLE_STYLE);
        self.hline(1, 0, ACS_HLINE, PANEL_WIDTH);
    }

    fn draw_weekdays(&mut self, labels: &[String; 7]) {
        for (col, label) in std::iter::zip(0u16.., labels) {
            // Leave at least one blank column between names
            let short = label
                .chars()
                .take(usize::from(DAY_WIDTH - 1))
                .collect::<String>();
            self.mvprint(2, col * DAY_WIDTH, short, WEEKDAY_STYLE);
        }
    }

    // `index` is the cell's position in the grid, counting row by row
    fn draw_cell(&mut self, index: u16, cell: GridCell) {
        let days_in_week = u16::from(DAYS_IN_WEEK);
        let y = HEADER_LINES + index / days_in_week;
        let x = (index % days_in_week) * DAY_WIDTH;
        match cell {
            GridCell::Blank => (),
            GridCell::OtherMonthDay { day, .. } => {
                self.mvprint(y, x, format!(" {day:2} "), OTHER_MONTH_STYLE);
            }
            GridCell::CurrentMonthDay {
                day,
                selected: false,
            } => {
                self.mvprint(y, x, format!(" {day:02} "), BASE_STYLE);
            }
            GridCell::CurrentMonthDay {
                day,
                selected: true,
            } => {
                self.mvprint(y, x, format!("[{day:02}]"), SELECTED_STYLE);
            }
        }
    }

    fn draw_time(&mut self, label: &str, hour: &str, minute: &str, now: &str) {
        let x = self.mvprint(TIME_LINE, 0, label, BASE_STYLE).saturating_add(1);
        let hour = WideSelect::new(SelectEntry::new(hour_options()).with_text(hour));
        let x = self.field(TIME_LINE, x, &hour);
        let x = self.mvprint(TIME_LINE, x, ":", BASE_STYLE);
        let minute = WideSelect::new(SelectEntry::new(minute_options()).with_text(minute));
        self.field(TIME_LINE, x, &minute);
        let button = format!("[{now}]");
        let width = u16::try_from(Span::raw(button.as_str()).width()).unwrap_or(u16::MAX);
        self.mvprint(TIME_LINE, PANEL_WIDTH.saturating_sub(width), button, FIELD_STYLE);
    }

    // Returns the column just after the field
    fn field<S: Selector>(&mut self, y: u16, x: u16, selector: &S) -> u16 {
        let field = SelectField::new(selector).style(FIELD_STYLE);
        let width = field.width();
        if y < self.area.height && x < self.area.width {
            let rect = Rect {
                x: x + self.area.x,
                y: y + self.area.y,
                width: (self.area.width - x).min(width),
                height: 1,
            };
            field.render(rect, self.buf);
        }
        x.saturating_add(width)
    }

    // Returns the column just after the printed text
    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) -> u16 {
        let text = s.as_ref();
        let width = u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX);
        if y < self.area.height && x < self.area.width {
            // Clip to the panel's area; writing outside of the buffer would
            // panic
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                text,
                usize::from(self.area.width - x),
                style,
            );
        }
        x.saturating_add(width)
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), BASE_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerConfig;
    use time::macros::datetime;
    use time::Weekday;

    fn rendered_lines(panel: PickerPanel<'_>) -> Vec<String> {
        let area = Rect::new(0, 0, panel.width(), panel.height());
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content
            .chunks(usize::from(area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_date_panel() {
        let picker = Picker::new(
            datetime!(2024-02-15 12:00 UTC),
            PickerConfig::date().week_start(Weekday::Monday),
            |_| (),
        );
        let panel = PickerPanel::for_picker(&picker);
        assert_eq!(panel.height(), 10);
        assert_eq!(
            rendered_lines(panel),
            [
                "◀      February 2024       ▶",
                "────────────────────────────",
                "Mon Tue Wed Thu Fri Sat Sun ",
                " 29  30  31  01  02  03  04 ",
                " 05  06  07  08  09  10  11 ",
                " 12  13  14 [15] 16  17  18 ",
                " 19  20  21  22  23  24  25 ",
                " 26  27  28  29   1   2   3 ",
                "                            ",
                "                            ",
            ]
        );
    }

    #[test]
    fn test_date_time_panel() {
        let picker = Picker::new(
            datetime!(2024-06-01 07:05 +2),
            PickerConfig::date_time().week_start(Weekday::Sunday),
            |_| (),
        );
        let panel = PickerPanel::for_picker(&picker);
        assert_eq!(panel.height(), 11);
        assert_eq!(
            rendered_lines(panel),
            [
                "◀        June 2024         ▶",
                "────────────────────────────",
                "Sun Mon Tue Wed Thu Fri Sat ",
                " 26  27  28  29  30  31 [01]",
                " 02  03  04  05  06  07  08 ",
                " 09  10  11  12  13  14  15 ",
                " 16  17  18  19  20  21  22 ",
                " 23  24  25  26  27  28  29 ",
                " 30   1   2   3   4   5   6 ",
                "                            ",
                "Time [07   ▾]:[05   ▾] [Now]",
            ]
        );
    }

    #[test]
    fn test_styles() {
        let picker = Picker::new(datetime!(2024-02-15 12:00 UTC), PickerConfig::date(), |_| ());
        let area = Rect::new(0, 0, PANEL_WIDTH, 10);
        let mut buf = Buffer::empty(area);
        PickerPanel::for_picker(&picker).render(area, &mut buf);
        assert_eq!(buf[(12, 5)].style(), SELECTED_STYLE);
        assert_eq!(buf[(0, 3)].style(), OTHER_MONTH_STYLE);
        assert_eq!(buf[(12, 3)].style(), BASE_STYLE);
        assert_eq!(buf[(0, 2)].style(), WEEKDAY_STYLE);
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let picker = Picker::new(datetime!(2024-02-15 12:00 UTC), PickerConfig::date_time(), |_| ());
        let area = Rect::new(2, 1, 9, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 6));
        PickerPanel::for_picker(&picker).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), PREV_ARROW);
    }
}
