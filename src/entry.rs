use datepick::theme::{
    entry::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use datepick::PickerEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 16;
const OUTER_HEIGHT: u16 = 8;
const DIGITS: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TimeEntry;

impl StatefulWidget for TimeEntry {
    type State = TimeEntryState;

    /*
     * ................
     * .┌─ Minute… ──┐.
     * .│            │.
     * .│     MM     │.
     * .│            │.
     * .│  [ENTER]   │.
     * .└────────────┘.
     * ................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(format!(" {}… ", state.field.title()))
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Which half of the time of day is being typed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TimeField {
    Hour,
    Minute,
}

impl TimeField {
    fn title(self) -> &'static str {
        match self {
            TimeField::Hour => "Hour",
            TimeField::Minute => "Minute",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            TimeField::Hour => "H",
            TimeField::Minute => "M",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TimeEntryState {
    field: TimeField,
    digits: [Option<u8>; DIGITS],
    pos: usize,
}

impl TimeEntryState {
    pub(crate) fn new(field: TimeField) -> TimeEntryState {
        TimeEntryState {
            field,
            digits: [None; DIGITS],
            pos: 0,
        }
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Only the "[ENTER]" text and not its centering padding should
            // be underlined
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos > 0 {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        Line::from_iter(self.digits.iter().map(|dg| match dg {
            Some(d) => Span::styled(d.to_string(), BASE_STYLE),
            None => Span::styled(self.field.placeholder(), UNFILLED_CELL_STYLE),
        }))
    }

    /// The digits typed so far
    fn text(self) -> String {
        self.digits.iter().flatten().map(u8::to_string).collect()
    }

    pub(crate) fn handle_input(&mut self, input: TimeEntryInput) -> TimeEntryOutput {
        match (input, self.pos) {
            (TimeEntryInput::Digit(d), 0..DIGITS) if d < 10 => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                TimeEntryOutput::Ok
            }
            (TimeEntryInput::Backspace, 1..) => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                TimeEntryOutput::Ok
            }
            // A single digit is a complete hour or minute
            (TimeEntryInput::Enter, 1..) => {
                let text = self.text();
                TimeEntryOutput::Submit(match self.field {
                    TimeField::Hour => PickerEvent::Hour(text),
                    TimeField::Minute => PickerEvent::Minute(text),
                })
            }
            _ => TimeEntryOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TimeEntryInput {
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum TimeEntryOutput {
    Ok,
    Invalid,
    Submit(PickerEvent),
}
