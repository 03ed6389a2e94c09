use datepick::select::{SelectEntry, Selector};
use datepick::theme::{BASE_STYLE, SELECTED_STYLE};
use datepick::PickerEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    widgets::{Block, Clear, List, ListState, StatefulWidget, Widget},
};

/// Maximum number of options shown at once
const VISIBLE_OPTIONS: u16 = 10;

/// Number of options skipped by PAGE UP & PAGE DOWN
const PAGE: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Dropdown;

impl StatefulWidget for Dropdown {
    type State = DropdownState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = state.entry.min_width().saturating_add(2);
        let shown = u16::try_from(state.entry.options().len()).unwrap_or(u16::MAX);
        let height = shown.min(VISIBLE_OPTIONS).saturating_add(2);
        let [list_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [list_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(list_area);
        Clear.render(list_area, buf);
        let list = List::new(state.entry.options().iter().map(String::as_str))
            .block(
                Block::bordered()
                    .title(state.target.title())
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .highlight_style(SELECTED_STYLE);
        StatefulWidget::render(list, list_area, buf, &mut state.list);
    }
}

/// Which picker selector the dropdown is for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DropdownTarget {
    Month,
    Year,
}

impl DropdownTarget {
    fn title(self) -> &'static str {
        match self {
            DropdownTarget::Month => " Month ",
            DropdownTarget::Year => " Year ",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DropdownState {
    target: DropdownTarget,
    entry: SelectEntry,
    list: ListState,
}

impl DropdownState {
    /// Opens a dropdown with `current` highlighted, or the first option if
    /// `current` is not among `options`
    pub(crate) fn new(target: DropdownTarget, options: Vec<String>, current: &str) -> Self {
        let entry = SelectEntry::new(options).with_text(current);
        let list = ListState::default().with_selected(Some(entry.position().unwrap_or(0)));
        DropdownState {
            target,
            entry,
            list,
        }
    }

    fn highlighted(&self) -> usize {
        self.list.selected().unwrap_or(0)
    }

    fn last(&self) -> usize {
        self.entry.options().len().saturating_sub(1)
    }

    fn highlight(&mut self, index: usize) -> DropdownOutput {
        if index == self.highlighted() {
            DropdownOutput::Invalid
        } else {
            self.list.select(Some(index));
            DropdownOutput::Ok
        }
    }

    pub(crate) fn handle_input(&mut self, input: DropdownInput) -> DropdownOutput {
        let current = self.highlighted();
        match input {
            DropdownInput::Up => self.highlight(current.saturating_sub(1)),
            DropdownInput::Down => self.highlight(current.saturating_add(1).min(self.last())),
            DropdownInput::PageUp => self.highlight(current.saturating_sub(PAGE)),
            DropdownInput::PageDown => {
                self.highlight(current.saturating_add(PAGE).min(self.last()))
            }
            DropdownInput::First => self.highlight(0),
            DropdownInput::Last => self.highlight(self.last()),
            DropdownInput::Choose => match self.entry.choose(current) {
                Some(text) => {
                    let text = text.to_owned();
                    DropdownOutput::Chosen(match self.target {
                        DropdownTarget::Month => PickerEvent::Month(text),
                        DropdownTarget::Year => PickerEvent::Year(text),
                    })
                }
                None => DropdownOutput::Invalid,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DropdownInput {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
    Choose,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DropdownOutput {
    Ok,
    Invalid,
    Chosen(PickerEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<String> {
        ["January", "February", "March", "April"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn test_starts_at_current() {
        let mut state = DropdownState::new(DropdownTarget::Month, months(), "March");
        assert_eq!(
            state.handle_input(DropdownInput::Choose),
            DropdownOutput::Chosen(PickerEvent::Month(String::from("March")))
        );
    }

    #[test]
    fn test_unknown_current_starts_at_top() {
        let mut state = DropdownState::new(DropdownTarget::Month, months(), "Smarch");
        assert_eq!(state.handle_input(DropdownInput::Up), DropdownOutput::Invalid);
        assert_eq!(state.handle_input(DropdownInput::Down), DropdownOutput::Ok);
        assert_eq!(
            state.handle_input(DropdownInput::Choose),
            DropdownOutput::Chosen(PickerEvent::Month(String::from("February")))
        );
    }

    #[test]
    fn test_movement_is_bounded() {
        let mut state = DropdownState::new(DropdownTarget::Year, months(), "January");
        assert_eq!(state.handle_input(DropdownInput::PageDown), DropdownOutput::Ok);
        assert_eq!(state.handle_input(DropdownInput::Down), DropdownOutput::Invalid);
        assert_eq!(state.handle_input(DropdownInput::Last), DropdownOutput::Invalid);
        assert_eq!(state.handle_input(DropdownInput::First), DropdownOutput::Ok);
        assert_eq!(state.handle_input(DropdownInput::PageUp), DropdownOutput::Invalid);
        assert_eq!(
            state.handle_input(DropdownInput::Choose),
            DropdownOutput::Chosen(PickerEvent::Year(String::from("January")))
        );
    }

    #[test]
    fn test_render() {
        let mut state = DropdownState::new(DropdownTarget::Month, months(), "February");
        let area = Rect::new(0, 0, 12, 6);
        let mut buf = Buffer::empty(area);
        Dropdown.render(area, &mut buf, &mut state);
        let mut expected = Buffer::with_lines([
            "┌─ Month ──┐",
            "│January   │",
            "│February  │",
            "│March     │",
            "│April     │",
            "└──────────┘",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(1, 2, 10, 1), SELECTED_STYLE);
        assert_eq!(buf, expected);
    }
}
