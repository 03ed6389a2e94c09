use crate::dropdown::{Dropdown, DropdownInput, DropdownOutput, DropdownState, DropdownTarget};
use crate::entry::{TimeEntry, TimeEntryInput, TimeEntryOutput, TimeEntryState, TimeField};
use crate::help::Help;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use datepick::calendar::PickerPanel;
use datepick::picker::Mode;
use datepick::theme::BASE_STYLE;
use datepick::{Outcome, Picker, PickerEvent};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::{Date, Duration};

#[derive(Debug)]
pub(crate) struct App {
    picker: Picker,
    state: AppState,
}

impl App {
    pub(crate) fn new(picker: Picker) -> App {
        App {
            picker,
            state: AppState::Picking,
        }
    }

    /// Runs until the picker is committed or cancelled and returns how it
    /// ended
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<Outcome> {
        loop {
            if let Some(outcome) = self.picker.outcome() {
                return Ok(outcome);
            }
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.dispatch(PickerEvent::Cancel);
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or the picker
    // rejected the resulting event
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Picking => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
                KeyCode::Char('[') | KeyCode::PageUp => self.dispatch(PickerEvent::PreviousMonth),
                KeyCode::Char(']') | KeyCode::PageDown => self.dispatch(PickerEvent::NextMonth),
                KeyCode::Char('m') => {
                    let options = self.picker.month_options().to_vec();
                    let current = self.picker.view().month_label().to_owned();
                    self.open_dropdown(DropdownTarget::Month, options, &current)
                }
                KeyCode::Char('y') => {
                    let options = self.picker.year_options();
                    let current = self.picker.view().year_label().to_owned();
                    self.open_dropdown(DropdownTarget::Year, options, &current)
                }
                KeyCode::Char('H') => self.open_entry(TimeField::Hour),
                KeyCode::Char('M') => self.open_entry(TimeField::Minute),
                KeyCode::Char('.') | KeyCode::Home => self.dispatch(PickerEvent::Now),
                KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(PickerEvent::Commit),
                KeyCode::Char('q') | KeyCode::Esc => self.dispatch(PickerEvent::Cancel),
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Choosing(state) => {
                let output = match key {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.state = AppState::Picking;
                        return true;
                    }
                    KeyCode::Char('k') | KeyCode::Up => state.handle_input(DropdownInput::Up),
                    KeyCode::Char('j') | KeyCode::Down => state.handle_input(DropdownInput::Down),
                    KeyCode::PageUp => state.handle_input(DropdownInput::PageUp),
                    KeyCode::PageDown => state.handle_input(DropdownInput::PageDown),
                    KeyCode::Home => state.handle_input(DropdownInput::First),
                    KeyCode::End => state.handle_input(DropdownInput::Last),
                    KeyCode::Enter | KeyCode::Char(' ') => state.handle_input(DropdownInput::Choose),
                    _ => DropdownOutput::Invalid,
                };
                match output {
                    DropdownOutput::Ok => true,
                    DropdownOutput::Invalid => false,
                    DropdownOutput::Chosen(event) => {
                        self.state = AppState::Picking;
                        self.dispatch(event)
                    }
                }
            }
            AppState::Entering(state) => {
                let output = match key {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.state = AppState::Picking;
                        return true;
                    }
                    KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        Some(d) => state.handle_input(TimeEntryInput::Digit(d)),
                        None => TimeEntryOutput::Invalid,
                    },
                    KeyCode::Backspace | KeyCode::Delete => {
                        state.handle_input(TimeEntryInput::Backspace)
                    }
                    KeyCode::Enter => state.handle_input(TimeEntryInput::Enter),
                    _ => TimeEntryOutput::Invalid,
                };
                match output {
                    TimeEntryOutput::Ok => true,
                    TimeEntryOutput::Invalid => false,
                    TimeEntryOutput::Submit(event) => {
                        self.state = AppState::Picking;
                        self.dispatch(event)
                    }
                }
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    // Returns `false` if the picker rejected the event
    fn dispatch(&mut self, event: PickerEvent) -> bool {
        self.picker.handle(event).is_ok()
    }

    /// Clicks the day `delta` days away from the selected one, which may
    /// lie in the previous or next month
    fn move_selection(&mut self, delta: i64) -> bool {
        let current = self.picker.value().date();
        let Some(target) = current.checked_add(Duration::days(delta)) else {
            return false;
        };
        let months = |d: Date| d.year() * 12 + i32::from(u8::from(d.month()));
        let day = target.day();
        let event = match months(target) - months(current) {
            0 => PickerEvent::Day(day),
            -1 => PickerEvent::AdjacentDay { day, offset: -1 },
            1 => PickerEvent::AdjacentDay { day, offset: 1 },
            _ => return false,
        };
        self.dispatch(event)
    }

    fn open_dropdown(&mut self, target: DropdownTarget, options: Vec<String>, current: &str) -> bool {
        self.state = AppState::Choosing(DropdownState::new(target, options, current));
        true
    }

    fn open_entry(&mut self, field: TimeField) -> bool {
        if self.picker.config().mode() == Mode::DateOnly {
            return false;
        }
        self.state = AppState::Entering(TimeEntryState::new(field));
        true
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let panel = PickerPanel::for_picker(&self.picker);
        let [panel_area] = Layout::horizontal([panel.width()])
            .flex(Flex::Center)
            .areas(area);
        let [panel_area] = Layout::vertical([panel.height()])
            .flex(Flex::Center)
            .areas(panel_area);
        panel.render(panel_area, buf);
        match self.state {
            AppState::Picking => (),
            AppState::Helping => Help {
                style: BASE_STYLE,
                with_time: self.picker.config().mode() == Mode::DateAndTime,
            }
            .render(area, buf),
            AppState::Choosing(ref mut state) => Dropdown.render(area, buf, state),
            AppState::Entering(ref mut state) => TimeEntry.render(area, buf, state),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Choosing(DropdownState),
    Entering(TimeEntryState),
}
