//! Text selectors: a text value plus a list of options to choose it from.
//! The picker uses them for the month and year dropdowns and for the hour
//! and minute inputs.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// Indicator drawn after a selector's text to show that options are
/// available
const DROPDOWN_ARROW: &str = " ▾";

pub trait Selector {
    fn options(&self) -> &[String];

    fn text(&self) -> &str;

    /// Columns needed to show any of the options followed by the dropdown
    /// arrow
    fn min_width(&self) -> u16 {
        let widest = self
            .options()
            .iter()
            .map(|s| Span::raw(s.as_str()).width())
            .max()
            .unwrap_or(0);
        u16::try_from(widest + Span::raw(DROPDOWN_ARROW).width()).unwrap_or(u16::MAX)
    }

    /// Index of the option equal to the current text
    fn position(&self) -> Option<usize> {
        self.options().iter().position(|s| s == self.text())
    }
}

/// A selector that also accepts free-form text
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectEntry {
    options: Vec<String>,
    text: String,
}

impl SelectEntry {
    pub fn new(options: Vec<String>) -> SelectEntry {
        SelectEntry {
            options,
            text: String::new(),
        }
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> SelectEntry {
        self.text = text.into();
        self
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Replaces the text with the option at `index`, if there is one
    pub fn choose(&mut self, index: usize) -> Option<&str> {
        let option = self.options.get(index)?;
        self.text.clone_from(option);
        Some(&self.text)
    }
}

impl Selector for SelectEntry {
    fn options(&self) -> &[String] {
        &self.options
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Wraps another selector to make it one column wider on each side, leaving
/// room around short values such as two-digit hours
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WideSelect<S>(S);

impl<S: Selector> WideSelect<S> {
    pub fn new(inner: S) -> WideSelect<S> {
        WideSelect(inner)
    }

    pub fn inner(&self) -> &S {
        &self.0
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: Selector> Selector for WideSelect<S> {
    fn options(&self) -> &[String] {
        self.0.options()
    }

    fn text(&self) -> &str {
        self.0.text()
    }

    fn min_width(&self) -> u16 {
        self.0.min_width().saturating_add(2)
    }
}

/// Draws a selector as `[text ▾]`-style field padded out to its minimum
/// width
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectField<'a, S> {
    selector: &'a S,
    style: Style,
}

impl<'a, S: Selector> SelectField<'a, S> {
    pub fn new(selector: &'a S) -> Self {
        SelectField {
            selector,
            style: Style::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Total columns taken up by the field, brackets included
    pub fn width(&self) -> u16 {
        self.selector.min_width().saturating_add(2)
    }
}

impl<S: Selector> Widget for SelectField<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let arrow_width = Span::raw(DROPDOWN_ARROW).width();
        let text_width = usize::from(self.selector.min_width()).saturating_sub(arrow_width);
        let content = format!(
            "[{:<text_width$}{DROPDOWN_ARROW}]",
            self.selector.text()
        );
        Line::styled(content, self.style).render(area, buf);
    }
}
