use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Key column width
const KEYS_WIDTH: usize = 16;

// (keys, description, only shown when picking a time of day)
static KEYS: &[(&str, &str, bool)] = &[
    ("h, LEFT", "Previous day", false),
    ("l, RIGHT", "Next day", false),
    ("k, UP", "Same day last week", false),
    ("j, DOWN", "Same day next week", false),
    ("[, PAGE UP", "Previous month", false),
    ("], PAGE DOWN", "Next month", false),
    ("m", "Choose a month", false),
    ("y", "Choose a year", false),
    ("H", "Enter the hour", true),
    ("M", "Enter the minute", true),
    ("., HOME", "Jump to now", false),
    ("ENTER, SPACE", "Accept", false),
    ("q, ESC", "Cancel", false),
    ("?", "Show this help", false),
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help {
    pub(crate) style: Style,
    pub(crate) with_time: bool,
}

impl Help {
    fn text(self) -> Text<'static> {
        let mut lines = KEYS
            .iter()
            .filter(|&&(_, _, time_only)| self.with_time || !time_only)
            .map(|(keys, desc, _)| Line::raw(format!("{keys:<KEYS_WIDTH$}{desc}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.style);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.style).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
