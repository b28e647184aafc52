//! Display rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::core::ERROR_TEXT;
use crate::view::DisplayView;

/// Renders whatever is bound to a display's variable, right-aligned
#[derive(Debug)]
pub struct DisplayWidget<'a, D> {
    display: &'a D,
}

impl<'a, D: DisplayView> DisplayWidget<'a, D> {
    /// Creates a new display widget
    #[must_use]
    pub fn new(display: &'a D) -> Self {
        Self { display }
    }

    /// Text to draw, cut to the display capacity.
    ///
    /// The variable can be written directly, bypassing the display's overflow
    /// policy, so the cut happens here as well.
    fn visible_text(&self) -> String {
        self.display
            .variable()
            .with(|text| text.chars().take(self.display.max_items()).collect())
    }
}

impl<D: DisplayView> Widget for DisplayWidget<'_, D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.visible_text();
        let style = if text == ERROR_TEXT {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}
