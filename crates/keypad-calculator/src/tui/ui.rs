//! TUI layout: display on top, keypad below, help or status line at the bottom

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::display::DisplayWidget;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " Keypad Calculator ";

/// Key bindings shown under the keypad
pub const HELP_LINE: &str = "Enter = · Bksp ← · Esc C · _ ± · q quit";

/// Width of the calculator column
const COLUMN_WIDTH: u16 = 28;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Splits the column into display, keypad and help line
    fn create_layout(area: Rect) -> Vec<Rect> {
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Length(COLUMN_WIDTH), Constraint::Min(0)])
            .split(area)[0];

        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Display
                Constraint::Length(12), // Keypad
                Constraint::Length(1),  // Help / status
                Constraint::Min(0),
            ])
            .split(column)
            .to_vec()
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let span = match self.app.status() {
            Some(message) => Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(span).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = Self::create_layout(area);
        if chunks.len() < 3 {
            return;
        }

        let controller = self.app.controller();
        DisplayWidget::new(controller.display()).render(chunks[0], buf);

        self.app.set_keypad_area(chunks[1]);
        KeypadWidget::new(controller.keypad(), self.app.layout()).render(chunks[1], buf);

        self.render_status(chunks[2], buf);
    }
}
