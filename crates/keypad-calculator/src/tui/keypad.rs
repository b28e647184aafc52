//! Keypad rendering and mouse hit testing
//!
//! Pressed keys are drawn highlighted, so a key triggered from the keyboard
//! flashes on screen the same way a clicked one does.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{Keypad, KeypadLayout};
use crate::view::{KeyCode, KeypadView};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    layout: &'a KeypadLayout,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, layout: &'a KeypadLayout) -> Self {
        Self { keypad, layout }
    }

    fn key_style(&self, code: KeyCode) -> Style {
        if self.keypad.key(code).is_none() {
            return Style::default().fg(Color::DarkGray);
        }
        if self.keypad.is_pressed(code) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match code {
            KeyCode::Equals => Style::default().fg(Color::Green),
            KeyCode::Clear | KeyCode::Backspace => Style::default().fg(Color::Red),
            KeyCode::Negate => Style::default().fg(Color::Cyan),
            op if op.is_operator() => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::White),
        }
    }
}

/// Area inside the one-cell border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        let (rows, cols) = self.layout.dimensions();
        if rows == 0 || cols == 0 || inner.width < cols as u16 || inner.height < rows as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), code) in self.layout.codes_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", code.label());
                let label_len = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_len) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, self.key_style(code)),
                        btn_width,
                    );
                }
            }
        }
    }
}

/// Converts a click position to the key drawn there
#[must_use]
pub fn hit_test(layout: &KeypadLayout, area: Rect, x: u16, y: u16) -> Option<KeyCode> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Account for border (1 char on each side)
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (rows, cols) = layout.dimensions();
    if rows == 0 || cols == 0 {
        return None;
    }

    let btn_width = (area.width - 2) / cols as u16;
    let btn_height = (area.height - 2) / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;
    layout.code_at(row, col)
}
