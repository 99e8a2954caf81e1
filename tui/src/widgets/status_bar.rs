use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const HELP: &str =
    "←/→ navigate · Home/End · number+Enter jump · ↑/↓ scroll · g grid · q quit";

/// One-line footer: pending jump number, a transient message, or key help.
pub struct StatusBar<'a> {
    pending: &'a str,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(pending: &'a str, message: Option<&'a str>) -> Self {
        Self { pending, message }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if !self.pending.is_empty() {
            Line::from(vec![
                Span::styled(
                    " GO TO ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("slide {}_", self.pending),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled("  (Enter to jump, Esc to cancel)", Style::default().fg(Color::Gray)),
            ])
        } else if let Some(message) = self.message {
            Line::from(Span::styled(message, Style::default().fg(Color::Yellow)))
        } else {
            Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray)))
        };

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}
