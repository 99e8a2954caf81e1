use super::truncate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;
use viva_common::Slide;

/// Icon, slide title and the `Slide n / N` counter.
pub struct Header<'a> {
    slide: &'a Slide,
    index: usize,
    total: usize,
}

impl<'a> Header<'a> {
    pub fn new(slide: &'a Slide, index: usize, total: usize) -> Self {
        Self {
            slide,
            index,
            total,
        }
    }

    pub fn counter(&self) -> String {
        format!("Slide {} / {}", self.index + 1, self.total)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let counter = self.counter();
        let mut spans = Vec::new();
        if let Some(icon) = self.slide.icon {
            spans.push(Span::styled(
                format!("{} ", icon.glyph()),
                Style::default().fg(Color::LightBlue),
            ));
        }
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let room = (inner.width as usize).saturating_sub(used + counter.width() + 2);
        spans.push(Span::styled(
            truncate(&self.slide.title, room),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans)).render(inner, buf);
        Paragraph::new(Span::styled(
            counter,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .render(inner, buf);
    }
}
