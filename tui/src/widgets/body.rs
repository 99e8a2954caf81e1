use super::{pad, truncate};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;
use viva_common::{Block as ContentBlock, Slide, Tone};

const COLUMN_GAP: usize = 3;
const MIN_COLUMN_WIDTH: usize = 16;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::LightBlue,
        Tone::Success => Color::LightGreen,
        Tone::Danger => Color::LightRed,
        Tone::Warning => Color::Yellow,
        Tone::Accent => Color::LightMagenta,
        Tone::Notice => Color::Rgb(255, 165, 0),
        Tone::Muted => Color::Gray,
    }
}

/// Content area of the current slide.
pub struct SlideBody<'a> {
    slide: &'a Slide,
    scroll: u16,
}

impl<'a> SlideBody<'a> {
    pub fn new(slide: &'a Slide, scroll: u16) -> Self {
        Self { slide, scroll }
    }

    /// Number of wrapped lines the slide needs inside `area`'s border.
    pub fn content_height(&self, area: Rect) -> u16 {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let lines = slide_lines(self.slide, inner.width as usize).len();
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

impl Widget for SlideBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        let lines = slide_lines(self.slide, inner.width as usize);

        let alignment = if self.slide.kind.is_centered() {
            Alignment::Center
        } else {
            Alignment::Left
        };

        Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Lay the slide's blocks out as styled lines, wrapped to `width` columns.
pub fn slide_lines(slide: &Slide, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for block in &slide.content {
        push_block(&mut lines, block, width);
    }
    while lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }
    lines
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &ContentBlock, width: usize) {
    match block {
        ContentBlock::Heading { text } => {
            let style = Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD);
            for l in wrap(text, width) {
                lines.push(Line::from(Span::styled(l, style)));
            }
        }
        ContentBlock::Text { text, tone } => {
            let style = Style::default().fg(tone_color(*tone));
            for l in wrap(text, width) {
                lines.push(Line::from(Span::styled(l, style)));
            }
        }
        ContentBlock::Bullets { items, tone } => {
            let style = Style::default().fg(tone_color(*tone));
            let options = Options::new(width.max(3))
                .initial_indent("• ")
                .subsequent_indent("  ");
            for item in items {
                for l in textwrap::wrap(item, &options) {
                    lines.push(Line::from(Span::styled(l.into_owned(), style)));
                }
            }
        }
        ContentBlock::Callout { tone, title, lines: body } => {
            let color = tone_color(*tone);
            let bar = Span::styled("▌ ", Style::default().fg(color));
            let inner = width.saturating_sub(2).max(1);
            if let Some(title) = title {
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                for l in wrap(title, inner) {
                    lines.push(Line::from(vec![bar.clone(), Span::styled(l, style)]));
                }
            }
            for text in body {
                for l in wrap(text, inner) {
                    lines.push(Line::from(vec![bar.clone(), Span::raw(l)]));
                }
            }
        }
        ContentBlock::Formula { lines: formula } => {
            let style = Style::default().fg(Color::Green);
            for l in formula {
                lines.push(Line::from(Span::styled(
                    truncate(&format!("  {l}"), width),
                    style,
                )));
            }
        }
        ContentBlock::Table { headers, rows } => push_table(lines, headers, rows, width),
        ContentBlock::Stats { items } => {
            let mut spans = Vec::new();
            for (i, stat) in items.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("    "));
                }
                spans.push(Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}", stat.label),
                    Style::default().fg(Color::Gray),
                ));
            }
            let line = Line::from(spans);
            if line.width() <= width {
                lines.push(line);
            } else {
                // One stat per line when they don't fit side by side.
                for stat in items {
                    let value = truncate(&stat.value, width);
                    let label = truncate(
                        &format!(" {}", stat.label),
                        width.saturating_sub(value.width()),
                    );
                    lines.push(Line::from(vec![
                        Span::styled(
                            value,
                            Style::default()
                                .fg(Color::LightRed)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(label, Style::default().fg(Color::Gray)),
                    ]));
                }
            }
        }
        ContentBlock::Columns { columns } => push_columns(lines, columns, width),
        ContentBlock::Quote { text } => {
            let style = Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC);
            for l in wrap(&format!("“{text}”"), width) {
                lines.push(Line::from(Span::styled(l, style)));
            }
        }
    }
    lines.push(Line::default());
}

fn push_table(
    lines: &mut Vec<Line<'static>>,
    headers: &[String],
    rows: &[Vec<String>],
    width: usize,
) {
    let widths = viva_core::export::column_widths(headers, rows);
    let row_line = |cells: &[String], style: Style| {
        let text = widths
            .iter()
            .enumerate()
            .map(|(i, w)| pad(cells.get(i).map(String::as_str).unwrap_or_default(), *w))
            .collect::<Vec<_>>()
            .join(" │ ");
        Line::from(Span::styled(truncate(text.trim_end(), width), style))
    };

    lines.push(row_line(
        headers,
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    ));
    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::from(Span::styled(
        truncate(&rule, width),
        Style::default().fg(Color::DarkGray),
    )));
    for row in rows {
        lines.push(row_line(row, Style::default().fg(Color::White)));
    }
}

fn push_columns(lines: &mut Vec<Line<'static>>, columns: &[Vec<ContentBlock>], width: usize) {
    let count = columns.len();
    if count == 0 {
        return;
    }

    let col_width = width.saturating_sub(COLUMN_GAP * (count - 1)) / count;
    if col_width < MIN_COLUMN_WIDTH {
        // Too narrow to sit side by side; stack the columns instead.
        for column in columns {
            for block in column {
                push_block(lines, block, width);
            }
        }
        return;
    }

    let rendered: Vec<Vec<Line<'static>>> = columns
        .iter()
        .map(|column| {
            let mut col_lines = Vec::new();
            for block in column {
                push_block(&mut col_lines, block, col_width);
            }
            col_lines
        })
        .collect();

    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..height {
        let mut spans = Vec::new();
        for (i, column) in rendered.iter().enumerate() {
            let used = match column.get(row) {
                Some(line) => {
                    spans.extend(line.spans.iter().cloned());
                    line.width()
                }
                None => 0,
            };
            if i + 1 < count {
                spans.push(Span::raw(" ".repeat(
                    col_width.saturating_sub(used) + COLUMN_GAP,
                )));
            }
        }
        lines.push(Line::from(spans));
    }
    // Each column already ends with a blank separator line.
    lines.pop();
}
