use super::pad;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};
use viva_common::Slide;

pub const COLUMNS: usize = 4;

/// Grid of every slide, four per row; the current one highlighted.
pub struct QuickNav<'a> {
    slides: &'a [Slide],
    current: usize,
}

impl<'a> QuickNav<'a> {
    pub fn new(slides: &'a [Slide], current: usize) -> Self {
        Self { slides, current }
    }

    /// Rows needed for `count` slides, borders included.
    pub fn height_for(count: usize) -> u16 {
        let rows = count.div_ceil(COLUMNS);
        u16::try_from(rows + 2).unwrap_or(u16::MAX)
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ⌂ Quick Navigation ",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ))
    }

    /// One cell per slide in deck order; cells below the visible rows are
    /// omitted.
    pub fn layout(&self, area: Rect) -> Vec<Rect> {
        let inner = Self::block().inner(area);
        let cell_width = inner.width / COLUMNS as u16;
        if cell_width == 0 {
            return Vec::new();
        }

        (0..self.slides.len())
            .map_while(|i| {
                let row = u16::try_from(i / COLUMNS).ok()?;
                if row >= inner.height {
                    return None;
                }
                let col = (i % COLUMNS) as u16;
                Some(Rect::new(
                    inner.x + col * cell_width,
                    inner.y + row,
                    cell_width.saturating_sub(1),
                    1,
                ))
            })
            .collect()
    }

    pub fn label(index: usize, slide: &Slide) -> String {
        format!("{}. {}", index + 1, slide.short_title())
    }
}

impl Widget for QuickNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = self.layout(area);
        Self::block().render(area, buf);

        for (i, cell) in cells.iter().enumerate() {
            let style = if i == self.current {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = pad(&Self::label(i, &self.slides[i]), cell.width as usize);
            buf.set_stringn(cell.x, cell.y, label, cell.width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viva_core::SlideRegistry;

    #[test]
    fn thirteen_slides_take_four_rows() {
        assert_eq!(QuickNav::height_for(13), 6);
        assert_eq!(QuickNav::height_for(4), 3);
        assert_eq!(QuickNav::height_for(1), 3);
    }

    #[test]
    fn cells_follow_deck_order() {
        let registry = SlideRegistry::bundled().unwrap();
        let grid = QuickNav::new(registry.slides(), 0);
        let cells = grid.layout(Rect::new(0, 0, 82, 6));
        assert_eq!(cells.len(), 13);
        assert_eq!(cells[0], Rect::new(1, 1, 19, 1));
        assert_eq!(cells[3], Rect::new(61, 1, 19, 1));
        assert_eq!(cells[4], Rect::new(1, 2, 19, 1));
        assert_eq!(cells[12], Rect::new(1, 4, 19, 1));
    }

    #[test]
    fn short_area_hides_trailing_rows() {
        let registry = SlideRegistry::bundled().unwrap();
        let grid = QuickNav::new(registry.slides(), 0);
        assert_eq!(grid.layout(Rect::new(0, 0, 82, 4)).len(), 8);
    }

    #[test]
    fn labels_use_title_before_colon() {
        let registry = SlideRegistry::bundled().unwrap();
        assert_eq!(
            QuickNav::label(6, registry.slide(6).unwrap()),
            "7. 6. Main Results"
        );
    }
}
