use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const PREVIOUS: &str = " ◀ Previous ";
const NEXT: &str = " Next ▶ ";
const PREVIOUS_WIDTH: u16 = 12;
const NEXT_WIDTH: u16 = 8;

/// Screen regions of the navigation bar's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarLayout {
    pub previous: Rect,
    pub next: Rect,
    /// Slide index and cell of each visible dot, in deck order. When the
    /// bar is too narrow for every slide, the visible run is windowed
    /// around the current one.
    pub dots: Vec<(usize, Rect)>,
}

/// Previous button, one dot per slide, Next button.
pub struct NavBar {
    current: usize,
    total: usize,
}

impl NavBar {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn layout(&self, area: Rect) -> NavBarLayout {
        let row = area.y;
        let previous = Rect::new(area.x, row, PREVIOUS_WIDTH.min(area.width), 1);
        let next_width = NEXT_WIDTH.min(area.width.saturating_sub(previous.width));
        let next = Rect::new(area.right().saturating_sub(next_width), row, next_width, 1);

        let middle_start = previous.right() + 1;
        let middle_end = next.x.saturating_sub(1);
        let middle = middle_end.saturating_sub(middle_start);

        let fits = usize::from(middle / 2 + middle % 2).min(self.total);
        let dots_width = u16::try_from(fits * 2).unwrap_or(u16::MAX).saturating_sub(1);
        let start = middle_start + middle.saturating_sub(dots_width) / 2;
        let first = self
            .current
            .saturating_sub(fits / 2)
            .min(self.total - fits);
        let dots = (0..fits)
            .map(|i| (first + i, Rect::new(start + 2 * i as u16, row, 1, 1)))
            .collect();

        NavBarLayout {
            previous,
            next,
            dots,
        }
    }
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let layout = self.layout(area);

        let at_start = self.current == 0;
        let at_end = self.current + 1 >= self.total;
        buf.set_stringn(
            layout.previous.x,
            layout.previous.y,
            PREVIOUS,
            layout.previous.width as usize,
            button_style(!at_start),
        );
        buf.set_stringn(
            layout.next.x,
            layout.next.y,
            NEXT,
            layout.next.width as usize,
            button_style(!at_end),
        );

        for (index, dot) in &layout.dots {
            let (symbol, style) = if *index == self.current {
                ("●", Style::default().fg(Color::LightBlue))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            buf.set_string(dot.x, dot.y, symbol, style);
        }
    }
}
