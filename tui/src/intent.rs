//! User navigation requests and the input mapping that produces them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    /// Zero-based slide index.
    GoTo(usize),
    First,
    Last,
    ScrollUp,
    ScrollDown,
    ToggleQuickNav,
    Quit,
}

/// Keys with a fixed meaning. Digits, `Enter`, `Esc` and `Backspace`
/// depend on whether a slide number is being typed and are handled by the
/// presenter.
pub fn intent_for_key(key: KeyEvent) -> Option<NavIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(NavIntent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(NavIntent::Quit),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('j')
        | KeyCode::Char(' ')
        | KeyCode::PageDown => Some(NavIntent::Next),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('k')
        | KeyCode::Backspace
        | KeyCode::PageUp => Some(NavIntent::Previous),
        KeyCode::Home => Some(NavIntent::First),
        KeyCode::End => Some(NavIntent::Last),
        KeyCode::Up => Some(NavIntent::ScrollUp),
        KeyCode::Down => Some(NavIntent::ScrollDown),
        KeyCode::Char('g') => Some(NavIntent::ToggleQuickNav),
        _ => None,
    }
}

/// Clickable regions recorded while drawing a frame.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, NavIntent)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, intent: NavIntent) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, intent));
        }
    }

    pub fn intent_at(&self, column: u16, row: u16) -> Option<NavIntent> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, intent)| *intent)
    }

    pub fn regions(&self) -> &[(Rect, NavIntent)] {
        &self.regions
    }
}
