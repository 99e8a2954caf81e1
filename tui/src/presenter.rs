use crate::intent::{intent_for_key, HitMap, NavIntent};
use crate::widgets::{Header, NavBar, QuickNav, SlideBody, StatusBar};
use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tokio::sync::watch;
use viva_common::Slide;
use viva_core::{Navigator, SlideRegistry};

const MAX_PENDING_DIGITS: usize = 3;
const MIN_BODY_HEIGHT: u16 = 8;

/// Interactive slide presenter: owns the navigation state and draws the
/// current slide with its navigation controls.
pub struct SlidePresenter {
    registry: SlideRegistry,
    navigator: Navigator,
    position: watch::Receiver<usize>,
    scroll: u16,
    max_scroll: u16,
    show_quick_nav: bool,
    pending_jump: String,
    status: Option<String>,
    hit_map: HitMap,
    should_quit: bool,
}

impl SlidePresenter {
    pub fn new(registry: SlideRegistry, show_quick_nav: bool) -> Self {
        let navigator = Navigator::for_registry(&registry);
        let position = navigator.subscribe();
        Self {
            registry,
            navigator,
            position,
            scroll: 0,
            max_scroll: 0,
            show_quick_nav,
            pending_jump: String::new(),
            status: None,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    pub fn current(&self) -> usize {
        self.navigator.current()
    }

    pub fn current_slide(&self) -> &Slide {
        // The navigator is sized from the registry, so the index is always valid.
        &self.registry.slides()[self.navigator.current()]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut dirty = true;

        while !self.should_quit {
            if dirty {
                terminal.draw(|f| self.draw(f))?;
            }

            let Some(event) = events.next().await else {
                break;
            };
            dirty = self.handle_event(event?);
        }

        tracing::info!("presentation closed on slide {}", self.current() + 1);
        Ok(())
    }

    /// React to a navigation change published by the navigator.
    fn sync_position(&mut self) -> bool {
        if !self.position.has_changed().unwrap_or(false) {
            return false;
        }
        let index = *self.position.borrow_and_update();
        tracing::debug!("showing slide {}: {}", index + 1, self.current_slide().title);
        self.scroll = 0;
        self.status = None;
        self.pending_jump.clear();
        true
    }

    /// Returns whether the screen needs to be redrawn.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let mut abandoned = false;
        if !self.pending_jump.is_empty() || matches!(key.code, KeyCode::Char('0'..='9')) {
            if let Some(redraw) = self.handle_jump_key(key) {
                return redraw;
            }
            // Any other key abandons the number being typed.
            abandoned = !self.pending_jump.is_empty();
            self.pending_jump.clear();
        }

        match intent_for_key(key) {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => abandoned,
        }
    }

    /// Typing a slide number. `None` means the key isn't part of it.
    fn handle_jump_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                if self.pending_jump.len() < MAX_PENDING_DIGITS {
                    self.pending_jump.push(c);
                }
                Some(true)
            }
            KeyCode::Backspace => {
                self.pending_jump.pop();
                Some(true)
            }
            KeyCode::Esc => {
                self.pending_jump.clear();
                Some(true)
            }
            KeyCode::Enter => {
                let typed = std::mem::take(&mut self.pending_jump);
                match typed.parse::<usize>() {
                    Ok(number) if number >= 1 => self.apply(NavIntent::GoTo(number - 1)),
                    _ => self.reject_jump(&typed),
                }
                Some(true)
            }
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let intent = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hit_map.intent_at(mouse.column, mouse.row)
            }
            MouseEventKind::ScrollDown => Some(NavIntent::ScrollDown),
            MouseEventKind::ScrollUp => Some(NavIntent::ScrollUp),
            _ => None,
        };

        match intent {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, intent: NavIntent) {
        match intent {
            NavIntent::Next => {
                self.navigator.advance();
            }
            NavIntent::Previous => {
                self.navigator.retreat();
            }
            NavIntent::GoTo(index) => {
                if let Err(e) = self.navigator.jump_to(index) {
                    tracing::debug!("jump failed: {e}");
                    self.reject_jump(&(index + 1).to_string());
                }
            }
            NavIntent::First => {
                self.navigator.first();
            }
            NavIntent::Last => {
                self.navigator.last();
            }
            NavIntent::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            NavIntent::ScrollDown => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            NavIntent::ToggleQuickNav => self.show_quick_nav = !self.show_quick_nav,
            NavIntent::Quit => self.should_quit = true,
        }
        self.sync_position();
    }

    fn reject_jump(&mut self, typed: &str) {
        tracing::warn!("rejected jump to slide {typed:?}");
        self.status = Some(format!(
            "No slide {typed} (deck has {} slides)",
            self.registry.len()
        ));
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        let total = self.registry.len();
        let current = self.navigator.current();

        let grid_height = QuickNav::height_for(total);
        // Header, body, nav bar, grid and status line.
        let needed = grid_height.saturating_add(3 + MIN_BODY_HEIGHT + 1 + 1);
        let show_grid = self.show_quick_nav && area.height >= needed;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(if show_grid { grid_height } else { 0 }),
                Constraint::Length(1),
            ])
            .split(area);

        self.hit_map.clear();
        let slide = &self.registry.slides()[current];

        f.render_widget(Header::new(slide, current, total), chunks[0]);

        let body = SlideBody::new(slide, self.scroll);
        let inner_height = chunks[1].height.saturating_sub(2);
        self.max_scroll = body.content_height(chunks[1]).saturating_sub(inner_height);
        self.scroll = self.scroll.min(self.max_scroll);
        f.render_widget(SlideBody::new(slide, self.scroll), chunks[1]);

        let nav_bar = NavBar::new(current, total);
        let layout = nav_bar.layout(chunks[2]);
        self.hit_map.push(layout.previous, NavIntent::Previous);
        self.hit_map.push(layout.next, NavIntent::Next);
        for (i, dot) in &layout.dots {
            self.hit_map.push(*dot, NavIntent::GoTo(*i));
        }
        f.render_widget(nav_bar, chunks[2]);

        if show_grid {
            let grid = QuickNav::new(self.registry.slides(), current);
            for (i, cell) in grid.layout(chunks[3]).into_iter().enumerate() {
                self.hit_map.push(cell, NavIntent::GoTo(i));
            }
            f.render_widget(grid, chunks[3]);
        }

        f.render_widget(
            StatusBar::new(&self.pending_jump, self.status.as_deref()),
            chunks[4],
        );
    }
}
