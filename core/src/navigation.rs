//! Current-slide state and the transitions that move it.
//!
//! The index is published through a [`watch`] channel so a display layer can
//! subscribe and redraw only when the position actually changed.

use crate::error::{DeckError, Result};
use crate::registry::SlideRegistry;
use tokio::sync::watch;

/// Outcome of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    /// Boundary no-op, or a jump to the slide already shown.
    Unchanged,
}

impl Transition {
    pub fn moved(self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Owns the current index, always within `0..len`.
#[derive(Debug)]
pub struct Navigator {
    len: usize,
    current: watch::Sender<usize>,
}

impl Navigator {
    /// Start at slide 0 of a deck with `len` slides.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(DeckError::Empty);
        }
        let (current, _) = watch::channel(0);
        Ok(Self { len, current })
    }

    /// A registry is never empty, so this can't fail the way [`Navigator::new`] can.
    pub fn for_registry(registry: &SlideRegistry) -> Self {
        debug_assert!(!registry.is_empty());
        let (current, _) = watch::channel(0);
        Self {
            len: registry.len(),
            current,
        }
    }

    pub fn current(&self) -> usize {
        *self.current.borrow()
    }

    /// Number of slides; at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current() == self.len - 1
    }

    /// Receiver that is marked changed whenever the index moves.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.current.subscribe()
    }

    /// Move one slide forward; no-op on the last slide.
    pub fn advance(&mut self) -> Transition {
        let from = self.current();
        if from + 1 < self.len {
            self.set(from + 1)
        } else {
            Transition::Unchanged
        }
    }

    /// Move one slide back; no-op on the first slide.
    pub fn retreat(&mut self) -> Transition {
        let from = self.current();
        if from > 0 {
            self.set(from - 1)
        } else {
            Transition::Unchanged
        }
    }

    /// Jump to `target`. Out-of-range targets are rejected and leave the
    /// index where it was.
    pub fn jump_to(&mut self, target: usize) -> Result<Transition> {
        if target >= self.len {
            return Err(DeckError::OutOfRange {
                index: target,
                len: self.len,
            });
        }
        Ok(self.set(target))
    }

    pub fn first(&mut self) -> Transition {
        self.set(0)
    }

    pub fn last(&mut self) -> Transition {
        self.set(self.len - 1)
    }

    fn set(&mut self, to: usize) -> Transition {
        let mut from = to;
        let modified = self.current.send_if_modified(|current| {
            from = *current;
            if *current == to {
                false
            } else {
                *current = to;
                true
            }
        });

        if modified {
            tracing::debug!("slide {from} -> {to}");
            Transition::Moved { from, to }
        } else {
            Transition::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDES: usize = 13;

    fn navigator_at(index: usize) -> Navigator {
        let mut nav = Navigator::new(SLIDES).unwrap();
        nav.jump_to(index).unwrap();
        nav
    }

    #[test]
    fn starts_at_first_slide() {
        let nav = Navigator::new(SLIDES).unwrap();
        assert_eq!(nav.current(), 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
        assert_eq!(nav.len(), SLIDES);
    }

    #[test]
    fn empty_deck_has_no_navigator() {
        assert!(matches!(Navigator::new(0), Err(DeckError::Empty)));
    }

    #[test]
    fn advance_clamps_at_last_slide() {
        for start in 0..SLIDES {
            for steps in 0..=SLIDES + 2 {
                let mut nav = navigator_at(start);
                for _ in 0..steps {
                    nav.advance();
                }
                assert_eq!(nav.current(), (start + steps).min(SLIDES - 1));
            }
        }
    }

    #[test]
    fn retreat_clamps_at_first_slide() {
        for start in 0..SLIDES {
            for steps in 0..=SLIDES + 2 {
                let mut nav = navigator_at(start);
                for _ in 0..steps {
                    nav.retreat();
                }
                assert_eq!(nav.current(), start.saturating_sub(steps));
            }
        }
    }

    #[test]
    fn jump_to_lands_exactly() {
        let mut nav = Navigator::new(SLIDES).unwrap();
        for k in (0..SLIDES).rev() {
            nav.jump_to(k).unwrap();
            assert_eq!(nav.current(), k);
        }
    }

    #[test]
    fn jump_to_current_slide_is_unchanged() {
        let mut nav = navigator_at(4);
        assert_eq!(nav.jump_to(4).unwrap(), Transition::Unchanged);
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn jump_out_of_range_keeps_state() {
        let mut nav = navigator_at(5);
        match nav.jump_to(SLIDES) {
            Err(DeckError::OutOfRange { index, len }) => {
                assert_eq!(index, SLIDES);
                assert_eq!(len, SLIDES);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(nav.jump_to(usize::MAX).is_err());
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn boundaries_are_idempotent() {
        let mut nav = Navigator::new(SLIDES).unwrap();
        assert_eq!(nav.retreat(), Transition::Unchanged);
        assert_eq!(nav.current(), 0);

        nav.last();
        assert!(nav.is_last());
        assert_eq!(nav.advance(), Transition::Unchanged);
        assert_eq!(nav.advance(), Transition::Unchanged);
        assert_eq!(nav.current(), SLIDES - 1);
    }

    #[test]
    fn thirteen_slide_walkthrough() {
        let mut nav = Navigator::new(SLIDES).unwrap();
        for _ in 0..12 {
            assert!(nav.advance().moved());
        }
        assert_eq!(nav.current(), 12);

        nav.advance();
        assert_eq!(nav.current(), 12);

        assert_eq!(
            nav.jump_to(3).unwrap(),
            Transition::Moved { from: 12, to: 3 }
        );

        for _ in 0..5 {
            nav.retreat();
        }
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut nav = Navigator::new(1).unwrap();
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.advance(), Transition::Unchanged);
        assert_eq!(nav.retreat(), Transition::Unchanged);
        assert_eq!(nav.last(), Transition::Unchanged);
    }

    #[test]
    fn subscribers_see_moves_but_not_noops() {
        let mut nav = Navigator::new(SLIDES).unwrap();
        let mut rx = nav.subscribe();
        assert!(!rx.has_changed().unwrap());

        nav.retreat();
        assert!(!rx.has_changed().unwrap());

        nav.advance();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);

        nav.jump_to(1).unwrap();
        assert!(!rx.has_changed().unwrap());

        nav.last();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SLIDES - 1);
    }

    #[test]
    fn registry_navigator_matches_deck_length() {
        let registry = SlideRegistry::bundled().unwrap();
        let nav = Navigator::for_registry(&registry);
        assert_eq!(nav.len(), registry.len());
        assert_eq!(registry.slide(nav.current()).unwrap(), &registry.slides()[0]);

        let single = SlideRegistry::from_json(r#"{ "name": "one", "slides": [{ "title": "Only" }] }"#)
            .unwrap();
        let mut nav = Navigator::for_registry(&single);
        assert_eq!(nav.len(), 1);
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.advance(), Transition::Unchanged);
    }
}
