//! Ordered, immutable slide sequence.

use crate::error::{DeckError, Result};
use std::path::Path;
use std::sync::Arc;
use viva_common::{Deck, Slide};

const BUNDLED_DECK: &str = include_str!("../decks/uls_reform_viva.json");

/// The fixed slide sequence a presentation runs over.
///
/// Construction rejects empty decks, so every index in `0..len()` resolves
/// to a slide and `len()` is never zero.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    name: String,
    author: Option<String>,
    slides: Arc<[Slide]>,
}

impl SlideRegistry {
    pub fn from_deck(deck: Deck) -> Result<Self> {
        if deck.slides.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self {
            name: deck.name,
            author: deck.author,
            slides: deck.slides.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let deck: Deck = serde_json::from_str(json)?;
        Self::from_deck(deck)
    }

    /// The viva deck compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DECK)
    }

    /// Load a JSON deck document from disk.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let registry = Self::from_json(&content)?;
        tracing::info!(
            "Loaded deck '{}' ({} slides) from {}",
            registry.name,
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Load `path` when given, otherwise the bundled deck.
    pub async fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Self::bundled(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Checked lookup that reports the deck length on failure.
    pub fn slide(&self, index: usize) -> Result<&Slide> {
        self.slides.get(index).ok_or(DeckError::OutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slide)> {
        self.slides.iter().enumerate()
    }
}
