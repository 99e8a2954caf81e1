//! Deck loading and navigation state for the `viva` presenter.

pub mod error;
pub mod export;
pub mod logging;
pub mod navigation;
pub mod registry;

pub use error::{DeckError, Result};
pub use navigation::{Navigator, Transition};
pub use registry::SlideRegistry;
