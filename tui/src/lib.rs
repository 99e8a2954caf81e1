//! Terminal presentation shell for `viva` decks.

pub mod intent;
pub mod presenter;
pub mod widgets;

use anyhow::Result;
use viva_common::VivaConfig;
use viva_core::SlideRegistry;

pub use intent::{HitMap, NavIntent};
pub use presenter::SlidePresenter;

/// Present `registry` full-screen until the user quits.
pub async fn run_presentation(registry: SlideRegistry, config: &VivaConfig) -> Result<()> {
    tracing::info!(
        "presenting '{}' ({} slides)",
        registry.name(),
        registry.len()
    );
    let mut presenter = SlidePresenter::new(registry, config.quick_nav);
    presenter.run().await
}
