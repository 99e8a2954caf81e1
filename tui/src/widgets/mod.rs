pub mod body;
pub mod header;
pub mod nav_bar;
pub mod quick_nav;
pub mod status_bar;

pub use body::{slide_lines, SlideBody};
pub use header::Header;
pub use nav_bar::NavBar;
pub use quick_nav::QuickNav;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` columns, ending with `…` when shortened.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to exactly `width` columns (truncating if longer).
pub(crate) fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Main Results", 20), "Main Results");
        assert_eq!(truncate("Main Results", 6), "Main …");
        assert_eq!(truncate("Ações", 3), "Aç…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("Q75", 6), "Q75   ");
        assert_eq!(pad("Q25 (high distress)", 8).width(), 8);
    }
}
