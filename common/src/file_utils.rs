use std::path::PathBuf;

/// Create a filesystem-friendly slug from a title.
///
/// Only ASCII letters and digits survive; runs of anything else collapse
/// into a single `-`. Falls back to `"deck"` when nothing is left.
pub fn create_slug(title: &str) -> String {
    let slug = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50) // Limit length
        .collect::<String>();

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "deck".to_string()
    } else {
        slug
    }
}

/// Default markdown export path for a deck name.
pub fn export_filename(deck_name: &str) -> PathBuf {
    PathBuf::from(format!("{}.md", create_slug(deck_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_slug() {
        assert_eq!(create_slug("Hello World"), "hello-world");
        assert_eq!(
            create_slug("Vertical Integration & Financial Distress"),
            "vertical-integration-financial-distress"
        );
        assert_eq!(create_slug("  2024 ULS   Reform!  "), "2024-uls-reform");
        assert_eq!(create_slug("Ações"), "a-es");
        assert_eq!(create_slug("日本語"), "deck");
    }

    #[test]
    fn test_slug_is_truncated() {
        let long = "word ".repeat(40);
        let slug = create_slug(&long);
        assert!(slug.len() <= 50);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("ULS Reform Viva"),
            PathBuf::from("uls-reform-viva.md")
        );
    }
}
