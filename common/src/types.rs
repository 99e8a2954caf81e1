use serde::{Deserialize, Serialize};

/// A serialized slide deck: a name and an ordered list of slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub slides: Vec<Slide>,
}

/// One screen of content. Its position in the deck is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Slide {
    /// Label used by the quick-jump grid: the title up to the first `:`.
    pub fn short_title(&self) -> &str {
        self.title
            .split(':')
            .next()
            .unwrap_or(&self.title)
            .trim_end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    #[default]
    Standard,
    End,
}

impl SlideKind {
    pub fn is_centered(self) -> bool {
        matches!(self, SlideKind::Title | SlideKind::End)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    FileText,
    CheckCircle,
    AlertCircle,
    Database,
    GitBranch,
    BarChart,
    TrendingUp,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::FileText => "▤",
            Icon::CheckCircle => "✔",
            Icon::AlertCircle => "⚠",
            Icon::Database => "⛁",
            Icon::GitBranch => "⑂",
            Icon::BarChart => "▇",
            Icon::TrendingUp => "↗",
        }
    }
}

/// Colour family of a piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Info,
    Success,
    Danger,
    Warning,
    Accent,
    Notice,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Renderable content of a slide. Navigation never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Text {
        text: String,
        #[serde(default)]
        tone: Tone,
    },
    Bullets {
        items: Vec<String>,
        #[serde(default)]
        tone: Tone,
    },
    Callout {
        #[serde(default)]
        tone: Tone,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        lines: Vec<String>,
    },
    Formula {
        lines: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Stats {
        items: Vec<Stat>,
    },
    Columns {
        columns: Vec<Vec<Block>>,
    },
    Quote {
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_defaults_apply_when_fields_are_missing() {
        let slide: Slide = serde_json::from_str(r#"{ "title": "Intro" }"#).unwrap();
        assert_eq!(slide.kind, SlideKind::Standard);
        assert!(slide.icon.is_none());
        assert!(slide.content.is_empty());
    }

    #[test]
    fn blocks_are_tagged_by_kind() {
        let json = r#"[
            { "kind": "heading", "text": "Data Sources" },
            { "kind": "bullets", "items": ["a", "b"], "tone": "success" },
            { "kind": "callout", "tone": "danger", "lines": ["careful"] },
            { "kind": "columns", "columns": [[{ "kind": "quote", "text": "q" }], []] }
        ]"#;
        let blocks: Vec<Block> = serde_json::from_str(json).unwrap();
        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks[1],
            Block::Bullets {
                items: vec!["a".into(), "b".into()],
                tone: Tone::Success
            }
        );
        match &blocks[3] {
            Block::Columns { columns } => assert_eq!(columns.len(), 2),
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn unknown_block_kind_is_rejected() {
        let result: Result<Block, _> = serde_json::from_str(r#"{ "kind": "video" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn short_title_cuts_at_first_colon() {
        let slide = Slide {
            title: "Q1: Why not synthetic control?".into(),
            subtitle: None,
            kind: SlideKind::Standard,
            icon: None,
            content: Vec::new(),
        };
        assert_eq!(slide.short_title(), "Q1");

        let plain = Slide {
            title: "6. Main Results".into(),
            ..slide
        };
        assert_eq!(plain.short_title(), "6. Main Results");
    }
}
