//! Text renderings of a deck for use outside the terminal UI.

use crate::registry::SlideRegistry;
use std::fmt::Write;
use viva_common::{Block, Slide};

/// Render the whole deck as a markdown document, one `##` section per slide.
pub fn deck_to_markdown(registry: &SlideRegistry) -> String {
    let mut out = format!("# {}\n", registry.name());
    if let Some(author) = registry.author() {
        let _ = writeln!(out, "\n_{author}_");
    }

    for slide in registry.slides() {
        let _ = writeln!(out, "\n## {}\n", slide.title);
        if let Some(subtitle) = &slide.subtitle {
            let _ = writeln!(out, "_{subtitle}_\n");
        }
        for block in &slide.content {
            push_markdown_block(&mut out, block);
        }
    }

    out
}

fn push_markdown_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { text } => {
            let _ = writeln!(out, "### {text}\n");
        }
        Block::Text { text, .. } => {
            let _ = writeln!(out, "{text}\n");
        }
        Block::Bullets { items, .. } => {
            for item in items {
                let _ = writeln!(out, "- {item}");
            }
            out.push('\n');
        }
        Block::Callout { title, lines, .. } => {
            if let Some(title) = title {
                let _ = writeln!(out, "> **{title}**");
                if !lines.is_empty() {
                    out.push_str(">\n");
                }
            }
            for line in lines {
                let _ = writeln!(out, "> {line}");
            }
            out.push('\n');
        }
        Block::Formula { lines } => {
            out.push_str("```text\n");
            for line in lines {
                let _ = writeln!(out, "{line}");
            }
            out.push_str("```\n\n");
        }
        Block::Table { headers, rows } => {
            let _ = writeln!(out, "| {} |", headers.join(" | "));
            let _ = writeln!(
                out,
                "|{}",
                headers.iter().map(|_| " --- |").collect::<String>()
            );
            for row in rows {
                let _ = writeln!(out, "| {} |", row.join(" | "));
            }
            out.push('\n');
        }
        Block::Stats { items } => {
            for stat in items {
                let _ = writeln!(out, "- **{}** {}", stat.value, stat.label);
            }
            out.push('\n');
        }
        Block::Columns { columns } => {
            for column in columns {
                for block in column {
                    push_markdown_block(out, block);
                }
            }
        }
        Block::Quote { text } => {
            let _ = writeln!(out, "> _{text}_\n");
        }
    }
}

/// Plain-text rendering of one slide, as printed by `viva show`.
pub fn slide_to_text(index: usize, total: usize, slide: &Slide) -> String {
    let mut out = format!("[{}/{}] {}\n", index + 1, total, slide.title);
    if let Some(subtitle) = &slide.subtitle {
        let _ = writeln!(out, "{subtitle}");
    }
    out.push('\n');
    for block in &slide.content {
        push_text_block(&mut out, block, 0);
    }
    out
}

fn push_text_block(out: &mut String, block: &Block, indent: usize) {
    let pad = " ".repeat(indent);
    match block {
        Block::Heading { text } => {
            let _ = writeln!(out, "{pad}{text}");
            let _ = writeln!(out, "{pad}{}", "-".repeat(text.chars().count()));
        }
        Block::Text { text, .. } => {
            let _ = writeln!(out, "{pad}{text}");
        }
        Block::Bullets { items, .. } => {
            for item in items {
                let _ = writeln!(out, "{pad}• {item}");
            }
        }
        Block::Callout { title, lines, .. } => {
            if let Some(title) = title {
                let _ = writeln!(out, "{pad}| {title}");
            }
            for line in lines {
                let _ = writeln!(out, "{pad}|   {line}");
            }
        }
        Block::Formula { lines } => {
            for line in lines {
                let _ = writeln!(out, "{pad}    {line}");
            }
        }
        Block::Table { headers, rows } => {
            let widths = column_widths(headers, rows);
            push_table_row(out, &pad, headers, &widths);
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(out, "{pad}{}", rule.join("-+-"));
            for row in rows {
                push_table_row(out, &pad, row, &widths);
            }
        }
        Block::Stats { items } => {
            for stat in items {
                let _ = writeln!(out, "{pad}{:>8}  {}", stat.value, stat.label);
            }
        }
        Block::Columns { columns } => {
            for column in columns {
                for block in column {
                    push_text_block(out, block, indent + 2);
                }
                out.push('\n');
            }
            return;
        }
        Block::Quote { text } => {
            let _ = writeln!(out, "{pad}\"{text}\"");
        }
    }
    out.push('\n');
}

/// Character width of each table column, headers included.
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn push_table_row(out: &mut String, pad: &str, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            format!("{cell:<w$}")
        })
        .collect();
    let _ = writeln!(out, "{pad}{}", padded.join(" | ").trim_end());
}
