//! Title, description and summary heuristics over a markdown body.

use tracing::warn;

use crate::markdown::{Block, CmarkInspector, Inline, MarkdownInspector};
use crate::preamble::{NO_CONTENT_SUMMARY, UNTITLED};

/// Default summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 50;

/// Text of the first level-1 heading, or the first line of the body.
pub fn extract_title(markdown: &str) -> String {
    title_with(&CmarkInspector::default(), markdown)
}

/// Text of the blocks that follow the first level-1 heading.
pub fn extract_description(markdown: &str) -> String {
    description_with(&CmarkInspector::default(), markdown)
}

/// The first 50 characters of the description, with a line-based fallback.
pub fn extract_summary(markdown: &str) -> String {
    summary_with(&CmarkInspector::default(), markdown, SUMMARY_MAX_CHARS)
}

pub(crate) fn title_with(inspector: &dyn MarkdownInspector, markdown: &str) -> String {
    if markdown.trim().is_empty() {
        return UNTITLED.to_string();
    }

    match inspector.inspect(markdown) {
        Ok(blocks) => {
            let heading = blocks.iter().find_map(|block| match block {
                Block::Heading { depth: 1, children } => children.iter().find_map(Inline::as_text),
                _ => None,
            });
            if let Some(title) = heading {
                return title.to_string();
            }
        }
        Err(e) => warn!("Markdown inspection failed, using first line as title: {}", e),
    }

    first_line_title(markdown)
}

fn first_line_title(markdown: &str) -> String {
    let first = markdown.split('\n').next().unwrap_or_default().trim();
    if first.is_empty() {
        UNTITLED.to_string()
    } else {
        first.to_string()
    }
}

pub(crate) fn description_with(inspector: &dyn MarkdownInspector, markdown: &str) -> String {
    let blocks = match inspector.inspect(markdown) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!("Markdown inspection failed, no description: {}", e);
            return String::new();
        }
    };

    let lines: Vec<String> = blocks
        .iter()
        .skip_while(|block| !block.is_heading(1))
        .skip(1)
        .filter_map(Block::literal_text)
        .collect();
    lines.join("\n").trim().to_string()
}

pub(crate) fn summary_with(
    inspector: &dyn MarkdownInspector,
    markdown: &str,
    max_chars: usize,
) -> String {
    let summary: String = description_with(inspector, markdown)
        .chars()
        .take(max_chars)
        .collect();
    if !summary.is_empty() {
        return summary;
    }

    // No heading or nothing after it: everything but the first non-blank line.
    let rest: Vec<&str> = markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .collect();
    let fallback: String = rest.join(" ").chars().take(max_chars).collect();

    if fallback.is_empty() {
        NO_CONTENT_SUMMARY.to_string()
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
