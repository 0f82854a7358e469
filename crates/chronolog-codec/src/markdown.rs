//! Markdown structure inspection.
//!
//! Title and summary derivation only need a shallow view of a document: the
//! ordered top-level blocks and, for headings and paragraphs, the inline runs
//! that carry literal text. [`MarkdownInspector`] is the seam; the default
//! [`CmarkInspector`] walks `pulldown-cmark` events.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::error::CodecError;

/// An inline child of a heading or paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text. Adjacent runs and soft line breaks are merged.
    Text(String),
    /// Inline code span.
    Code(String),
    /// Raw inline HTML.
    Html(String),
    /// Emphasis, links, images, hard breaks and anything else without a
    /// literal value of its own.
    Other,
}

impl Inline {
    /// The literal value of this node, if it has one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Inline::Text(s) | Inline::Code(s) | Inline::Html(s) => Some(s),
            Inline::Other => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A top-level markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: u8, children: Vec<Inline> },
    Paragraph { children: Vec<Inline> },
    /// A list. Its items are block containers, so it has no direct inline
    /// children.
    List { ordered: bool, items: usize },
    Other,
}

impl Block {
    pub fn is_heading(&self, level: u8) -> bool {
        matches!(self, Block::Heading { depth, .. } if *depth == level)
    }

    /// Concatenated literal text of the direct inline children.
    ///
    /// `None` for blocks that are not headings, paragraphs or lists.
    pub fn literal_text(&self) -> Option<String> {
        match self {
            Block::Heading { children, .. } | Block::Paragraph { children } => {
                Some(children.iter().filter_map(Inline::literal).collect())
            }
            Block::List { .. } => Some(String::new()),
            Block::Other => None,
        }
    }
}

/// Produces the top-level block structure of a markdown document.
pub trait MarkdownInspector: Send + Sync {
    fn inspect(&self, markdown: &str) -> Result<Vec<Block>, CodecError>;
}

/// [`MarkdownInspector`] backed by `pulldown-cmark`.
#[derive(Debug, Clone)]
pub struct CmarkInspector {
    max_document_bytes: usize,
}

impl CmarkInspector {
    pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;

    pub fn new() -> Self {
        Self {
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Reject documents larger than `limit` bytes.
    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = limit;
        self
    }
}

impl Default for CmarkInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownInspector for CmarkInspector {
    fn inspect(&self, markdown: &str) -> Result<Vec<Block>, CodecError> {
        if markdown.len() > self.max_document_bytes {
            return Err(CodecError::DocumentTooLarge {
                len: markdown.len(),
                limit: self.max_document_bytes,
            });
        }
        Ok(BlockWalker::default().walk(Parser::new(markdown)))
    }
}

/// Folds the event stream into top-level blocks.
#[derive(Default)]
struct BlockWalker {
    blocks: Vec<Block>,
    current: Option<Block>,
    block_depth: usize,
    inline_depth: usize,
}

impl BlockWalker {
    fn walk<'a>(mut self, events: impl Iterator<Item = Event<'a>>) -> Vec<Block> {
        for event in events {
            self.handle(event);
        }
        self.blocks
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) if is_inline_tag(&tag) => {
                self.push_inline(Inline::Other);
                self.inline_depth += 1;
            }
            Event::End(end) if is_inline_end(&end) => {
                self.inline_depth = self.inline_depth.saturating_sub(1);
            }
            Event::Start(tag) => self.open_block(tag),
            Event::End(_) => self.close_block(),
            Event::Text(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text("\n"),
            Event::Code(code) => self.push_inline(Inline::Code(code.into_string())),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.into_string())),
            Event::Rule if self.block_depth == 0 => self.blocks.push(Block::Other),
            _ => self.push_inline(Inline::Other),
        }
    }

    fn open_block(&mut self, tag: Tag<'_>) {
        if self.block_depth == 0 {
            self.current = Some(match tag {
                Tag::Heading { level, .. } => Block::Heading {
                    depth: level as u8,
                    children: Vec::new(),
                },
                Tag::Paragraph => Block::Paragraph {
                    children: Vec::new(),
                },
                Tag::List(start) => Block::List {
                    ordered: start.is_some(),
                    items: 0,
                },
                _ => Block::Other,
            });
        } else if self.block_depth == 1 && matches!(tag, Tag::Item) {
            if let Some(Block::List { items, .. }) = self.current.as_mut() {
                *items += 1;
            }
        }
        self.block_depth += 1;
    }

    fn close_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
        if self.block_depth == 0 {
            if let Some(block) = self.current.take() {
                self.blocks.push(block);
            }
        }
    }

    /// Inline children of the current block, when the walker is directly
    /// inside a top-level heading or paragraph.
    fn direct_children(&mut self) -> Option<&mut Vec<Inline>> {
        if self.block_depth != 1 || self.inline_depth != 0 {
            return None;
        }
        match self.current.as_mut()? {
            Block::Heading { children, .. } | Block::Paragraph { children } => Some(children),
            _ => None,
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        if let Some(children) = self.direct_children() {
            children.push(inline);
        }
    }

    fn push_text(&mut self, text: &str) {
        let Some(children) = self.direct_children() else {
            return;
        };
        match children.last_mut() {
            Some(Inline::Text(run)) => run.push_str(text),
            _ => children.push(Inline::Text(text.to_string())),
        }
    }
}

fn is_inline_tag(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn is_inline_end(end: &TagEnd) -> bool {
    matches!(
        end,
        TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
