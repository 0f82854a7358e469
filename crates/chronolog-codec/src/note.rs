//! Conversion between markdown bodies and stored notes.

use tracing::{debug, warn};

use crate::extract::{self, SUMMARY_MAX_CHARS};
use crate::markdown::{CmarkInspector, MarkdownInspector};
use crate::preamble::{self, generate_preamble, DecodedNote};

/// Tunables for [`NoteCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Maximum summary length, in characters.
    pub summary_chars: usize,
    /// Documents above this size skip markdown inspection.
    pub max_document_bytes: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            summary_chars: SUMMARY_MAX_CHARS,
            max_document_bytes: CmarkInspector::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// Encodes markdown bodies into stored notes and decodes them back.
pub struct NoteCodec<I = CmarkInspector> {
    inspector: I,
    options: CodecOptions,
}

impl NoteCodec<CmarkInspector> {
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    pub fn with_options(options: CodecOptions) -> Self {
        let inspector = CmarkInspector::new().with_max_document_bytes(options.max_document_bytes);
        Self { inspector, options }
    }
}

impl Default for NoteCodec<CmarkInspector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MarkdownInspector> NoteCodec<I> {
    /// Create a codec over a custom markdown inspector.
    pub fn with_inspector(inspector: I, options: CodecOptions) -> Self {
        Self { inspector, options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn decode(&self, content: &str) -> DecodedNote {
        preamble::decode(content)
    }

    pub fn title(&self, markdown: &str) -> String {
        extract::title_with(&self.inspector, markdown)
    }

    pub fn description(&self, markdown: &str) -> String {
        extract::description_with(&self.inspector, markdown)
    }

    pub fn summary(&self, markdown: &str) -> String {
        extract::summary_with(&self.inspector, markdown, self.options.summary_chars)
    }

    /// Prefix `markdown` with a generated preamble.
    ///
    /// Returns `markdown` unchanged if the preamble cannot be produced.
    pub fn encode(&self, markdown: &str, id: &str, created: &str) -> String {
        let title = self.title(markdown);
        let summary = self.summary(markdown);

        match generate_preamble(id, &title, created, &summary) {
            Ok(preamble) => {
                let note = format!("---\n{}---\n\n{}", preamble, markdown);
                debug!("Encoded note {} ({} bytes)", id, note.len());
                note
            }
            Err(e) => {
                warn!("Failed to build preamble, storing plain markdown: {}", e);
                markdown.to_string()
            }
        }
    }

    /// Re-encode an existing note with a new body.
    ///
    /// `id` and `created` are carried over from the `prior` serialized note;
    /// `fallback_id` stands in for either when the prior note lacks it.
    pub fn update(&self, markdown: &str, prior: &str, fallback_id: &str) -> String {
        let (preamble, _) = self.decode(prior).into_parts();
        let carried = |field: Option<String>| {
            field
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| fallback_id.to_string())
        };
        let id = carried(preamble.id);
        let created = carried(preamble.created);
        self.encode(markdown, &id, &created)
    }
}

/// Decode a stored note with the default codec.
pub fn decode_note(content: &str) -> DecodedNote {
    preamble::decode(content)
}

/// Encode a markdown body with the default codec.
pub fn encode_note(markdown: &str, id: &str, created: &str) -> String {
    NoteCodec::new().encode(markdown, id, created)
}

/// Re-encode an existing note with the default codec.
pub fn update_note(markdown: &str, prior: &str, fallback_id: &str) -> String {
    NoteCodec::new().update(markdown, prior, fallback_id)
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
