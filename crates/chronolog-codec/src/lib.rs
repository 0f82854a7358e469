//! ChronoLog text codec.
//!
//! Two independent halves live here:
//!
//! - the [`RecordParser`], which decodes a legacy timeline document
//!   (`@key: value` metadata lines, `---` separators) into [`MemoRecord`]s;
//! - the note codec, which wraps a markdown body in a YAML preamble and back.
//!
//! ## Storage Format
//!
//! ```text
//! ---
//! id: 20250513T231243
//! title: Meeting Notes
//! created: 20250513T231243
//! summary: The first fifty characters after the heading...
//! ---
//!
//! # Meeting Notes
//!
//! The actual note content goes here...
//! ```
//!
//! Every operation is total over string input: failures surface as fallback
//! values (sentinels, [`DecodedNote::Plain`]) and `tracing` diagnostics.

pub mod datetime;
mod error;
mod extract;
pub mod markdown;
mod note;
mod preamble;
mod record;
mod record_parser;

pub use error::CodecError;
pub use extract::{extract_description, extract_summary, extract_title};
pub use markdown::{Block, CmarkInspector, Inline, MarkdownInspector};
pub use note::{decode_note, encode_note, update_note, CodecOptions, NoteCodec};
pub use preamble::{
    generate_preamble, DecodedNote, Preamble, StoredNote, NO_CONTENT_SUMMARY, UNTITLED,
    ZERO_TIMESTAMP,
};
pub use record::{GraphConnection, MemoRecord, RecordMetadata};
pub use record_parser::{parse_records, RecordParser};
