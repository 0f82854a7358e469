//! Codec fallback reasons.

use thiserror::Error;

/// Why a codec operation fell back to its plain-text result.
///
/// These never escape a public codec operation as a failure; they are carried
/// inside [`crate::DecodedNote::Plain`] and reported through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// No `---` delimited preamble could be located.
    #[error("No preamble found")]
    NoPreamble,

    /// The preamble block is not valid YAML.
    #[error("Failed to parse preamble: {0}")]
    PreambleParse(String),

    /// The preamble block parsed, but not as a key/value mapping.
    #[error("Preamble is not a key/value mapping")]
    PreambleNotMapping,

    /// The preamble could not be serialized.
    #[error("Failed to serialize preamble: {0}")]
    Serialize(String),

    /// The markdown document exceeds the inspector's size limit.
    #[error("Document too large for inspection: {len} bytes (limit {limit})")]
    DocumentTooLarge { len: usize, limit: usize },
}
