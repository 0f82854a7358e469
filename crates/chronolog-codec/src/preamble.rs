//! Note preamble: the YAML block between the leading `---` lines.

use serde::Serialize;
use serde_yml::{Mapping, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::CodecError;

/// Title used when none can be derived.
pub const UNTITLED: &str = "タイトルなし";

/// Identifier and creation time used when none is supplied.
pub const ZERO_TIMESTAMP: &str = "00000000T000000";

/// Summary used when the body has nothing to summarize.
pub const NO_CONTENT_SUMMARY: &str = "(no content)";

/// Decoded preamble fields.
///
/// Scalar values of the four known keys are read as strings; any other key
/// is preserved as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preamble {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Preamble {
    fn from_mapping(mapping: Mapping) -> Self {
        let mut preamble = Self::default();
        for (key, value) in mapping {
            let Some(key) = scalar_to_string(&key) else {
                debug!("Skipping non-scalar preamble key: {:?}", key);
                continue;
            };
            match key.as_str() {
                "id" => preamble.id = scalar_to_string(&value),
                "title" => preamble.title = scalar_to_string(&value),
                "created" => preamble.created = scalar_to_string(&value),
                "summary" => preamble.summary = scalar_to_string(&value),
                _ => {
                    preamble.extra.insert(key.clone(), value);
                }
            }
        }
        preamble
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.created.is_none()
            && self.summary.is_none()
            && self.extra.is_empty()
    }

    /// Whether `created`, `title` and `summary` are all present and non-empty.
    pub fn is_complete(&self) -> bool {
        [&self.created, &self.title, &self.summary]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// A note with a successfully decoded preamble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredNote {
    pub preamble: Preamble,
    pub body: String,
}

/// Result of decoding a stored note.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedNote {
    Structured(StoredNote),
    /// No usable preamble; `body` is the whole input, unchanged.
    Plain { body: String, reason: CodecError },
}

impl DecodedNote {
    pub fn preamble(&self) -> Option<&Preamble> {
        match self {
            DecodedNote::Structured(note) => Some(&note.preamble),
            DecodedNote::Plain { .. } => None,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            DecodedNote::Structured(note) => &note.body,
            DecodedNote::Plain { body, .. } => body,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, DecodedNote::Structured(_))
    }

    /// Split into preamble (empty when none was found) and body.
    pub fn into_parts(self) -> (Preamble, String) {
        match self {
            DecodedNote::Structured(note) => (note.preamble, note.body),
            DecodedNote::Plain { body, .. } => (Preamble::default(), body),
        }
    }
}

#[derive(Serialize)]
struct PreambleFields<'a> {
    id: &'a str,
    title: &'a str,
    created: &'a str,
    summary: &'a str,
}

/// Serialize the four preamble fields, in order, as a YAML block mapping.
///
/// Blank arguments are replaced with [`ZERO_TIMESTAMP`], [`UNTITLED`] and
/// [`NO_CONTENT_SUMMARY`]. The returned text ends with a newline and has no
/// `---` delimiters.
pub fn generate_preamble(
    id: &str,
    title: &str,
    created: &str,
    summary: &str,
) -> Result<String, CodecError> {
    if [id, title, created, summary].iter().any(|f| f.trim().is_empty()) {
        warn!(
            "Preamble field(s) missing, using placeholders: id={:?} title={:?} created={:?} summary={:?}",
            id, title, created, summary
        );
    }

    let fields = PreambleFields {
        id: or_sentinel(id, ZERO_TIMESTAMP),
        title: or_sentinel(title, UNTITLED),
        created: or_sentinel(created, ZERO_TIMESTAMP),
        summary: or_sentinel(summary, NO_CONTENT_SUMMARY),
    };

    let yaml =
        serde_yml::to_string(&fields).map_err(|e| CodecError::Serialize(e.to_string()))?;
    let mut yaml = yaml.strip_prefix("---\n").map(str::to_string).unwrap_or(yaml);
    if !yaml.ends_with('\n') {
        yaml.push('\n');
    }

    debug!("Generated preamble:\n{}", yaml);
    Ok(yaml)
}

fn or_sentinel<'a>(value: &'a str, sentinel: &'a str) -> &'a str {
    if value.trim().is_empty() { sentinel } else { value }
}

/// Decode `content` into preamble and body, falling back to plain content.
pub(crate) fn decode(content: &str) -> DecodedNote {
    let Some((block, body)) = split_preamble(content) else {
        warn!("No preamble found, treating note as plain markdown");
        return DecodedNote::Plain {
            body: content.to_string(),
            reason: CodecError::NoPreamble,
        };
    };

    match parse_block(block) {
        Ok(preamble) => {
            debug!("Parsed preamble: {:?}", preamble);
            DecodedNote::Structured(StoredNote {
                preamble,
                body: body.to_string(),
            })
        }
        Err(reason) => {
            warn!("Ignoring unreadable preamble: {}", reason);
            DecodedNote::Plain {
                body: content.to_string(),
                reason,
            }
        }
    }
}

/// Locate the preamble block and the body that follows it.
///
/// The block is the first non-blank fragment closed by a `---` line; the
/// body is everything after that line minus one leading blank line.
fn split_preamble(content: &str) -> Option<(&str, &str)> {
    let mut fragment_start = 0;
    let mut line_start = 0;

    for line in content.split_inclusive('\n') {
        let line_end = line_start + line.len();
        if is_separator(line) {
            let fragment = &content[fragment_start..line_start];
            if !fragment.trim().is_empty() {
                return Some((fragment, strip_blank_line(&content[line_end..])));
            }
            fragment_start = line_end;
        }
        line_start = line_end;
    }
    None
}

fn is_separator(line: &str) -> bool {
    line.trim_end() == "---"
}

fn strip_blank_line(text: &str) -> &str {
    match text.split_once('\n') {
        Some((first, rest)) if first.trim().is_empty() => rest,
        _ => text,
    }
}

fn parse_block(block: &str) -> Result<Preamble, CodecError> {
    let value: Value =
        serde_yml::from_str(block).map_err(|e| CodecError::PreambleParse(e.to_string()))?;
    match value {
        Value::Mapping(mapping) => Ok(Preamble::from_mapping(mapping)),
        _ => Err(CodecError::PreambleNotMapping),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "preamble_tests.rs"]
mod tests;
