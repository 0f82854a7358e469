//! Timeline document parser.
//!
//! A timeline document is a sequence of memos written as plain lines:
//!
//! ```text
//! @topic: release
//! @link: https://example.com/issue/1
//! Cut the branch today. @id: rel-1
//! [branch] -> [tag]: after review
//!
//!
//! Second memo, still tagged `release`.
//! ```
//!
//! `---` or two consecutive blank lines end a memo; a single blank line inside
//! a memo is kept as content. Lines starting with `#` are comments.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::record::{GraphConnection, MemoRecord};

static METADATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+):\s*(.*)").unwrap());
static INLINE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@id:\s*(\S+)").unwrap());
static GRAPH_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\s*->\s*\[([^\]]+)\](?::\s*(.+))?").unwrap()
});

/// Parser for timeline documents.
pub struct RecordParser;

impl RecordParser {
    /// Decode a timeline document into memo records.
    ///
    /// Never fails: malformed lines are skipped or kept as content, and blank
    /// records are dropped.
    pub fn parse(text: &str) -> Vec<MemoRecord> {
        let records = text
            .split('\n')
            .fold(ParseState::default(), ParseState::step)
            .finish();
        debug!("Parsed {} memo record(s) from timeline", records.len());
        records
    }
}

/// Decode a timeline document into memo records.
pub fn parse_records(text: &str) -> Vec<MemoRecord> {
    RecordParser::parse(text)
}

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
struct ParseState {
    records: Vec<MemoRecord>,
    current: MemoRecord,
    last_topic: Option<String>,
    collecting: bool,
    previous_blank: bool,
}

impl ParseState {
    fn step(mut self, line: &str) -> Self {
        let trimmed = line.trim();
        let blank = trimmed.is_empty();
        let boundary = trimmed == "---" || (blank && self.previous_blank);
        self.previous_blank = blank;

        if boundary {
            self.close_record();
            self.collecting = false;
            return self;
        }

        if line.starts_with('#') {
            return self;
        }

        if line.starts_with('@') {
            self.collecting = true;
            self.apply_metadata(line);
            return self;
        }

        if self.collecting || !blank {
            self.collecting = true;
            self.push_content(line);
        }
        self
    }

    fn is_retained(&self) -> bool {
        self.current.has_content() || !self.current.metadata.is_empty()
    }

    /// Push the current record if it holds anything and start the next one.
    fn close_record(&mut self) {
        if !self.is_retained() {
            return;
        }
        let next = MemoRecord::with_topic(self.last_topic.as_deref());
        self.records.push(std::mem::replace(&mut self.current, next));
    }

    fn apply_metadata(&mut self, line: &str) {
        let Some(caps) = METADATA_RE.captures(line) else {
            return;
        };
        let (key, value) = (&caps[1], &caps[2]);
        self.current.metadata.apply(key, value);
        if key == "topic" {
            self.last_topic = Some(value.trim().to_string());
        }
    }

    fn push_content(&mut self, line: &str) {
        let record = &mut self.current;

        match INLINE_ID_RE.captures(line) {
            Some(caps) => {
                record.id = Some(caps[1].to_string());
                let stripped = INLINE_ID_RE.replace(line, "");
                record.content.push_str(stripped.trim());
            }
            None => record.content.push_str(line),
        }
        record.content.push('\n');

        record
            .graph_connections
            .extend(GRAPH_EDGE_RE.captures_iter(line).map(|caps| {
                let edge = GraphConnection::new(&caps[1], &caps[2]);
                match caps.get(3).map(|m| m.as_str().trim()) {
                    Some(label) if !label.is_empty() => edge.with_label(label),
                    _ => edge,
                }
            }));
    }

    fn finish(mut self) -> Vec<MemoRecord> {
        if self.is_retained() {
            self.records.push(self.current);
        }
        self.records
    }
}

#[cfg(test)]
#[path = "record_parser_tests.rs"]
mod tests;
