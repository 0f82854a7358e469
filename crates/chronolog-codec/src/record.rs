//! Timeline memo records.

use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata collected from `@key: value` lines.
///
/// `topic` and `time` are the keys the timeline format gives meaning to;
/// `link` lines accumulate into `links` instead of overwriting each other.
/// Every other key lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl RecordMetadata {
    /// Apply one parsed `@key: value` pair.
    pub fn apply(&mut self, key: &str, value: &str) {
        let value = value.trim().to_string();
        match key {
            "link" => self.links.push(value),
            "topic" => self.topic = Some(value),
            "time" => self.time = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Look up a value by its metadata key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "topic" => self.topic.as_deref(),
            "time" => self.time.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_none() && self.time.is_none() && self.links.is_empty() && self.extra.is_empty()
    }
}

/// A directed edge written inline as `[source] -> [target]: label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphConnection {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphConnection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One decoded timeline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoRecord {
    pub metadata: RecordMetadata,

    /// Body text, one `\n`-terminated line per content line.
    pub content: String,

    /// Identifier taken from an inline `@id:` token inside the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub graph_connections: Vec<GraphConnection>,
}

impl MemoRecord {
    /// A fresh record carrying an inherited topic, if any.
    pub(crate) fn with_topic(topic: Option<&str>) -> Self {
        let mut record = Self::default();
        record.metadata.topic = topic.map(str::to_string);
        record
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
