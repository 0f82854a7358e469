//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the config file, relative to the workspace root.
pub const DEFAULT_CONFIG_PATH: &str = ".clog/config.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub codec: CodecConfig,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where notes live inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Data directory, relative to the workspace root.
    #[serde(default = "default_clog_dir")]
    pub clog_dir: String,

    /// Memo directory, relative to `clog_dir`.
    #[serde(default = "default_memo_dir")]
    pub memo_dir: String,

    /// File extension for stored notes, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            clog_dir: default_clog_dir(),
            memo_dir: default_memo_dir(),
            extension: default_extension(),
        }
    }
}

fn default_clog_dir() -> String {
    ".clog".to_string()
}

fn default_memo_dir() -> String {
    "memo".to_string()
}

fn default_extension() -> String {
    "clog".to_string()
}

/// Codec tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,

    /// Bodies larger than this skip markdown inspection.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            summary_chars: default_summary_chars(),
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

fn default_summary_chars() -> usize {
    50
}

fn default_max_document_bytes() -> usize {
    4 * 1024 * 1024
}

/// Memo listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily log files; stderr only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file_dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
