//! Filesystem memo store.

use std::fs::Metadata;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, warn};

use chronolog_codec::datetime::now_timestamp;
use chronolog_codec::{CodecOptions, NoteCodec, Preamble};
use chronolog_config::Config;

use crate::error::StoreError;

/// Layout and codec settings for a [`MemoStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Data directory, relative to the workspace root.
    pub clog_dir: String,
    /// Memo directory, relative to `clog_dir`.
    pub memo_dir: String,
    /// Note file extension, without the dot.
    pub extension: String,
    pub codec: CodecOptions,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for StoreConfig {
    fn from(config: &Config) -> Self {
        Self {
            clog_dir: config.workspace.clog_dir.clone(),
            memo_dir: config.workspace.memo_dir.clone(),
            extension: config.workspace.extension.clone(),
            codec: CodecOptions {
                summary_chars: config.codec.summary_chars,
                max_document_bytes: config.codec.max_document_bytes,
            },
        }
    }
}

/// Where a memo was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoRef {
    pub id: String,
    pub path: PathBuf,
}

/// A memo split into its preamble and markdown body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoDocument {
    pub id: String,
    pub preamble: Preamble,
    pub body: String,
}

/// One row of the memo listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoSummary {
    pub id: String,
    pub file_name: String,
    /// The note's `created` timestamp.
    pub datetime: String,
    pub title: String,
    pub summary: String,
}

/// Memo notes stored as one file each under the workspace memo directory.
pub struct MemoStore {
    clog_dir: PathBuf,
    memo_dir: PathBuf,
    extension: String,
    codec: NoteCodec,
}

impl MemoStore {
    pub fn new(workspace_root: impl AsRef<Path>, config: &StoreConfig) -> Self {
        let clog_dir = workspace_root.as_ref().join(&config.clog_dir);
        let memo_dir = clog_dir.join(&config.memo_dir);
        Self {
            clog_dir,
            memo_dir,
            extension: config.extension.clone(),
            codec: NoteCodec::with_options(config.codec.clone()),
        }
    }

    pub fn clog_dir(&self) -> &Path {
        &self.clog_dir
    }

    pub fn memo_dir(&self) -> &Path {
        &self.memo_dir
    }

    /// Create the data and memo directories if they are missing.
    ///
    /// Returns the directories that were created.
    pub async fn initialize_workspace_dirs(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut created = Vec::new();

        for dir in [&self.clog_dir, &self.memo_dir] {
            if fs::metadata(dir).await.is_ok_and(|meta| meta.is_dir()) {
                continue;
            }
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::CreateDirFailed {
                    path: dir.clone(),
                    reason: e.to_string(),
                })?;
            info!("Created directory: {:?}", dir);
            created.push(dir.clone());
        }

        Ok(created)
    }

    /// File name for a memo ID, with unsafe characters replaced by `_`.
    pub fn id_to_filename(&self, id: &str) -> Result<String, StoreError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        let safe_id: String = trimmed
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        Ok(format!("{}.{}", safe_id, self.extension))
    }

    /// Extract the memo ID from a file name with the store's extension.
    pub fn filename_to_id(&self, filename: &str) -> Option<String> {
        filename
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|stem| !stem.is_empty())
            .map(|stem| stem.to_string())
    }

    fn memo_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        Ok(self.memo_dir.join(self.id_to_filename(id)?))
    }

    /// Save `text` as a new memo identified by the current local time.
    ///
    /// A `-2`, `-3`, ... suffix is appended when a memo was already saved
    /// within the same second.
    pub async fn save_new(&self, text: &str) -> Result<MemoRef, StoreError> {
        self.initialize_workspace_dirs().await?;

        let created = now_timestamp();
        let (id, path) = self.unused_id(&created).await?;
        let content = self.codec.encode(text, &id, &created);
        fs::write(&path, content).await?;
        info!("Saved new memo {} to {:?}", id, path);

        Ok(MemoRef { id, path })
    }

    async fn unused_id(&self, base: &str) -> Result<(String, PathBuf), StoreError> {
        let mut id = base.to_string();
        let mut attempt = 1;
        loop {
            let path = self.memo_path(&id)?;
            if !fs::try_exists(&path).await? {
                return Ok((id, path));
            }
            attempt += 1;
            id = format!("{}-{}", base, attempt);
        }
    }

    /// Replace the body of memo `id`, keeping its `id` and `created` fields.
    pub async fn save_existing(&self, text: &str, id: &str) -> Result<MemoRef, StoreError> {
        let path = self.memo_path(id)?;
        let prior = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Memo {} has no file yet, writing a fresh preamble", id);
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        self.initialize_workspace_dirs().await?;
        let content = self.codec.update(text, &prior, id);
        fs::write(&path, content).await?;
        info!("Updated memo {} at {:?}", id, path);

        Ok(MemoRef {
            id: id.to_string(),
            path,
        })
    }

    /// The stored file for memo `id`, preamble included.
    pub async fn read_raw(&self, id: &str) -> Result<String, StoreError> {
        let path = self.memo_path(id)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(id.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_memo(&self, id: &str) -> Result<MemoDocument, StoreError> {
        let content = self.read_raw(id).await?;
        let decoded = self.codec.decode(&content);
        if !decoded.is_structured() {
            debug!("Memo {} has no preamble, returning it as plain markdown", id);
        }
        let (preamble, body) = decoded.into_parts();

        Ok(MemoDocument {
            id: id.to_string(),
            preamble,
            body,
        })
    }

    /// The `limit` most recently modified memos, newest first.
    ///
    /// Memos whose preamble lacks a `created`, `title` or `summary` are
    /// skipped, so fewer than `limit` entries may be returned.
    pub async fn list_latest(&self, limit: usize) -> Result<Vec<MemoSummary>, StoreError> {
        if !fs::try_exists(&self.memo_dir).await? {
            debug!("Memo directory {:?} does not exist", self.memo_dir);
            return Ok(Vec::new());
        }

        let mut files: Vec<(PathBuf, String, String, SystemTime)> = Vec::new();
        let mut entries = fs::read_dir(&self.memo_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let Some(id) = self.filename_to_id(&file_name) else {
                continue;
            };
            match file_mtime(entry.metadata().await) {
                Ok(Some(modified)) => files.push((entry.path(), file_name, id, modified)),
                Ok(None) => {}
                Err(e) => warn!("Skipping memo {}: cannot stat: {}", file_name, e),
            }
        }

        files.sort_by(|a, b| b.3.cmp(&a.3).then_with(|| b.1.cmp(&a.1)));

        let mut summaries = Vec::new();
        for (path, file_name, id, _) in files.into_iter().take(limit) {
            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable memo {}: {}", file_name, e);
                    continue;
                }
            };

            let (preamble, _) = self.codec.decode(&content).into_parts();
            if !preamble.is_complete() {
                warn!("Skipping memo {}: preamble lacks created, title or summary", file_name);
                continue;
            }

            summaries.push(MemoSummary {
                id,
                file_name,
                datetime: preamble.created.unwrap_or_default(),
                title: preamble.title.unwrap_or_default(),
                summary: preamble.summary.unwrap_or_default(),
            });
        }

        debug!("Listed {} memos from {:?}", summaries.len(), self.memo_dir);
        Ok(summaries)
    }
}

/// Modification time of a listed entry; `None` for anything but a file.
fn file_mtime(metadata: io::Result<Metadata>) -> io::Result<Option<SystemTime>> {
    let metadata = metadata?;
    if !metadata.is_file() {
        return Ok(None);
    }
    metadata.modified().map(Some)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
