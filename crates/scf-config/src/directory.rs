//! Directory-backed provider
//!
//! Layout:
//!
//! ```text
//! <root>/
//!   industries/<industry>.{json,yaml,yml}
//!   competitors/<competitor>.{json,yaml,yml}
//! ```
//!
//! Every document is read and parsed in [`DirectoryProvider::load`]; lookups
//! afterwards never touch the filesystem.

use crate::document::ConfigDocument;
use crate::error::{ConfigError, ConfigResult};
use crate::format::DocumentFormat;
use crate::provider::{ConfigProvider, DocumentKind, InMemoryProvider};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider loaded from a configuration directory
#[derive(Debug)]
pub struct DirectoryProvider {
    root: PathBuf,
    store: InMemoryProvider,
}

impl DirectoryProvider {
    /// Load all documents under `root`
    ///
    /// # Errors
    /// - `ConfigError::NotADirectory` if `root` is not a directory
    /// - `ConfigError::Io` / `ConfigError::Syntax` for unreadable or invalid files
    /// - `ConfigError::DuplicateKey` if two files share a stem (`a.json`, `a.yaml`)
    pub async fn load(root: impl Into<PathBuf>) -> ConfigResult<Self> {
        let root = root.into();
        let metadata = tokio::fs::metadata(&root)
            .await
            .map_err(|e| ConfigError::io_error(&root, e))?;
        if !metadata.is_dir() {
            return Err(ConfigError::NotADirectory(root));
        }

        let store = InMemoryProvider::new();
        for kind in DocumentKind::ALL {
            let dir = root.join(kind.directory_name());
            let count = load_kind(&dir, kind, &store).await?;
            tracing::info!(%kind, count, dir = %dir.display(), "loaded configuration documents");
        }

        Ok(Self { root, store })
    }

    /// Configuration root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of loaded documents
    #[inline]
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.store.len()
    }
}

impl ConfigProvider for DirectoryProvider {
    fn lookup(&self, kind: DocumentKind, key: &str) -> Option<Arc<ConfigDocument>> {
        self.store.lookup(kind, key)
    }

    fn keys(&self, kind: DocumentKind) -> Vec<String> {
        self.store.keys(kind)
    }
}

async fn load_kind(dir: &Path, kind: DocumentKind, store: &InMemoryProvider) -> ConfigResult<usize> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%kind, dir = %dir.display(), "configuration directory missing");
            return Ok(0);
        }
        Err(e) => return Err(ConfigError::io_error(dir, e)),
    };

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ConfigError::io_error(dir, e))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| ConfigError::io_error(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let Ok(format) = DocumentFormat::from_path(&path) else {
            tracing::debug!(path = %path.display(), "skipping non-configuration file");
            continue;
        };
        let Some(key) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };

        if let Some(first) = seen.get(&key) {
            return Err(ConfigError::DuplicateKey {
                kind,
                key,
                first: first.clone(),
                second: path,
            });
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ConfigError::io_error(&path, e))?;
        let document = format.parse(&content, &path)?;

        store.insert(kind, key.clone(), document);
        seen.insert(key, path);
    }

    Ok(seen.len())
}
