//! Configuration providers
//!
//! Industry and competitor lookups deliberately behave differently when a key
//! is unknown. The difference lives in [`ResolutionPolicy`], selected per
//! [`DocumentKind`], and is applied in exactly one place:
//! [`ConfigProvider::resolve`].

use crate::document::ConfigDocument;
use crate::error::{ConfigError, ConfigResult};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Kind of configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Industry template (switching barriers, phases, metrics)
    Industry,
    /// Competitor profile (competitive assessment)
    Competitor,
}

impl DocumentKind {
    /// All kinds, in load order
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Industry, DocumentKind::Competitor];

    /// What to do when a key of this kind is unknown
    #[inline]
    #[must_use]
    pub fn resolution_policy(self) -> ResolutionPolicy {
        match self {
            DocumentKind::Industry => ResolutionPolicy::Required,
            DocumentKind::Competitor => ResolutionPolicy::UseDefault(default_competitor_profile),
        }
    }

    /// Subdirectory holding documents of this kind
    #[inline]
    #[must_use]
    pub fn directory_name(self) -> &'static str {
        match self {
            DocumentKind::Industry => "industries",
            DocumentKind::Competitor => "competitors",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Industry => f.write_str("industry"),
            DocumentKind::Competitor => f.write_str("competitor"),
        }
    }
}

/// Behaviour on an unknown key
#[derive(Debug, Clone, Copy)]
pub enum ResolutionPolicy {
    /// Unknown key is a caller error
    Required,
    /// Unknown key resolves to a generated default document
    UseDefault(fn() -> ConfigDocument),
}

impl ResolutionPolicy {
    /// Apply the policy to a lookup outcome
    pub fn apply(
        self,
        kind: DocumentKind,
        key: &str,
        found: Option<Arc<ConfigDocument>>,
    ) -> ConfigResult<Arc<ConfigDocument>> {
        match (found, self) {
            (Some(document), _) => Ok(document),
            (None, ResolutionPolicy::Required) => Err(ConfigError::NotFound {
                kind,
                key: key.to_string(),
            }),
            (None, ResolutionPolicy::UseDefault(default)) => {
                tracing::debug!(%kind, key, "unknown key, substituting default document");
                Ok(Arc::new(default()))
            }
        }
    }

    /// Whether an unknown key is an error
    #[inline]
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, ResolutionPolicy::Required)
    }
}

/// Default profile for competitors without a configuration document
#[must_use]
pub fn default_competitor_profile() -> ConfigDocument {
    ConfigDocument::new()
        .with_entry("competitor_type", json!("unknown"))
        .with_entry("market_position", json!("undefined"))
        .with_entry(
            "competitive_assessment",
            json!({
                "strengths": ["market_presence"],
                "weaknesses": ["unknown_vulnerabilities"],
                "vulnerabilities": []
            }),
        )
}

/// Source of configuration documents
///
/// Implementors supply raw lookups; resolution semantics are shared.
/// Lookups are in-memory: any I/O belongs to provider construction.
pub trait ConfigProvider: Send + Sync + fmt::Debug {
    /// Raw lookup, `None` if the key is unknown
    fn lookup(&self, kind: DocumentKind, key: &str) -> Option<Arc<ConfigDocument>>;

    /// Known keys of a kind, sorted
    fn keys(&self, kind: DocumentKind) -> Vec<String>;

    /// Look up a key and apply the kind's resolution policy
    ///
    /// # Errors
    /// `ConfigError::NotFound` when the key is unknown and the kind's policy is
    /// `Required`.
    fn resolve(&self, kind: DocumentKind, key: &str) -> ConfigResult<Arc<ConfigDocument>> {
        kind.resolution_policy()
            .apply(kind, key, self.lookup(kind, key))
    }

    /// Industry template; unknown industries are an error
    fn get_industry_config(&self, industry: &str) -> ConfigResult<Arc<ConfigDocument>> {
        self.resolve(DocumentKind::Industry, industry)
    }

    /// Competitor profile; unknown competitors resolve to the default profile
    fn get_competitor_profile(&self, competitor: &str) -> ConfigResult<Arc<ConfigDocument>> {
        self.resolve(DocumentKind::Competitor, competitor)
    }
}

/// Concurrent in-memory document store
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    documents: DashMap<(DocumentKind, String), Arc<ConfigDocument>>,
}

impl InMemoryProvider {
    /// Create empty provider
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document
    pub fn insert(&self, kind: DocumentKind, key: impl Into<String>, document: ConfigDocument) {
        self.documents.insert((kind, key.into()), Arc::new(document));
    }

    /// Builder-style industry insert
    #[must_use]
    pub fn with_industry(self, key: impl Into<String>, document: ConfigDocument) -> Self {
        self.insert(DocumentKind::Industry, key, document);
        self
    }

    /// Builder-style competitor insert
    #[must_use]
    pub fn with_competitor(self, key: impl Into<String>, document: ConfigDocument) -> Self {
        self.insert(DocumentKind::Competitor, key, document);
        self
    }

    /// Total number of documents across kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents are stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ConfigProvider for InMemoryProvider {
    fn lookup(&self, kind: DocumentKind, key: &str) -> Option<Arc<ConfigDocument>> {
        self.documents
            .get(&(kind, key.to_string()))
            .map(|entry| Arc::clone(entry.value()))
    }

    fn keys(&self, kind: DocumentKind) -> Vec<String> {
        let mut keys: Vec<String> = self
            .documents
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .map(|entry| entry.key().1.clone())
            .collect();
        keys.sort();
        keys
    }
}
