//! Configuration documents
//!
//! A `ConfigDocument` is an ordered string-keyed mapping of arbitrary nested
//! JSON-like data. Key order is the order of the source file.
//!
//! Typed readers distinguish three outcomes:
//! - `Ok(None)`: key absent, caller applies its documented default
//! - `Ok(Some(_))`: key present with the expected shape
//! - `Err(ConfigError::Malformed)`: key present with the wrong shape

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered configuration mapping for one industry or competitor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Create empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a parsed value; the root must be a mapping
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(ConfigError::malformed("<root>", "a mapping")),
        }
    }

    /// Builder-style insert
    #[inline]
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.root.insert(key.into(), value);
        self
    }

    /// Insert or replace a top-level entry
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.root.insert(key.into(), value);
    }

    /// Top-level value
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Whether a top-level key exists
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Number of top-level entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the document has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Borrow the underlying mapping
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Get value at path (dot notation), `None` on any miss
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        self.lookup(path).ok().flatten()
    }

    /// Get value at path, rejecting non-mapping intermediates
    ///
    /// # Errors
    /// `ConfigError::Malformed` naming the first intermediate segment that is
    /// present but not a mapping.
    pub fn lookup(&self, path: &str) -> ConfigResult<Option<&Value>> {
        let mut segments = path.split('.');
        let Some(first) = segments.next() else {
            return Ok(None);
        };
        let Some(mut current) = self.root.get(first) else {
            return Ok(None);
        };

        let mut walked = first.len();
        for segment in segments {
            let map = current
                .as_object()
                .ok_or_else(|| ConfigError::malformed(&path[..walked], "a mapping"))?;
            match map.get(segment) {
                Some(next) => current = next,
                None => return Ok(None),
            }
            walked += 1 + segment.len();
        }
        Ok(Some(current))
    }

    /// Read a sequence
    pub fn sequence(&self, path: &str) -> ConfigResult<Option<&[Value]>> {
        match self.lookup(path)? {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(_) => Err(ConfigError::malformed(path, "a sequence")),
        }
    }

    /// Read a mapping
    pub fn mapping(&self, path: &str) -> ConfigResult<Option<&Map<String, Value>>> {
        match self.lookup(path)? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(ConfigError::malformed(path, "a mapping")),
        }
    }

    /// Read a string
    pub fn str_value(&self, path: &str) -> ConfigResult<Option<&str>> {
        match self.lookup(path)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ConfigError::malformed(path, "a string")),
        }
    }

    /// Read a sequence of strings
    pub fn string_list(&self, path: &str) -> ConfigResult<Option<Vec<String>>> {
        let Some(items) = self.sequence(path)? else {
            return Ok(None);
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::malformed(format!("{path}[{i}]"), "a string"))
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some)
    }

    /// Read a mapping of string to string, preserving document order
    pub fn string_map(&self, path: &str) -> ConfigResult<Option<Vec<(String, String)>>> {
        let Some(map) = self.mapping(path)? else {
            return Ok(None);
        };
        map.iter()
            .map(|(key, value)| {
                value
                    .as_str()
                    .map(|v| (key.clone(), v.to_string()))
                    .ok_or_else(|| ConfigError::malformed(format!("{path}.{key}"), "a string"))
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some)
    }
}

impl From<Map<String, Value>> for ConfigDocument {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

impl TryFrom<Value> for ConfigDocument {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigDocument {
        ConfigDocument::from_value(json!({
            "switching_barriers": [],
            "timeline_phases": {"b_phase": "2_weeks", "a_phase": "4_weeks"},
            "success_metrics": ["m1", "m2"],
            "competitive_assessment": {"vulnerabilities": []},
            "name": "retail",
            "scalar": 3
        }))
        .unwrap()
    }

    #[test]
    fn from_value_rejects_non_mapping() {
        let err = ConfigDocument::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err.field(), Some("<root>"));
    }

    #[test]
    fn get_path_nested() {
        let doc = sample();
        assert!(doc.get_path("competitive_assessment.vulnerabilities").is_some());
        assert!(doc.get_path("competitive_assessment.missing").is_none());
        assert!(doc.get_path("scalar.inner").is_none());
    }

    #[test]
    fn lookup_rejects_scalar_intermediate() {
        let doc = sample();
        let err = doc.lookup("scalar.inner").unwrap_err();
        assert_eq!(err.field(), Some("scalar"));
    }

    #[test]
    fn string_map_preserves_order() {
        let doc = sample();
        let phases = doc.string_map("timeline_phases").unwrap().unwrap();
        let keys: Vec<_> = phases.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b_phase", "a_phase"]);
    }

    #[test]
    fn string_list_reads_strings() {
        let doc = sample();
        assert_eq!(
            doc.string_list("success_metrics").unwrap(),
            Some(vec!["m1".to_string(), "m2".to_string()])
        );
        assert_eq!(doc.string_list("absent").unwrap(), None);
    }

    #[test]
    fn string_list_names_offending_element() {
        let doc = ConfigDocument::new().with_entry("success_metrics", json!(["ok", 7]));
        let err = doc.string_list("success_metrics").unwrap_err();
        assert_eq!(err.field(), Some("success_metrics[1]"));
    }

    #[test]
    fn sequence_rejects_mapping() {
        let doc = sample();
        let err = doc.sequence("timeline_phases").unwrap_err();
        assert_eq!(err.field(), Some("timeline_phases"));
    }

    #[test]
    fn str_value_kinds() {
        let doc = sample();
        assert_eq!(doc.str_value("name").unwrap(), Some("retail"));
        assert!(doc.str_value("scalar").is_err());
        assert_eq!(doc.str_value("absent").unwrap(), None);
    }
}
