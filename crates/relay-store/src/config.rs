use serde::{Deserialize, Serialize};

/// Configuration for a document store.
///
/// Both flags default to `false`, which keeps every operation infallible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Reject uploads whose ID is already present with
    /// [`StoreError::DuplicateId`](crate::StoreError::DuplicateId).
    pub reject_duplicate_ids: bool,
    /// Report edits of absent documents with
    /// [`StoreError::NotFound`](crate::StoreError::NotFound).
    pub report_missing_edits: bool,
}

impl StoreConfig {
    /// Enforce unique IDs and surface missing edits as errors.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_ids: true,
            report_missing_edits: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        let config = StoreConfig::default();
        assert!(!config.reject_duplicate_ids);
        assert!(!config.report_missing_edits);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"reject_duplicate_ids":true}"#).unwrap();
        assert!(config.reject_duplicate_ids);
        assert!(!config.report_missing_edits);
    }
}
