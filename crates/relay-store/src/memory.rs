use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use relay_types::{Document, DocumentId};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// In-memory, `Vec`-based document store.
///
/// Documents are kept in insertion order behind a `RwLock`: one writer at a
/// time, any number of concurrent readers. Documents are cloned on the way
/// in and out.
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
    config: StoreConfig,
}

impl InMemoryDocumentStore {
    /// Create a new empty store with the permissive default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Remove all documents from the store.
    pub fn clear(&self) {
        self.write_guard().clear();
    }

    /// Every stored document in insertion order.
    pub fn snapshot(&self) -> Vec<Document> {
        self.read_guard().clone()
    }

    // A writer that panicked mid-operation leaves the Vec structurally valid,
    // so poisoned guards are recovered rather than propagated.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Document>> {
        self.documents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Document>> {
        self.documents.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn upload(&self, document: Document) -> StoreResult<()> {
        let mut documents = self.write_guard();
        if self.config.reject_duplicate_ids && documents.iter().any(|d| d.id == document.id) {
            tracing::warn!(id = %document.id, "rejecting upload of duplicate document id");
            return Err(StoreError::DuplicateId(document.id));
        }
        tracing::debug!(id = %document.id, title = %document.title, "document uploaded");
        documents.push(document);
        Ok(())
    }

    fn download(&self, id: DocumentId) -> StoreResult<Option<Document>> {
        let documents = self.read_guard();
        Ok(documents.iter().find(|d| d.id == id).cloned())
    }

    fn edit(&self, id: DocumentId, new_content: &str) -> StoreResult<bool> {
        let mut documents = self.write_guard();
        match documents.iter().position(|d| d.id == id) {
            Some(index) => {
                let edited = documents[index].with_content(new_content);
                documents[index] = edited;
                tracing::debug!(%id, "document edited");
                Ok(true)
            }
            None if self.config.report_missing_edits => {
                tracing::warn!(%id, "edit of missing document");
                Err(StoreError::NotFound(id))
            }
            None => Ok(false),
        }
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Document>> {
        let documents = self.read_guard();
        Ok(documents.iter().filter(|d| d.matches(query)).cloned().collect())
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_one() -> Document {
        Document::new(1, "Document 1", "This is the content of Document 1")
            .with_metadata("author", "John Doe")
    }

    // -----------------------------------------------------------------------
    // Upload / download
    // -----------------------------------------------------------------------

    #[test]
    fn upload_then_download_round_trips() {
        let store = InMemoryDocumentStore::new();
        let doc = document_one();
        store.upload(doc.clone()).unwrap();

        let read_back = store.download(DocumentId(1)).unwrap().expect("should exist");
        assert_eq!(read_back, doc);
    }

    #[test]
    fn download_missing_returns_none() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        assert!(store.download(DocumentId(2)).unwrap().is_none());
    }

    #[test]
    fn download_returns_a_copy() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();

        let mut copy = store.download(DocumentId(1)).unwrap().unwrap();
        copy.content.push_str(" (changed locally)");

        let stored = store.download(DocumentId(1)).unwrap().unwrap();
        assert_eq!(stored.content, "This is the content of Document 1");
    }

    // -----------------------------------------------------------------------
    // Duplicate IDs
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_ids_are_kept_by_default() {
        let store = InMemoryDocumentStore::new();
        store.upload(Document::new(1, "first", "a")).unwrap();
        store.upload(Document::new(1, "second", "b")).unwrap();
        assert_eq!(store.len(), 2);

        // First-inserted wins on download.
        let doc = store.download(DocumentId(1)).unwrap().unwrap();
        assert_eq!(doc.title, "first");
    }

    #[test]
    fn edit_targets_first_duplicate_only() {
        let store = InMemoryDocumentStore::new();
        store.upload(Document::new(1, "first", "a")).unwrap();
        store.upload(Document::new(1, "second", "b")).unwrap();

        assert!(store.edit(DocumentId(1), "X").unwrap());
        let contents: Vec<String> = store.snapshot().into_iter().map(|d| d.content).collect();
        assert_eq!(contents, vec!["X", "b"]);
    }

    #[test]
    fn duplicate_ids_rejected_when_configured() {
        let store = InMemoryDocumentStore::with_config(StoreConfig {
            reject_duplicate_ids: true,
            ..Default::default()
        });
        store.upload(Document::new(1, "first", "a")).unwrap();
        let err = store.upload(Document::new(1, "second", "b")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(DocumentId(1)));
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Edit
    // -----------------------------------------------------------------------

    #[test]
    fn edit_replaces_content_only() {
        let store = InMemoryDocumentStore::new();
        let original = document_one();
        store.upload(original.clone()).unwrap();

        assert!(store.edit(DocumentId(1), "X").unwrap());
        let edited = store.download(DocumentId(1)).unwrap().unwrap();
        assert_eq!(edited.content, "X");
        assert_eq!(edited.title, original.title);
        assert_eq!(edited.metadata, original.metadata);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn edit_missing_is_a_no_op() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        let before = store.snapshot();

        assert!(!store.edit(DocumentId(42), "X").unwrap());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn edit_missing_reported_when_configured() {
        let store = InMemoryDocumentStore::with_config(StoreConfig::strict());
        let err = store.edit(DocumentId(42), "X").unwrap_err();
        assert_eq!(err, StoreError::NotFound(DocumentId(42)));
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    #[test]
    fn search_matches_title_or_content_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        store
            .upload_batch(vec![
                Document::new(3, "Roadmap", "quarterly plan"),
                Document::new(1, "Notes", "plan for the offsite"),
                Document::new(2, "Budget", "numbers only"),
                Document::new(4, "Plan B", "fallback"),
            ])
            .unwrap();

        let ids: Vec<i64> = store
            .search("plan")
            .unwrap()
            .into_iter()
            .map(|d| d.id.0)
            .collect();
        // "Plan B" does not match: search is case-sensitive.
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        assert!(store.search("absent").unwrap().is_empty());
    }

    #[test]
    fn search_is_repeatable() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        store.upload(Document::new(2, "Document 2", "second")).unwrap();
        assert_eq!(
            store.search("Document").unwrap(),
            store.search("Document").unwrap()
        );
    }

    #[test]
    fn empty_query_matches_everything() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        store.upload(Document::new(2, "", "")).unwrap();
        assert_eq!(store.search("").unwrap().len(), 2);
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_clear_and_default() {
        let store = InMemoryDocumentStore::default();
        assert!(store.is_empty());
        store.upload(document_one()).unwrap();
        assert_eq!(store.len(), 1);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryDocumentStore::new());
        store.upload(document_one()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let doc = store.download(DocumentId(1)).unwrap();
                    assert!(doc.is_some());
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryDocumentStore::new();
        store.upload(document_one()).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryDocumentStore"));
        assert!(debug.contains("document_count: 1"));
    }
}
