use std::sync::Arc;

use relay_types::{Document, DocumentId};

use crate::error::StoreResult;

/// Document storage capability.
///
/// All implementations must satisfy these invariants:
/// - Callers receive owned copies; nothing returned aliases stored state.
/// - `download` and `edit` act on the first stored document with a matching
///   ID (insertion order).
/// - `search` preserves insertion order and matches literal, case-sensitive
///   substrings of the title or content.
/// - A missing document is signalled by absence, not by an error, unless
///   the implementation is explicitly configured otherwise.
pub trait DocumentStore: Send + Sync {
    /// Append a document to the collection.
    fn upload(&self, document: Document) -> StoreResult<()>;

    /// Return the first document with this ID, or `Ok(None)`.
    fn download(&self, id: DocumentId) -> StoreResult<Option<Document>>;

    /// Replace the content of the first document with this ID, keeping its
    /// title and metadata.
    ///
    /// Returns `Ok(false)` if no document matched; nothing is changed.
    fn edit(&self, id: DocumentId, new_content: &str) -> StoreResult<bool>;

    /// All documents whose title or content contains `query`.
    fn search(&self, query: &str) -> StoreResult<Vec<Document>>;

    /// Upload several documents in order.
    ///
    /// Stops at the first error; documents uploaded before it stay stored.
    fn upload_batch(&self, documents: Vec<Document>) -> StoreResult<()> {
        documents.into_iter().try_for_each(|doc| self.upload(doc))
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn upload(&self, document: Document) -> StoreResult<()> {
        (**self).upload(document)
    }

    fn download(&self, id: DocumentId) -> StoreResult<Option<Document>> {
        (**self).download(id)
    }

    fn edit(&self, id: DocumentId, new_content: &str) -> StoreResult<bool> {
        (**self).edit(id, new_content)
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Document>> {
        (**self).search(query)
    }

    fn upload_batch(&self, documents: Vec<Document>) -> StoreResult<()> {
        (**self).upload_batch(documents)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn upload(&self, document: Document) -> StoreResult<()> {
        (**self).upload(document)
    }

    fn download(&self, id: DocumentId) -> StoreResult<Option<Document>> {
        (**self).download(id)
    }

    fn edit(&self, id: DocumentId, new_content: &str) -> StoreResult<bool> {
        (**self).edit(id, new_content)
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Document>> {
        (**self).search(query)
    }

    fn upload_batch(&self, documents: Vec<Document>) -> StoreResult<()> {
        (**self).upload_batch(documents)
    }
}
