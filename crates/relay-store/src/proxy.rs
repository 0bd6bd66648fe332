use std::sync::atomic::{AtomicU64, Ordering};

use relay_types::{Document, DocumentId};
use serde::Serialize;

use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// Per-operation call counts observed by a [`DocumentStoreProxy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProxyStats {
    pub uploads: u64,
    pub downloads: u64,
    pub edits: u64,
    pub searches: u64,
}

impl ProxyStats {
    /// Total number of forwarded calls.
    pub fn total(&self) -> u64 {
        self.uploads + self.downloads + self.edits + self.searches
    }
}

#[derive(Default)]
struct Counters {
    uploads: AtomicU64,
    downloads: AtomicU64,
    edits: AtomicU64,
    searches: AtomicU64,
}

/// A forwarding [`DocumentStore`].
///
/// Every call is passed to the wrapped store unchanged and its result is
/// returned as-is. The proxy only observes: it counts calls per operation
/// and emits a `debug` event for each one. It can wrap any store, including
/// `Arc<S>` (to keep direct access to the real store) and
/// `Box<dyn DocumentStore>`.
pub struct DocumentStoreProxy<S> {
    inner: S,
    counters: Counters,
}

impl<S: DocumentStore> DocumentStoreProxy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counters: Counters::default(),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the proxy, returning the wrapped store.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Calls forwarded so far.
    pub fn stats(&self) -> ProxyStats {
        ProxyStats {
            uploads: self.counters.uploads.load(Ordering::Relaxed),
            downloads: self.counters.downloads.load(Ordering::Relaxed),
            edits: self.counters.edits.load(Ordering::Relaxed),
            searches: self.counters.searches.load(Ordering::Relaxed),
        }
    }
}

impl<S: DocumentStore> DocumentStore for DocumentStoreProxy<S> {
    fn upload(&self, document: Document) -> StoreResult<()> {
        self.counters.uploads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id = %document.id, "proxy: upload");
        self.inner.upload(document)
    }

    fn download(&self, id: DocumentId) -> StoreResult<Option<Document>> {
        self.counters.downloads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%id, "proxy: download");
        self.inner.download(id)
    }

    fn edit(&self, id: DocumentId, new_content: &str) -> StoreResult<bool> {
        self.counters.edits.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%id, "proxy: edit");
        self.inner.edit(id, new_content)
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Document>> {
        self.counters.searches.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(query, "proxy: search");
        self.inner.search(query)
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for DocumentStoreProxy<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStoreProxy")
            .field("inner", &self.inner)
            .finish()
    }
}
