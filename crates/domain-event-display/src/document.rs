//! Domain documents and their change listeners
//!
//! The document model lives in the host. This module only defines the seam
//! the plugin subscribes through, a listener list documents can embed, and a
//! small in-memory document for hosts that have nothing better.

use crate::change::ChangeBatch;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier of a domain document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Identifier of one listener registration on a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Receives change notifications from a document
pub trait ChangeListener: Send + Sync {
    /// Called once per change batch, records in the order they happened
    fn domain_object_changed(&self, batch: &ChangeBatch);
}

/// A host document that raises change notifications
pub trait DomainDocument: Send + Sync {
    fn id(&self) -> DocumentId;

    fn name(&self) -> &str;

    /// Register a listener. Every call returns a fresh id.
    fn add_listener(&self, listener: Arc<dyn ChangeListener>) -> ListenerId;

    /// Remove a registration. Returns false if the id was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Shared handle to a host document
pub type DocumentHandle = Arc<dyn DomainDocument>;

/// Listener list with stable ids
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, Arc<dyn ChangeListener>)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<dyn ChangeListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, listener));
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Deliver a batch to every registered listener.
    ///
    /// The list is copied before delivery so listeners may add or remove
    /// registrations from inside the callback.
    pub fn notify(&self, batch: &ChangeBatch) {
        let snapshot: Vec<Arc<dyn ChangeListener>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener.domain_object_changed(batch);
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// In-memory document that fires whatever batches it is handed
#[derive(Debug)]
pub struct MemoryDocument {
    id: DocumentId,
    name: String,
    listeners: ListenerRegistry,
}

impl MemoryDocument {
    pub fn new(id: DocumentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Notify all listeners of a change batch. Empty batches are dropped.
    pub fn fire(&self, batch: &ChangeBatch) {
        if batch.is_empty() {
            return;
        }
        log::trace!("{} firing {} change record(s)", self.id, batch.len());
        self.listeners.notify(batch);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl DomainDocument for MemoryDocument {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn add_listener(&self, listener: Arc<dyn ChangeListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
