//! Scoped listener registration
//!
//! A `Subscription` owns one listener registration on one document and
//! removes it when dropped.

use crate::document::{ChangeListener, DocumentHandle, DocumentId, ListenerId};
use std::fmt;
use std::sync::Arc;

/// Live registration of a listener on a document
pub struct Subscription {
    document: DocumentHandle,
    listener: ListenerId,
}

impl Subscription {
    /// Register `listener` on `document`
    pub fn subscribe(document: DocumentHandle, listener: Arc<dyn ChangeListener>) -> Self {
        let id = document.add_listener(listener);
        log::debug!(
            "Subscribed to change events of {} ({})",
            document.id(),
            document.name()
        );
        Self {
            document,
            listener: id,
        }
    }

    pub fn document_id(&self) -> DocumentId {
        self.document.id()
    }

    /// Remove the registration now instead of at end of scope
    pub fn release(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.document.remove_listener(self.listener) {
            log::debug!(
                "Unsubscribed from change events of {} ({})",
                self.document.id(),
                self.document.name()
            );
        } else {
            log::warn!(
                "Listener on {} was already removed by the document",
                self.document.id()
            );
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("document", &self.document.id())
            .field("listener", &self.listener)
            .finish()
    }
}
