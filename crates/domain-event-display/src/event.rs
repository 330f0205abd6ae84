//! Plugin events delivered by the host event bus

use crate::document::{DocumentHandle, DocumentId};
use std::fmt;

/// Closed set of events the host bus delivers to plugins
#[derive(Clone)]
pub enum PluginEvent {
    /// The focused document changed. `None` means no document is active.
    DocumentActivated(Option<DocumentHandle>),
    /// A document was opened in the tool
    DocumentOpened(DocumentHandle),
    /// A document was closed
    DocumentClosed(DocumentId),
}

impl PluginEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DocumentActivated(_) => EventKind::DocumentActivated,
            Self::DocumentOpened(_) => EventKind::DocumentOpened,
            Self::DocumentClosed(_) => EventKind::DocumentClosed,
        }
    }
}

impl fmt::Debug for PluginEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentActivated(doc) => f
                .debug_tuple("DocumentActivated")
                .field(&doc.as_ref().map(|d| d.id()))
                .finish(),
            Self::DocumentOpened(doc) => f.debug_tuple("DocumentOpened").field(&doc.id()).finish(),
            Self::DocumentClosed(id) => f.debug_tuple("DocumentClosed").field(id).finish(),
        }
    }
}

/// Discriminant of [`PluginEvent`], used in plugin metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DocumentActivated,
    DocumentOpened,
    DocumentClosed,
}
