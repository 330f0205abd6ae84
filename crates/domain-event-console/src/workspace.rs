//! Simulated host workspace
//!
//! A fixed set of in-memory documents plus a deterministic generator of
//! change batches, standing in for a real document model.

use domain_event_display::{
    ChangeBatch, ChangeRecord, DocumentHandle, DocumentId, DomainDocument, MemoryDocument,
    PluginEvent,
};
use std::sync::Arc;

const DOCUMENT_NAMES: [&str; 3] = ["firmware.bin", "libcrypto.so", "kernel.elf"];

const CHANGE_TYPES: [&str; 6] = [
    "SYMBOL_ADDED",
    "SYMBOL_RENAMED",
    "COMMENT_CHANGED",
    "CODE_ADDED",
    "MEMORY_BLOCK_CHANGED",
    "DATA_TYPE_CHANGED",
];

/// Produces change batches of one to three records
#[derive(Debug, Default)]
struct ChangeGenerator {
    counter: u64,
}

impl ChangeGenerator {
    fn next_batch(&mut self, document: &str) -> ChangeBatch {
        let count = 1 + (self.counter % 3) as usize;
        (0..count)
            .map(|_| {
                let n = self.counter;
                self.counter += 1;
                let kind = CHANGE_TYPES[(n % CHANGE_TYPES.len() as u64) as usize];
                ChangeRecord::new(kind)
                    .with_old_value(format!("{document}:label_{n}"))
                    .with_new_value(format!("{document}:label_{}", n + 1))
            })
            .collect()
    }
}

/// Documents open in the console
#[derive(Debug)]
pub struct Workspace {
    documents: Vec<Arc<MemoryDocument>>,
    generator: ChangeGenerator,
}

impl Workspace {
    pub fn new() -> Self {
        let documents = DOCUMENT_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| Arc::new(MemoryDocument::new(DocumentId(index as u64 + 1), *name)))
            .collect();
        Self {
            documents,
            generator: ChangeGenerator::default(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.name().to_string()).collect()
    }

    /// Name of the document with the given id
    pub fn name_of(&self, id: DocumentId) -> Option<&str> {
        self.documents
            .iter()
            .find(|doc| doc.id() == id)
            .map(|doc| doc.name())
    }

    /// Events the host bus would send when the workspace is opened
    pub fn open_events(&self) -> Vec<PluginEvent> {
        self.documents
            .iter()
            .map(|doc| PluginEvent::DocumentOpened(Arc::clone(doc) as DocumentHandle))
            .collect()
    }

    /// Activation event for the document at `index`, or `None` if out of range
    pub fn activation_event(&self, index: Option<usize>) -> Option<PluginEvent> {
        match index {
            None => Some(PluginEvent::DocumentActivated(None)),
            Some(index) => self.documents.get(index).map(|doc| {
                PluginEvent::DocumentActivated(Some(Arc::clone(doc) as DocumentHandle))
            }),
        }
    }

    /// Raise one change batch on the document at `index`.
    ///
    /// Returns the number of records fired.
    pub fn edit(&mut self, index: usize) -> usize {
        let Some(document) = self.documents.get(index) else {
            return 0;
        };
        let batch = self.generator.next_batch(document.name());
        log::debug!("Editing {} ({} change records)", document.name(), batch.len());
        document.fire(&batch);
        batch.len()
    }

    /// Raise one change batch on every document
    pub fn edit_all(&mut self) -> usize {
        (0..self.documents.len()).map(|index| self.edit(index)).sum()
    }

    #[cfg(test)]
    pub fn listener_count(&self, index: usize) -> usize {
        self.documents[index].listener_count()
    }
}
