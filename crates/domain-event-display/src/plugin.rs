//! Domain event display plugin
//!
//! Follows the active document of the host and prints every change record it
//! raises into a bounded log panel.
//!
//! Lifecycle:
//! - `DocumentActivated(Some(doc))` releases the current subscription (if any)
//!   and subscribes to `doc`
//! - `DocumentActivated(None)` releases the current subscription
//! - `dispose` releases the current subscription; calling it again is a no-op
//!
//! At most one subscription is held at any time.

use crate::change::ChangeBatch;
use crate::document::{ChangeListener, DocumentId};
use crate::event::{EventKind, PluginEvent};
use crate::font::Font;
use crate::format::LineFormatter;
use crate::log_view::{LogView, DEFAULT_LIMIT};
use crate::subscription::Subscription;
use crate::tool::ToolConfig;
use parking_lot::Mutex;
use std::sync::Arc;

/// Release status of a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    Released,
    Unstable,
}

/// Static plugin metadata shown by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub status: PluginStatus,
    pub category: &'static str,
    pub short_description: &'static str,
    pub description: String,
    pub events_consumed: &'static [EventKind],
}

/// Receives change batches and writes them to the panel
struct EventForwarder<V> {
    view: Mutex<V>,
    formatter: LineFormatter,
}

impl<V: LogView> EventForwarder<V> {
    fn forward(&self, batch: &ChangeBatch) {
        let mut view = self.view.lock();
        if !view.is_visible() {
            log::trace!("Panel hidden, skipping {} change record(s)", batch.len());
            return;
        }
        for record in batch {
            view.append(self.formatter.format_line(record));
        }
    }
}

impl<V: LogView> ChangeListener for EventForwarder<V> {
    fn domain_object_changed(&self, batch: &ChangeBatch) {
        self.forward(batch);
    }
}

/// Diagnostic plugin printing domain change events
pub struct DomainEventDisplayPlugin<V: LogView + 'static> {
    tool: Arc<dyn ToolConfig>,
    forwarder: Arc<EventForwarder<V>>,
    active: Option<Subscription>,
}

impl<V: LogView + 'static> DomainEventDisplayPlugin<V> {
    pub const NAME: &'static str = "DomainEventDisplayPlugin";

    pub fn new(tool: Arc<dyn ToolConfig>, view: V) -> Self {
        Self::with_formatter(tool, view, LineFormatter::default())
    }

    pub fn with_formatter(tool: Arc<dyn ToolConfig>, view: V, formatter: LineFormatter) -> Self {
        Self {
            tool,
            forwarder: Arc::new(EventForwarder {
                view: Mutex::new(view),
                formatter,
            }),
            active: None,
        }
    }

    pub fn info() -> PluginInfo {
        PluginInfo {
            name: Self::NAME,
            status: PluginStatus::Released,
            category: "Diagnostic",
            short_description: "Displays domain object events",
            description: format!(
                "Provides a panel that displays domain object events as they are \
                 generated. The maximum number of messages shown is {}. Useful for debugging.",
                DEFAULT_LIMIT
            ),
            events_consumed: &[EventKind::DocumentActivated],
        }
    }

    /// Handle an event from the host bus
    pub fn process_event(&mut self, event: &PluginEvent) {
        let PluginEvent::DocumentActivated(document) = event else {
            return;
        };

        if let Some(previous) = self.active.take() {
            previous.release();
        }

        if let Some(document) = document {
            let listener: Arc<dyn ChangeListener> = self.forwarder.clone();
            self.active = Some(Subscription::subscribe(Arc::clone(document), listener));
        }
    }

    /// Handle a change batch of the observed document.
    ///
    /// Documents normally call this through the registered listener; hosts
    /// that route notifications themselves may call it directly.
    pub fn domain_object_changed(&self, batch: &ChangeBatch) {
        self.forwarder.forward(batch);
    }

    /// Release the active subscription. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.active.take() {
            subscription.release();
        }
    }

    /// Id of the document currently observed
    pub fn active_document(&self) -> Option<DocumentId> {
        self.active.as_ref().map(Subscription::document_id)
    }

    pub fn font(&self) -> Font {
        self.forwarder.view.lock().font()
    }

    /// Change the panel font and mark the host configuration dirty
    pub fn set_font(&self, font: Font) {
        self.forwarder.view.lock().set_font(font);
        self.tool.set_config_changed(true);
    }

    /// Remove every line from the panel
    pub fn clear(&self) {
        self.forwarder.view.lock().clear();
    }

    /// Read access to the panel.
    ///
    /// The panel is locked while `f` runs; do not fire document changes from
    /// inside the closure.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.forwarder.view.lock())
    }

    /// Write access to the panel, same locking rules as [`Self::with_view`]
    pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.forwarder.view.lock())
    }
}

impl<V: LogView + 'static> std::fmt::Debug for DomainEventDisplayPlugin<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainEventDisplayPlugin")
            .field("active", &self.active_document())
            .finish()
    }
}
