//! Domain event display
//!
//! A diagnostic plugin that prints domain document change events to a
//! bounded, scrollable text panel. This crate provides:
//! - The plugin itself ([`DomainEventDisplayPlugin`]), which follows the
//!   active document and forwards its change batches to the panel
//! - The host-facing seams: [`DomainDocument`], [`ChangeListener`],
//!   [`LogView`] and [`ToolConfig`]
//! - A FIFO-bounded panel model ([`BoundedLogView`]) and the line formatter
//! - A minimal in-memory document ([`MemoryDocument`]) for hosts and tests

pub mod change;
pub mod document;
pub mod event;
pub mod font;
pub mod format;
pub mod log_view;
pub mod plugin;
pub mod subscription;
pub mod tool;

pub use change::{ChangeBatch, ChangeRecord};
pub use document::{
    ChangeListener, DocumentHandle, DocumentId, DomainDocument, ListenerId, ListenerRegistry,
    MemoryDocument,
};
pub use event::{EventKind, PluginEvent};
pub use font::{Font, FontParseError, FontStyle};
pub use format::{Clock, FixedClock, LineFormatter, SystemClock, DEFAULT_TIMESTAMP_FORMAT};
pub use log_view::{BoundedLogView, LogView, DEFAULT_LIMIT};
pub use plugin::{DomainEventDisplayPlugin, PluginInfo, PluginStatus};
pub use subscription::Subscription;
pub use tool::{ConfigFlag, ToolConfig};
