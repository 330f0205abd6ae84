//! Actions module
//!
//! Actions are tagged by the part of the application they target:
//! - `Global`: raw input, quitting
//! - `Workspace`: document activation and edits (handled by middleware)
//! - `Panel`: the domain event panel (visibility, font, scrolling, sync)

use domain_event_display::Font;
use ratatui::crossterm::event::KeyEvent;

/// Root action enum
#[derive(Debug, Clone)]
pub enum Action {
    Global(GlobalAction),
    Workspace(WorkspaceAction),
    Panel(PanelAction),
}

/// Application-wide actions
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}

/// Actions on the simulated host documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceAction {
    /// Make the document at this index active, or none
    Activate(Option<usize>),
    /// Raise a change batch on the active document
    EditActive,
    /// Raise a change batch on every document
    EditAll,
}

/// Actions for the domain event panel
#[derive(Debug, Clone)]
pub enum PanelAction {
    ToggleVisible,
    Clear,
    FontLarger,
    FontSmaller,
    /// Scroll towards newer lines
    NavigateNext,
    /// Scroll towards older lines
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Update visible height (for proper scroll bounds)
    SetVisibleHeight(usize),
    /// Snapshot of the plugin panel, sent by middleware after every change
    Synced(PanelSnapshot),
}

/// Copy of what the plugin currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub lines: Vec<String>,
    pub visible: bool,
    pub font: Font,
    pub capacity: usize,
    pub evicted: usize,
    pub active_document: Option<String>,
    pub config_dirty: bool,
}
