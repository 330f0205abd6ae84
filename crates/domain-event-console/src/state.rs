//! Application State

use domain_event_display::Font;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Names of the open documents, in key order
    pub documents: Vec<String>,
    /// Index of the active document
    pub active: Option<usize>,
    pub panel: PanelState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            documents: Vec::new(),
            active: None,
            panel: PanelState::default(),
        }
    }
}

/// Domain event panel state
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Rendered rows of the plugin panel, oldest first
    pub lines: Vec<String>,
    /// Scroll offset (0 = bottom/newest)
    pub scroll_offset: usize,
    /// Visible height for scroll bounds
    pub visible_height: usize,
    pub visible: bool,
    pub font: Font,
    pub capacity: usize,
    pub evicted: usize,
    /// Name of the document the plugin observes
    pub active_document: Option<String>,
    /// Font changed since the config was last saved
    pub config_dirty: bool,
}
