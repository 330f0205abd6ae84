//! Domain Event Middleware
//!
//! Hosts the domain event display plugin:
//! - Forwards document activation to the plugin as host bus events
//! - Raises document edits on the workspace (the plugin hears them through its subscription)
//! - Applies panel commands (visibility, clear, font) to the plugin's panel
//! - Dispatches a panel snapshot after each of the above so the reducer can render it
//! - On quit, disposes the plugin and saves the display config if the font changed

use crate::actions::{Action, GlobalAction, PanelAction, PanelSnapshot, WorkspaceAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::workspace::Workspace;
use domain_event_config::DisplayConfig;
use domain_event_display::{
    BoundedLogView, ConfigFlag, DomainEventDisplayPlugin, Font, LineFormatter, LogView,
};
use std::path::PathBuf;
use std::sync::Arc;

const MAX_FONT_SIZE: u16 = 72;

pub struct DomainEventMiddleware {
    plugin: DomainEventDisplayPlugin<BoundedLogView>,
    workspace: Workspace,
    config: DisplayConfig,
    config_flag: Arc<ConfigFlag>,
    /// Where to save the config; the file it was loaded from when unset
    config_path: Option<PathBuf>,
}

impl DomainEventMiddleware {
    pub fn new(config: DisplayConfig, workspace: Workspace) -> Self {
        let font = config.font.parse::<Font>().unwrap_or_else(|e| {
            log::warn!("Invalid font {:?} in config: {}", config.font, e);
            Font::default()
        });
        let view = BoundedLogView::new(config.capacity)
            .with_font(font)
            .with_visible(config.visible);
        let formatter = LineFormatter::default().with_timestamp_format(&config.timestamp_format);
        let config_flag = Arc::new(ConfigFlag::new());

        let mut plugin =
            DomainEventDisplayPlugin::with_formatter(config_flag.clone(), view, formatter);
        for event in workspace.open_events() {
            plugin.process_event(&event);
        }

        log::info!(
            "{} ready ({} lines max)",
            DomainEventDisplayPlugin::<BoundedLogView>::NAME,
            config.capacity
        );

        Self {
            plugin,
            workspace,
            config,
            config_flag,
            config_path: None,
        }
    }

    /// Save config changes to `path` instead of the file the config came from
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    fn snapshot(&self) -> PanelSnapshot {
        let (lines, visible, font, capacity, evicted) = self.plugin.with_view(|view| {
            let lines: Vec<String> = view
                .lines()
                .flat_map(|entry| entry.trim_end_matches('\n').lines())
                .map(str::to_string)
                .collect();
            (
                lines,
                view.is_visible(),
                view.font(),
                view.capacity(),
                view.evicted(),
            )
        });

        PanelSnapshot {
            lines,
            visible,
            font,
            capacity,
            evicted,
            active_document: self
                .plugin
                .active_document()
                .and_then(|id| self.workspace.name_of(id))
                .map(str::to_string),
            config_dirty: self.config_flag.is_changed(),
        }
    }

    fn sync(&self, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Panel(PanelAction::Synced(self.snapshot())));
    }

    fn handle_workspace(&mut self, action: &WorkspaceAction, state: &AppState) {
        match action {
            WorkspaceAction::Activate(index) => match self.workspace.activation_event(*index) {
                Some(event) => self.plugin.process_event(&event),
                None => log::warn!("No document at index {:?}", index),
            },
            WorkspaceAction::EditActive => match state.active {
                Some(index) => {
                    self.workspace.edit(index);
                }
                None => log::info!("No active document to edit"),
            },
            WorkspaceAction::EditAll => {
                let fired = self.workspace.edit_all();
                log::debug!("Fired {} change records across all documents", fired);
            }
        }
    }

    fn handle_panel(&mut self, action: &PanelAction) {
        match action {
            PanelAction::ToggleVisible => {
                self.plugin
                    .with_view_mut(|view| view.set_visible(!view.is_visible()));
            }
            PanelAction::Clear => self.plugin.clear(),
            PanelAction::FontLarger => {
                let font = self.plugin.font();
                let size = font.size.saturating_add(1).min(MAX_FONT_SIZE);
                self.plugin.set_font(font.with_size(size));
            }
            PanelAction::FontSmaller => {
                let font = self.plugin.font();
                self.plugin.set_font(font.with_size(font.size.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn shutdown(&mut self) {
        self.plugin.dispose();

        if !self.config_flag.take() {
            return;
        }

        self.config.font = self.plugin.font().to_string();
        let result = match &self.config_path {
            Some(path) => self.config.save_to_path(path),
            None => self.config.save(),
        };
        if let Err(e) = result {
            log::error!("Failed to save display config: {:#}", e);
        }
    }
}

impl Middleware for DomainEventMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Workspace(workspace_action) => {
                self.handle_workspace(workspace_action, state);
                self.sync(dispatcher);
            }
            Action::Panel(
                panel_action @ (PanelAction::ToggleVisible
                | PanelAction::Clear
                | PanelAction::FontLarger
                | PanelAction::FontSmaller),
            ) => {
                self.handle_panel(panel_action);
                self.sync(dispatcher);
            }
            Action::Global(GlobalAction::Quit) => self.shutdown(),
            _ => {}
        }

        true
    }
}
