use crate::actions::{Action, GlobalAction, PanelAction, WorkspaceAction};
use crate::state::{AppState, PanelState};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {}
        Action::Workspace(action) => {
            state = reduce_workspace(state, action);
        }
        Action::Panel(action) => {
            state.panel = reduce_panel(state.panel, action);
        }
    }
    state
}

fn reduce_workspace(mut state: AppState, action: &WorkspaceAction) -> AppState {
    if let WorkspaceAction::Activate(index) = action {
        match index {
            Some(index) if *index < state.documents.len() => state.active = Some(*index),
            Some(index) => log::debug!("Ignoring activation of unknown document {}", index),
            None => state.active = None,
        }
    }
    state
}

/// Reducer for the panel state.
pub fn reduce_panel(mut state: PanelState, action: &PanelAction) -> PanelState {
    let max_scroll = if state.visible_height > 0 {
        state.lines.len().saturating_sub(state.visible_height)
    } else {
        state.lines.len()
    };

    match action {
        PanelAction::NavigateNext => {
            // Scroll towards newer lines (decrease offset, towards 0)
            state.scroll_offset = state.scroll_offset.min(max_scroll);
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        PanelAction::NavigatePrevious => {
            // Scroll towards older lines (increase offset, capped at max_scroll)
            if state.scroll_offset < max_scroll {
                state.scroll_offset = state.scroll_offset.saturating_add(1);
            }
        }
        PanelAction::NavigateToTop => {
            state.scroll_offset = max_scroll;
        }
        PanelAction::NavigateToBottom => {
            state.scroll_offset = 0;
        }
        PanelAction::Clear => {
            state.scroll_offset = 0;
        }
        PanelAction::SetVisibleHeight(height) => {
            state.visible_height = *height;
        }
        PanelAction::Synced(snapshot) => {
            state.lines = snapshot.lines.clone();
            state.visible = snapshot.visible;
            state.font = snapshot.font.clone();
            state.capacity = snapshot.capacity;
            state.evicted = snapshot.evicted;
            state.active_document = snapshot.active_document.clone();
            state.config_dirty = snapshot.config_dirty;
            // Keep scroll position valid
            let new_max = state.lines.len().saturating_sub(state.visible_height);
            state.scroll_offset = state.scroll_offset.min(new_max);
        }
        // Applied to the plugin by middleware, which follows up with Synced
        PanelAction::ToggleVisible | PanelAction::FontLarger | PanelAction::FontSmaller => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PanelSnapshot;

    fn panel_with_lines(count: usize, height: usize) -> PanelState {
        PanelState {
            lines: (0..count).map(|i| format!("line {i}")).collect(),
            visible_height: height,
            ..PanelState::default()
        }
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = panel_with_lines(10, 4);

        state = reduce_panel(state, &PanelAction::NavigateToTop);
        assert_eq!(state.scroll_offset, 6);

        state = reduce_panel(state, &PanelAction::NavigatePrevious);
        assert_eq!(state.scroll_offset, 6);

        state = reduce_panel(state, &PanelAction::NavigateNext);
        assert_eq!(state.scroll_offset, 5);

        state = reduce_panel(state, &PanelAction::NavigateToBottom);
        assert_eq!(state.scroll_offset, 0);

        state = reduce_panel(state, &PanelAction::NavigateNext);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_synced_clamps_scroll() {
        let mut state = panel_with_lines(10, 4);
        state.scroll_offset = 6;

        let snapshot = PanelSnapshot {
            lines: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            visible: true,
            capacity: 5,
            ..PanelSnapshot::default()
        };
        state = reduce_panel(state, &PanelAction::Synced(snapshot));

        assert_eq!(state.lines.len(), 5);
        assert_eq!(state.scroll_offset, 1);
        assert!(state.visible);
    }

    #[test]
    fn test_activation_of_unknown_document_is_ignored() {
        let state = AppState {
            documents: vec!["a".into(), "b".into()],
            ..AppState::default()
        };

        let state = reduce(state, &Action::Workspace(WorkspaceAction::Activate(Some(1))));
        assert_eq!(state.active, Some(1));

        let state = reduce(state, &Action::Workspace(WorkspaceAction::Activate(Some(5))));
        assert_eq!(state.active, Some(1));

        let state = reduce(state, &Action::Workspace(WorkspaceAction::Activate(None)));
        assert_eq!(state.active, None);
    }

    #[test]
    fn test_quit() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }
}
