//! Panel View Model

use crate::state::{AppState, PanelState};

/// View model for the domain event panel - handles presentation logic
pub struct PanelViewModel<'a> {
    state: &'a PanelState,
}

impl<'a> PanelViewModel<'a> {
    pub fn new(state: &'a PanelState) -> Self {
        Self { state }
    }

    /// Get the visible lines based on scroll offset and available height
    ///
    /// scroll_offset = 0 means we're at the bottom (showing newest lines)
    /// scroll_offset > 0 means we've scrolled up (showing older lines)
    pub fn visible_lines(&self, available_height: usize) -> &'a [String] {
        let total = self.state.lines.len();

        if total == 0 || available_height == 0 {
            return &[];
        }

        let max_scroll = total.saturating_sub(available_height);
        let effective_scroll = self.state.scroll_offset.min(max_scroll);

        // end is the index AFTER the last visible line
        let end = total.saturating_sub(effective_scroll);
        let start = end.saturating_sub(available_height);

        &self.state.lines[start..end]
    }

    /// Panel title with observed document, font and scroll indicator
    pub fn title(&self) -> String {
        let document = self
            .state
            .active_document
            .as_deref()
            .unwrap_or("no active document");
        let dirty = if self.state.config_dirty { "*" } else { "" };
        let mut title = format!(" Domain Events - {} [{}{}] ", document, self.state.font, dirty);
        if self.state.scroll_offset > 0 {
            title.push_str(&format!("↓{} ", self.state.scroll_offset));
        }
        title
    }

    /// Line count against capacity, e.g. `12/2000 (3 evicted)`
    pub fn usage(&self) -> String {
        let mut usage = format!("{}/{}", self.state.lines.len(), self.state.capacity);
        if self.state.evicted > 0 {
            usage.push_str(&format!(" ({} evicted)", self.state.evicted));
        }
        usage
    }
}

/// Document tabs, the active one marked
pub fn document_tabs(state: &AppState) -> Vec<(String, bool)> {
    state
        .documents
        .iter()
        .enumerate()
        .map(|(index, name)| {
            (
                format!("{}:{}", index + 1, name),
                state.active == Some(index),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_event_display::Font;

    fn panel(lines: usize, offset: usize) -> PanelState {
        PanelState {
            lines: (0..lines).map(|i| i.to_string()).collect(),
            scroll_offset: offset,
            capacity: 100,
            ..PanelState::default()
        }
    }

    #[test]
    fn test_visible_lines_at_bottom() {
        let state = panel(10, 0);
        let vm = PanelViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["7", "8", "9"]);
    }

    #[test]
    fn test_visible_lines_scrolled() {
        let state = panel(10, 2);
        let vm = PanelViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["5", "6", "7"]);
    }

    #[test]
    fn test_visible_lines_scroll_capped() {
        let state = panel(10, 50);
        let vm = PanelViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["0", "1", "2"]);
        assert!(vm.visible_lines(0).is_empty());
    }

    #[test]
    fn test_title() {
        let mut state = panel(1, 0);
        state.font = Font::default();
        assert_eq!(
            PanelViewModel::new(&state).title(),
            " Domain Events - no active document [Monospaced-PLAIN-12] "
        );

        state.active_document = Some("a.bin".into());
        state.config_dirty = true;
        state.scroll_offset = 2;
        assert_eq!(
            PanelViewModel::new(&state).title(),
            " Domain Events - a.bin [Monospaced-PLAIN-12*] ↓2 "
        );
    }

    #[test]
    fn test_usage() {
        let mut state = panel(5, 0);
        assert_eq!(PanelViewModel::new(&state).usage(), "5/100");
        state.evicted = 3;
        assert_eq!(PanelViewModel::new(&state).usage(), "5/100 (3 evicted)");
    }

    #[test]
    fn test_document_tabs() {
        let state = AppState {
            documents: vec!["a".into(), "b".into()],
            active: Some(1),
            ..AppState::default()
        };
        assert_eq!(
            document_tabs(&state),
            vec![("1:a".to_string(), false), ("2:b".to_string(), true)]
        );
    }
}
