//! KeyboardMiddleware - translates key presses into console actions
//!
//! Priority keys (Ctrl+C, Esc, q) always quit. Everything else is looked up in
//! a flat key table; unbound keys are dropped.

use crate::actions::{Action, GlobalAction, PanelAction, WorkspaceAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key into an action, `None` for unbound keys
    fn translate(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Global(GlobalAction::Quit),
            KeyCode::Char('0') => Action::Workspace(WorkspaceAction::Activate(None)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                Action::Workspace(WorkspaceAction::Activate(Some(index)))
            }
            KeyCode::Char('e') => Action::Workspace(WorkspaceAction::EditActive),
            KeyCode::Char('E') => Action::Workspace(WorkspaceAction::EditAll),
            KeyCode::Char('v') => Action::Panel(PanelAction::ToggleVisible),
            KeyCode::Char('c') => Action::Panel(PanelAction::Clear),
            KeyCode::Char('+') | KeyCode::Char('=') => Action::Panel(PanelAction::FontLarger),
            KeyCode::Char('-') => Action::Panel(PanelAction::FontSmaller),
            KeyCode::Char('j') | KeyCode::Down => Action::Panel(PanelAction::NavigateNext),
            KeyCode::Char('k') | KeyCode::Up => Action::Panel(PanelAction::NavigatePrevious),
            KeyCode::Char('g') | KeyCode::Home => Action::Panel(PanelAction::NavigateToTop),
            KeyCode::Char('G') | KeyCode::End => Action::Panel(PanelAction::NavigateToBottom),
            _ => return None,
        };
        Some(action)
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key) {
            Some(translated) => dispatcher.dispatch(translated),
            None => log::trace!("Unbound key: {:?}", key.code),
        }

        false // Raw key presses never reach the reducer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_activate_documents() {
        assert!(matches!(
            KeyboardMiddleware::translate(key(KeyCode::Char('1'))),
            Some(Action::Workspace(WorkspaceAction::Activate(Some(0))))
        ));
        assert!(matches!(
            KeyboardMiddleware::translate(key(KeyCode::Char('3'))),
            Some(Action::Workspace(WorkspaceAction::Activate(Some(2))))
        ));
        assert!(matches!(
            KeyboardMiddleware::translate(key(KeyCode::Char('0'))),
            Some(Action::Workspace(WorkspaceAction::Activate(None)))
        ));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            KeyboardMiddleware::translate(ctrl_c),
            Some(Action::Global(GlobalAction::Quit))
        ));
        // Plain 'c' clears the panel
        assert!(matches!(
            KeyboardMiddleware::translate(key(KeyCode::Char('c'))),
            Some(Action::Panel(PanelAction::Clear))
        ));
    }

    #[test]
    fn test_unbound_key() {
        assert!(KeyboardMiddleware::translate(key(KeyCode::Char('x'))).is_none());
    }
}
