//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Actions dispatched here are queued on a channel and
//! processed by the store once the current action has been reduced.
//!
//! This enables patterns like:
//! - A key press is translated to `Workspace(Activate(..))`
//! - The workspace middleware handles activation and dispatches `Panel(Synced(..))`

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender};

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end the store drains
    pub fn channel() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
