//! Central state store.
//!
//! Owns the single [`AppState`] snapshot, runs the root reducer on every
//! dispatch, records undoable actions, and notifies subscribers with the
//! fresh snapshot. Dispatch is synchronous; subscribers must not dispatch
//! reentrantly and are therefore handed a shared reference only.

use crate::state::actions::Action;
use crate::state::reduce;
use crate::state::types::AppState;
use crate::undo::{entry_for, inverse_for, UndoEntry, UndoHistory};

type StoreSubscriber = Box<dyn FnMut(&AppState)>;

/// Whether a dispatch is recorded into the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Record,
    Bypass,
}

pub struct Store {
    state: AppState,
    history: UndoHistory,
    subscribers: Vec<StoreSubscriber>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            history: UndoHistory::new(),
            subscribers: Vec::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a listener invoked after every state change.
    pub fn subscribe(&mut self, subscriber: StoreSubscriber) {
        self.subscribers.push(subscriber);
    }

    /// Dispatch an action, recording it when it has an inverse.
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_inner(action, HistoryMode::Record);
    }

    fn dispatch_inner(&mut self, action: Action, mode: HistoryMode) {
        if mode == HistoryMode::Record {
            if let Some(entry) = entry_for(&self.state, &action) {
                self.history.record(entry);
            }
        }
        log::debug!("dispatch {action:?}");
        let next = reduce(&self.state, &action);
        if next != self.state {
            self.state = next;
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
    }

    /// Revert the most recent undoable action. No-op on an empty history.
    pub fn undo(&mut self) {
        let Some(entry) = self.history.pop_undo() else {
            return;
        };
        self.dispatch_inner(entry.inverse.clone(), HistoryMode::Bypass);
        self.history.push_redo(entry);
    }

    /// Re-apply the most recently undone action.
    ///
    /// The inverse is recaptured against the current state so a later undo
    /// reverts exactly what the replay produced.
    pub fn redo(&mut self) {
        let Some(entry) = self.history.pop_redo() else {
            return;
        };
        let inverse = inverse_for(&self.state, &entry.forward).unwrap_or(entry.inverse);
        let forward = entry.forward;
        self.dispatch_inner(forward.clone(), HistoryMode::Bypass);
        self.history.record_replayed(UndoEntry { forward, inverse });
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("nodes", &self.state.nodes.len())
            .field("edges", &self.state.edges.len())
            .field("undo_depth", &self.history.undo_depth())
            .field("redo_depth", &self.history.redo_depth())
            .finish()
    }
}
