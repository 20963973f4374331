//! Listener registries.
//!
//! Two independent lists feed event dispatch: the named-listener registry
//! (callbacks keyed by event name, the ordinary subscription surface) and
//! the any-listener registry (callbacks observing every dispatched inbound
//! event regardless of name). Dispatch works on shallow snapshots so that
//! listeners added or removed from inside a handler never affect the pass
//! that is currently running.
//!
//! Callbacks are `Arc<Mutex<..>>` entries: the registry lock is released
//! before any callback runs, so a handler may freely re-enter the socket.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::ack::AckResponder;

/// Token identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback for a named event: the argument list plus the reply handle when
/// the sender requested an ack.
pub type EventCallback = Arc<Mutex<dyn FnMut(&[Value], Option<&AckResponder>) + Send>>;

/// Callback observing every dispatched inbound event.
pub type AnyCallback = Arc<Mutex<dyn FnMut(&str, &[Value], Option<&AckResponder>) + Send>>;

struct NamedEntry {
    id: ListenerId,
    once: bool,
    callback: EventCallback,
}

/// Ordered named-listener registry.
#[derive(Default)]
pub struct NamedListeners {
    next_id: u64,
    map: HashMap<String, Vec<NamedEntry>>,
}

impl NamedListeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener for `event`. `once` listeners are dropped from the
    /// registry the first time the event is snapshotted for dispatch.
    pub fn add(&mut self, event: &str, once: bool, callback: EventCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.map
            .entry(event.to_owned())
            .or_default()
            .push(NamedEntry { id, once, callback });
        id
    }

    /// Remove one listener by token, or every listener for `event` when no
    /// token is given.
    pub fn remove(&mut self, event: &str, id: Option<ListenerId>) {
        match id {
            Some(id) => {
                if let Some(entries) = self.map.get_mut(event) {
                    entries.retain(|entry| entry.id != id);
                    if entries.is_empty() {
                        self.map.remove(event);
                    }
                }
            }
            None => {
                self.map.remove(event);
            }
        }
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn count(&self, event: &str) -> usize {
        self.map.get(event).map_or(0, Vec::len)
    }

    /// Snapshot the callbacks for `event` in registration order.
    ///
    /// `once` entries are removed from the registry here, before they run.
    pub fn snapshot(&mut self, event: &str) -> Vec<EventCallback> {
        let Some(entries) = self.map.get_mut(event) else {
            return Vec::new();
        };
        let callbacks = entries
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        entries.retain(|entry| !entry.once);
        if entries.is_empty() {
            self.map.remove(event);
        }
        callbacks
    }
}

impl fmt::Debug for NamedListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .map
            .iter()
            .map(|(event, entries)| (event.as_str(), entries.len()))
            .collect();
        f.debug_struct("NamedListeners")
            .field("listeners", &counts)
            .finish()
    }
}

/// Ordered any-listener registry with append and prepend.
#[derive(Default)]
pub struct AnyListeners {
    next_id: u64,
    entries: Vec<(ListenerId, AnyCallback)>,
}

impl AnyListeners {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a listener to the end of the list.
    pub fn append(&mut self, callback: AnyCallback) -> ListenerId {
        let id = self.next_id();
        self.entries.push((id, callback));
        id
    }

    /// Insert a listener at the front of the list.
    pub fn prepend(&mut self, callback: AnyCallback) -> ListenerId {
        let id = self.next_id();
        self.entries.insert(0, (id, callback));
        id
    }

    /// Remove one listener by token, or clear the list when no token is
    /// given.
    pub fn remove(&mut self, id: Option<ListenerId>) {
        match id {
            Some(id) => self.entries.retain(|(entry_id, _)| *entry_id != id),
            None => self.entries.clear(),
        }
    }

    /// Tokens of the live list, in invocation order.
    #[must_use]
    pub fn ids(&self) -> Vec<ListenerId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// Number of registered any-listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot the callbacks in invocation order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AnyCallback> {
        self.entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }
}

impl fmt::Debug for AnyListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyListeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
