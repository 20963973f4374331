//! Acknowledgment correlation.
//!
//! Outbound events that expect a reply carry a correlation id issued by
//! [`AckRegistry`]; the matching inbound ACK packet resolves the stored
//! continuation. Inbound events that themselves request a reply are handed
//! an [`AckResponder`], a single-use handle that sends the ACK packet back
//! through the manager.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::manager::ManagerLink;
use crate::packet::Packet;

/// Continuation invoked when the matching ACK packet arrives.
pub type AckCallback = Box<dyn FnOnce(Vec<Value>) + Send>;

/// Issues correlation ids and tracks pending continuations.
///
/// Ids are assigned densely starting at 0 per socket instance. A pending id
/// is never reused: the counter only moves forward.
#[derive(Default)]
pub struct AckRegistry {
    next_id: u64,
    pending: HashMap<u64, AckCallback>,
}

impl AckRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `callback` under a fresh correlation id and return the id.
    pub fn register(&mut self, callback: AckCallback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(id, callback);
        id
    }

    /// Remove and return the continuation for `id`, if one is pending.
    ///
    /// Returns `None` for unknown ids; the caller treats that as a protocol
    /// anomaly to ignore, not an error.
    pub fn resolve(&mut self, id: u64) -> Option<AckCallback> {
        self.pending.remove(&id)
    }

    /// Whether `id` has a pending continuation.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of continuations awaiting their ACK.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl fmt::Debug for AckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AckRegistry")
            .field("next_id", &self.next_id)
            .field("pending", &self.pending.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Single-use reply handle for an inbound event that requested an ack.
///
/// Clones share the consumed flag: however many handlers observe the event,
/// the first `respond` call wins and sends exactly one ACK packet. The ACK
/// is handed straight to the manager, in the context of whatever connection
/// is current when the handle is invoked.
#[derive(Clone)]
pub struct AckResponder {
    id: u64,
    nsp: String,
    consumed: Arc<AtomicBool>,
    manager: Arc<dyn ManagerLink>,
}

impl AckResponder {
    pub(crate) fn new(id: u64, nsp: String, manager: Arc<dyn ManagerLink>) -> Self {
        Self {
            id,
            nsp,
            consumed: Arc::new(AtomicBool::new(false)),
            manager,
        }
    }

    /// Send the ACK reply carrying `args`. First call wins; later calls are
    /// no-ops.
    pub fn respond(&self, args: Vec<Value>) {
        if self.consumed.swap(true, Ordering::SeqCst) {
            log::debug!("ack {} already sent, ignoring duplicate reply", self.id);
            return;
        }
        self.manager
            .send_packet(Packet::ack(self.nsp.clone(), self.id, args));
    }

    /// The correlation id this handle replies to.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the reply has already been sent.
    #[must_use]
    pub fn consumed(&self) -> bool {
        self.consumed.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for AckResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AckResponder")
            .field("id", &self.id)
            .field("nsp", &self.nsp)
            .field("consumed", &self.consumed())
            .finish()
    }
}
