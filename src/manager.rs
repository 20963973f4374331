//! Connection-manager seam.
//!
//! The socket does not own a transport. A single physical connection is
//! owned by an external connection manager which multiplexes every namespace
//! socket over it, fans out lifecycle and packet events, and owns all
//! reconnection policy. [`ManagerLink`] is that collaborator as the socket
//! sees it; the embedding application (or a test fake) implements it.
//!
//! Subscriptions are modeled as values: [`ManagerLink::subscribe`] returns a
//! detach token, and [`Subscription::gated`] wraps it together with an
//! atomic gate so that releasing the handle stops delivery synchronously,
//! even for a callback the manager has already scheduled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::packet::Packet;

/// Events the manager fans out to subscribed sockets.
#[derive(Debug, Clone)]
pub enum ManagerEvent {
    /// The physical connection is open and ready for handshakes.
    Open,
    /// A decoded packet arrived. Packets for every namespace flow through
    /// the shared connection; each socket filters by its own namespace.
    Packet(Packet),
    /// The physical connection closed, with a transport-level reason.
    Close(String),
}

impl ManagerEvent {
    /// The stream this event belongs to.
    #[must_use]
    pub fn kind(&self) -> ManagerEventKind {
        match self {
            Self::Open => ManagerEventKind::Open,
            Self::Packet(_) => ManagerEventKind::Packet,
            Self::Close(_) => ManagerEventKind::Close,
        }
    }
}

/// Which manager event stream a subscription listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagerEventKind {
    /// Connection-open notifications.
    Open,
    /// Decoded inbound packets.
    Packet,
    /// Connection-close notifications.
    Close,
}

/// Callback registered with the manager for one event stream.
pub type ManagerCallback = Box<dyn FnMut(ManagerEvent) + Send>;

/// Token removing a registered callback from the manager's fan-out list.
/// Invoked at most once.
pub type Detach = Box<dyn FnOnce() + Send>;

/// The connection manager as seen by a namespace socket.
///
/// Delivery contract: events are discrete, non-overlapping callbacks; no two
/// deliveries for the same socket interleave. Implementations must not hold
/// internal locks while invoking callbacks, since a handler may call back
/// into the manager (send, subscribe, detach) on the same thread.
pub trait ManagerLink: Send + Sync {
    /// Register `callback` for `kind`. Returns the detach token.
    fn subscribe(&self, kind: ManagerEventKind, callback: ManagerCallback) -> Detach;

    /// Ask the manager to open the physical connection if it is not already
    /// open or opening.
    fn request_open(&self);

    /// Hand one packet to the manager for encoding and transmission.
    fn send_packet(&self, packet: Packet);

    /// Whether the physical connection is currently open.
    fn is_open(&self) -> bool;

    /// Whether a reconnection attempt is underway.
    fn is_reconnecting(&self) -> bool;

    /// Whether the transport can accept a write right now.
    fn transport_writable(&self) -> bool;

    /// Remove the socket for `nsp` from the manager's tracking.
    fn forget(&self, nsp: &str);

    /// Whether sockets should initiate their connection on construction.
    fn autoconnect(&self) -> bool;
}

/// Disposable handle for one manager subscription.
///
/// Releasing disarms the gate first and detaches from the manager second, so
/// no callback runs after `release` returns. Dropping the handle releases it.
pub struct Subscription {
    gate: Arc<AtomicBool>,
    detach: Option<Detach>,
}

impl Subscription {
    /// Subscribe `callback` to `kind` on `manager`, gated so that releasing
    /// the returned handle stops delivery synchronously.
    pub fn gated(
        manager: &Arc<dyn ManagerLink>,
        kind: ManagerEventKind,
        mut callback: impl FnMut(ManagerEvent) + Send + 'static,
    ) -> Self {
        let gate = Arc::new(AtomicBool::new(true));
        let armed = Arc::clone(&gate);
        let detach = manager.subscribe(
            kind,
            Box::new(move |event| {
                if armed.load(Ordering::SeqCst) {
                    callback(event);
                }
            }),
        );
        Self {
            gate,
            detach: Some(detach),
        }
    }

    /// Disarm the gate and detach from the manager. Idempotent.
    pub fn release(&mut self) {
        self.gate.store(false, Ordering::SeqCst);
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    /// Whether the subscription still delivers events.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.gate.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("armed", &self.is_armed())
            .field("detached", &self.detach.is_none())
            .finish()
    }
}
