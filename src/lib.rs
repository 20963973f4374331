//! Muxsock - namespace socket core for a multiplexed messaging protocol.
//!
//! This crate provides the per-namespace client endpoint of a real-time
//! messaging protocol: one logical channel among possibly many sharing a
//! single underlying connection owned by an external connection manager.
//! It converts user-level event emissions into protocol packets, correlates
//! request/response acknowledgments, buffers traffic across connection
//! interruptions, and re-dispatches buffered traffic transparently on
//! reconnection.
//!
//! # Architecture
//!
//! ```text
//! ConnectionManager (external, implements ManagerLink)
//!     │  open / packet / close fan-out, send, reconnection policy
//!     │
//! Socket (one per namespace)
//!     ├── Connection lifecycle - CONNECT/DISCONNECT handshakes
//!     ├── Packet router        - dispatch by namespace and packet kind
//!     ├── AckRegistry          - correlation ids for pending replies
//!     ├── TrafficBuffers       - ordered replay across interruptions
//!     └── Listener registries  - named listeners + any-listeners
//! ```
//!
//! The manager owns everything physical: transport selection, reconnection
//! backoff, heartbeats, and byte framing. This crate never touches wire
//! bytes and never starts a timer; packets are handed to the manager as
//! structured [`Packet`] values for an external encoder.
//!
//! # Modules
//!
//! - [`socket`] - the socket itself: lifecycle, routing, emission
//! - [`manager`] - the connection-manager seam and subscription handles
//! - [`packet`] - the protocol packet model
//! - [`ack`] - acknowledgment correlation
//! - [`buffer`] - disconnect-time traffic buffering
//! - [`listeners`] - named and any-listener registries

pub mod ack;
pub mod buffer;
pub mod listeners;
pub mod manager;
pub mod packet;
pub mod socket;

// Re-export commonly used types
pub use ack::{AckCallback, AckRegistry, AckResponder};
pub use buffer::{QueuedEvent, TrafficBuffers};
pub use listeners::{AnyCallback, AnyListeners, EventCallback, ListenerId, NamedListeners};
pub use manager::{
    Detach, ManagerCallback, ManagerEvent, ManagerEventKind, ManagerLink, Subscription,
};
pub use packet::{Packet, PacketKind, PacketOptions};
pub use socket::{
    AuthContinuation, AuthPayload, AuthProvider, Socket, SocketBuilder, SocketError,
    CLIENT_DISCONNECT, SERVER_DISCONNECT,
};
