//! Disconnect-time traffic buffering.
//!
//! While the socket is disconnected, outbound packets and inbound events are
//! held here in arrival order. On the transition to connected both buffers
//! are drained exactly once, fully, in original order: receive side first,
//! then send side. The buffers are non-empty only while disconnected.

use serde_json::Value;

use crate::ack::AckResponder;
use crate::packet::Packet;

/// An inbound event held for replay: the decoded event name and argument
/// list, plus the reply handle if the sender requested an ack.
#[derive(Debug)]
pub struct QueuedEvent {
    /// Event name, the head of the packet's payload array.
    pub name: String,
    /// Remaining payload entries.
    pub args: Vec<Value>,
    /// Reply handle, already bound to the packet's correlation id.
    pub ack: Option<AckResponder>,
}

/// Ordered send and receive buffers.
#[derive(Debug, Default)]
pub struct TrafficBuffers {
    send: Vec<Packet>,
    receive: Vec<QueuedEvent>,
}

impl TrafficBuffers {
    /// Create empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outbound packet awaiting connectivity.
    pub fn queue_send(&mut self, packet: Packet) {
        self.send.push(packet);
    }

    /// Append an inbound event awaiting connectivity.
    pub fn queue_receive(&mut self, event: QueuedEvent) {
        self.receive.push(event);
    }

    /// Take both buffers for draining, leaving them empty.
    ///
    /// Order within each buffer is the original enqueue order.
    pub fn take(&mut self) -> (Vec<QueuedEvent>, Vec<Packet>) {
        (
            std::mem::take(&mut self.receive),
            std::mem::take(&mut self.send),
        )
    }

    /// Queued outbound packets, oldest first.
    #[must_use]
    pub fn send_queue(&self) -> &[Packet] {
        &self.send
    }

    /// Number of inbound events awaiting replay.
    #[must_use]
    pub fn receive_len(&self) -> usize {
        self.receive.len()
    }

    /// Whether both buffers are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.send.is_empty() && self.receive.is_empty()
    }
}
