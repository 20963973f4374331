//! Protocol packet model.
//!
//! A `Packet` is the discrete structured message exchanged with the
//! connection manager, tagged with the namespace it belongs to. The socket
//! never touches wire bytes: packets are handed to an external encoder for
//! framing, and inbound packets arrive already decoded (binary attachments
//! reconstructed).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Packet type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketKind {
    /// Namespace handshake. Outbound with optional auth data, inbound with
    /// the session id assigned by the server.
    Connect,
    /// Namespace teardown, in either direction.
    Disconnect,
    /// User event with a `[name, ...args]` payload.
    Event,
    /// Acknowledgment of a previously emitted event, correlated by id.
    Ack,
    /// Handshake rejection; payload forwarded verbatim to listeners.
    ConnectError,
    /// `Event` whose binary attachments were reconstructed by the decoder.
    BinaryEvent,
    /// `Ack` whose binary attachments were reconstructed by the decoder.
    BinaryAck,
}

impl PacketKind {
    /// Whether this kind carries a user event payload.
    #[must_use]
    pub fn is_event(self) -> bool {
        matches!(self, Self::Event | Self::BinaryEvent)
    }

    /// Whether this kind acknowledges a previously emitted event.
    #[must_use]
    pub fn is_ack(self) -> bool {
        matches!(self, Self::Ack | Self::BinaryAck)
    }
}

/// Per-packet transmission options understood by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketOptions {
    /// Whether the encoder may compress this packet's frame.
    pub compress: bool,
}

/// A protocol packet, tagged with its namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Packet type.
    #[serde(rename = "type")]
    pub kind: PacketKind,
    /// Namespace this packet is addressed to.
    pub nsp: String,
    /// Payload. Shape depends on `kind`: handshake object for CONNECT,
    /// `[name, ...args]` array for EVENT, argument array for ACK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Ack correlation id, present when the emitter expects a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Transmission options, outbound only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PacketOptions>,
}

impl Packet {
    /// Build a CONNECT handshake packet with optional auth data.
    #[must_use]
    pub fn connect(nsp: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            kind: PacketKind::Connect,
            nsp: nsp.into(),
            data,
            id: None,
            options: None,
        }
    }

    /// Build a DISCONNECT packet for the namespace.
    #[must_use]
    pub fn disconnect(nsp: impl Into<String>) -> Self {
        Self {
            kind: PacketKind::Disconnect,
            nsp: nsp.into(),
            data: None,
            id: None,
            options: None,
        }
    }

    /// Build an ACK reply carrying `args` for correlation id `id`.
    #[must_use]
    pub fn ack(nsp: impl Into<String>, id: u64, args: Vec<Value>) -> Self {
        Self {
            kind: PacketKind::Ack,
            nsp: nsp.into(),
            data: Some(Value::Array(args)),
            id: Some(id),
            options: None,
        }
    }
}
