//! The namespace socket.
//!
//! One `Socket` is the client endpoint for one namespace multiplexed over a
//! shared connection. It converts user emissions into protocol packets,
//! correlates acks, buffers traffic across connection interruptions, and
//! replays buffered traffic transparently when the namespace handshake
//! completes again.
//!
//! # Architecture
//!
//! ```text
//! Socket
//!     ├── Connection lifecycle (subscribe / CONNECT / DISCONNECT / destroy)
//!     ├── Packet router (namespace filter + dispatch by packet kind)
//!     ├── Event emission (reserved-name guard, per-call flags, ack ids)
//!     ├── AckRegistry (pending continuations)     [ack module]
//!     ├── TrafficBuffers (send/receive replay)    [buffer module]
//!     └── Listener registries (named + any)       [listeners module]
//! ```
//!
//! # States
//!
//! ```text
//! DISCONNECTED ──connect()──> CONNECTING ──CONNECT ack──> CONNECTED
//!       ^                                                     │
//!       └────────── transport close / disconnect() ───────────┘
//! ```
//!
//! The socket persists across transport reconnections: its manager
//! subscriptions survive a transport drop and the next open re-runs the
//! CONNECT handshake. Only a server DISCONNECT or a local `disconnect()`
//! destroys it.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use scopeguard::defer;
use serde_json::Value;

use crate::ack::{AckCallback, AckRegistry, AckResponder};
use crate::buffer::{QueuedEvent, TrafficBuffers};
use crate::listeners::{AnyListeners, ListenerId, NamedListeners};
use crate::manager::{ManagerEvent, ManagerEventKind, ManagerLink, Subscription};
use crate::packet::{Packet, PacketKind, PacketOptions};

/// Close reason reported when the server ends the session.
pub const SERVER_DISCONNECT: &str = "io server disconnect";

/// Close reason reported when `disconnect()` is called locally.
pub const CLIENT_DISCONNECT: &str = "io client disconnect";

/// Event names owned by the socket lifecycle; `emit` rejects them.
const RESERVED_EVENTS: [&str; 6] = [
    "connect",
    "connect_error",
    "disconnect",
    "disconnecting",
    "newListener",
    "removeListener",
];

/// Errors surfaced to callers.
///
/// Only misuse surfaces; protocol anomalies are absorbed and logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketError {
    /// The event name is reserved for lifecycle notifications.
    ReservedEvent(String),
}

impl fmt::Display for SocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedEvent(name) => write!(f, "\"{name}\" is a reserved event name"),
        }
    }
}

impl std::error::Error for SocketError {}

/// Continuation handed to an auth provider; resolving it sends the CONNECT
/// packet with the supplied payload. Single-use per open.
pub type AuthContinuation = Box<dyn FnOnce(Value) + Send>;

/// Asynchronous auth provider, invoked on every transport open.
pub type AuthProvider = Arc<dyn Fn(AuthContinuation) + Send + Sync>;

/// Authentication payload sent with the CONNECT handshake.
#[derive(Clone)]
pub enum AuthPayload {
    /// No auth data; CONNECT is sent bare.
    None,
    /// Static value sent as-is with every CONNECT.
    Static(Value),
    /// Provider invoked with a continuation; CONNECT is sent exactly once
    /// per open, only after the continuation resolves. A provider that
    /// never resolves stalls the handshake indefinitely; the socket owns no
    /// timers, so recovery is the embedding application's call.
    Provider(AuthProvider),
}

impl fmt::Debug for AuthPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "AuthPayload::None"),
            Self::Static(value) => f.debug_tuple("AuthPayload::Static").field(value).finish(),
            Self::Provider(_) => write!(f, "AuthPayload::Provider(..)"),
        }
    }
}

/// Per-emission flags, cleared after every emission.
#[derive(Debug, Clone, Copy, Default)]
struct EmitFlags {
    /// Compression override; encoder default is on.
    compress: Option<bool>,
    /// Drop instead of buffer when the connection is not ready.
    volatile: bool,
}

#[derive(Debug, Default)]
struct ConnState {
    connected: bool,
    sid: Option<String>,
    destroyed: bool,
}

struct Inner {
    nsp: String,
    manager: Arc<dyn ManagerLink>,
    auth: AuthPayload,
    state: Mutex<ConnState>,
    flags: Mutex<EmitFlags>,
    acks: Mutex<AckRegistry>,
    buffers: Mutex<TrafficBuffers>,
    named: Mutex<NamedListeners>,
    any: Mutex<AnyListeners>,
    subs: Mutex<Vec<Subscription>>,
}

/// Per-namespace client endpoint over a shared managed connection.
///
/// Cheap to clone; clones share all state. Every lock inside is scoped to a
/// single state mutation and released before user callbacks or manager
/// calls run, so handlers may re-enter the socket freely.
#[derive(Clone)]
pub struct Socket {
    inner: Arc<Inner>,
}

/// Builder for [`Socket`].
#[derive(Default)]
pub struct SocketBuilder {
    manager: Option<Arc<dyn ManagerLink>>,
    namespace: Option<String>,
    auth: Option<AuthPayload>,
}

impl SocketBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection manager (required).
    #[must_use]
    pub fn manager(mut self, manager: Arc<dyn ManagerLink>) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Set the namespace identifier (required).
    #[must_use]
    pub fn namespace(mut self, nsp: impl Into<String>) -> Self {
        self.namespace = Some(nsp.into());
        self
    }

    /// Send `value` as the CONNECT auth payload.
    #[must_use]
    pub fn auth(mut self, value: Value) -> Self {
        self.auth = Some(AuthPayload::Static(value));
        self
    }

    /// Resolve the CONNECT auth payload through `provider` on every open.
    ///
    /// The provider receives a single-use continuation; the CONNECT packet
    /// is sent when (and only when) the continuation is invoked. No timeout
    /// guards a provider that never resolves.
    #[must_use]
    pub fn auth_provider(
        mut self,
        provider: impl Fn(AuthContinuation) + Send + Sync + 'static,
    ) -> Self {
        self.auth = Some(AuthPayload::Provider(Arc::new(provider)));
        self
    }

    /// Build the socket. Initiates `connect()` when the manager's
    /// autoconnect flag is set.
    ///
    /// # Panics
    ///
    /// Panics if `manager` or `namespace` are not set.
    #[must_use]
    pub fn build(self) -> Socket {
        let socket = Socket {
            inner: Arc::new(Inner {
                nsp: self.namespace.expect("namespace is required"),
                manager: self.manager.expect("manager is required"),
                auth: self.auth.unwrap_or(AuthPayload::None),
                state: Mutex::new(ConnState::default()),
                flags: Mutex::new(EmitFlags::default()),
                acks: Mutex::new(AckRegistry::new()),
                buffers: Mutex::new(TrafficBuffers::new()),
                named: Mutex::new(NamedListeners::new()),
                any: Mutex::new(AnyListeners::new()),
                subs: Mutex::new(Vec::new()),
            }),
        };
        if socket.inner.manager.autoconnect() {
            socket.connect();
        }
        socket
    }
}

impl fmt::Debug for SocketBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocketBuilder")
            .field("namespace", &self.namespace)
            .field("auth", &self.auth)
            .field("has_manager", &self.manager.is_some())
            .finish()
    }
}

impl fmt::Debug for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock().expect("state lock poisoned");
        f.debug_struct("Socket")
            .field("nsp", &self.inner.nsp)
            .field("connected", &state.connected)
            .field("sid", &state.sid)
            .finish_non_exhaustive()
    }
}

impl Socket {
    /// Create a new socket builder.
    #[must_use]
    pub fn builder() -> SocketBuilder {
        SocketBuilder::new()
    }

    /// The namespace this socket is bound to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.nsp
    }

    /// The connection id assigned by the last CONNECT handshake, if any.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .expect("state lock poisoned")
            .sid
            .clone()
    }

    /// Whether the namespace handshake is currently established.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.inner
            .state
            .lock()
            .expect("state lock poisoned")
            .connected
    }

    /// Inverse of [`connected`](Self::connected).
    #[must_use]
    pub fn disconnected(&self) -> bool {
        !self.connected()
    }

    /// Whether the socket holds live manager subscriptions, i.e. a
    /// connection attempt has been made and `destroy()` has not run.
    #[must_use]
    pub fn active(&self) -> bool {
        !self.inner.subs.lock().expect("subs lock poisoned").is_empty()
    }

    // ========== Connection lifecycle ==========

    /// Initiate the namespace connection. No-op when already connected.
    ///
    /// Subscribes to the manager's open/packet/close events exactly once,
    /// asks the manager to open the connection unless a reconnection attempt
    /// is already underway, and runs the open handler synchronously when the
    /// connection is already open.
    pub fn connect(&self) {
        if self.connected() {
            return;
        }
        self.subscribe_to_manager();
        if !self.inner.manager.is_reconnecting() {
            self.inner.manager.request_open();
        }
        if self.inner.manager.is_open() {
            self.handle_open();
        }
    }

    /// Alias for [`connect`](Self::connect).
    pub fn open(&self) {
        self.connect();
    }

    fn subscribe_to_manager(&self) {
        {
            let subs = self.inner.subs.lock().expect("subs lock poisoned");
            if !subs.is_empty() {
                return;
            }
        }

        let open = {
            let weak = Arc::downgrade(&self.inner);
            Subscription::gated(&self.inner.manager, ManagerEventKind::Open, move |_| {
                if let Some(socket) = Socket::upgrade(&weak) {
                    socket.handle_open();
                }
            })
        };
        let packet = {
            let weak = Arc::downgrade(&self.inner);
            Subscription::gated(
                &self.inner.manager,
                ManagerEventKind::Packet,
                move |event| {
                    if let (Some(socket), ManagerEvent::Packet(packet)) =
                        (Socket::upgrade(&weak), event)
                    {
                        socket.handle_packet(packet);
                    }
                },
            )
        };
        let close = {
            let weak = Arc::downgrade(&self.inner);
            Subscription::gated(&self.inner.manager, ManagerEventKind::Close, move |event| {
                if let (Some(socket), ManagerEvent::Close(reason)) =
                    (Socket::upgrade(&weak), event)
                {
                    socket.handle_close(&reason);
                }
            })
        };

        let mut subs = self.inner.subs.lock().expect("subs lock poisoned");
        if subs.is_empty() {
            subs.extend([open, packet, close]);
            self.inner
                .state
                .lock()
                .expect("state lock poisoned")
                .destroyed = false;
        }
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Transport is open: run the CONNECT handshake for this namespace.
    fn handle_open(&self) {
        log::debug!("transport open, sending connect for {}", self.inner.nsp);
        match &self.inner.auth {
            AuthPayload::Provider(provider) => {
                let weak = Arc::downgrade(&self.inner);
                let continuation: AuthContinuation = Box::new(move |data| {
                    if let Some(socket) = Socket::upgrade(&weak) {
                        socket.send_connect(Some(data));
                    }
                });
                provider(continuation);
            }
            AuthPayload::Static(value) => self.send_connect(Some(value.clone())),
            AuthPayload::None => self.send_connect(None),
        }
    }

    fn send_connect(&self, data: Option<Value>) {
        self.inner
            .manager
            .send_packet(Packet::connect(self.inner.nsp.clone(), data));
    }

    /// The server acknowledged the CONNECT handshake.
    fn handle_connect_success(&self, packet: Packet) {
        let sid = packet
            .data
            .as_ref()
            .and_then(|data| data.get("sid"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        let Some(sid) = sid else {
            log::warn!("connect ack for {} carried no sid, ignoring", self.inner.nsp);
            return;
        };

        log::debug!("namespace {} connected, sid {}", self.inner.nsp, sid);
        {
            let mut state = self.inner.state.lock().expect("state lock poisoned");
            state.connected = true;
            state.sid = Some(sid);
        }
        self.emit_lifecycle("connect", &[]);
        self.flush_buffers();
    }

    /// Drain both buffers, exactly once per transition into connected:
    /// receive side first in arrival order, then send side in emission
    /// order.
    fn flush_buffers(&self) {
        let (events, packets) = self
            .inner
            .buffers
            .lock()
            .expect("buffers lock poisoned")
            .take();
        if !events.is_empty() || !packets.is_empty() {
            log::debug!(
                "flushing {} buffered events and {} buffered packets for {}",
                events.len(),
                packets.len(),
                self.inner.nsp
            );
        }
        for event in events {
            self.dispatch(&event.name, &event.args, event.ack.as_ref());
        }
        for packet in packets {
            self.inner.manager.send_packet(packet);
        }
    }

    /// Transport-level close. Subscriptions are kept: the manager may
    /// reconnect and the next open re-runs the handshake.
    fn handle_close(&self, reason: &str) {
        log::debug!("namespace {} closed: {}", self.inner.nsp, reason);
        {
            let mut state = self.inner.state.lock().expect("state lock poisoned");
            state.connected = false;
            state.sid = None;
        }
        self.emit_lifecycle("disconnect", &[Value::String(reason.to_owned())]);
    }

    /// The server ended this namespace session; reconnection is suppressed
    /// for good.
    fn handle_server_disconnect(&self) {
        self.destroy();
        self.handle_close(SERVER_DISCONNECT);
    }

    /// Disconnect the namespace locally.
    ///
    /// Sends a DISCONNECT packet when currently connected, then releases
    /// every manager subscription either way.
    pub fn disconnect(&self) {
        let was_connected = self.connected();
        if was_connected {
            self.emit_lifecycle("disconnecting", &[]);
            log::debug!("sending disconnect for {}", self.inner.nsp);
            self.inner
                .manager
                .send_packet(Packet::disconnect(self.inner.nsp.clone()));
        }
        self.destroy();
        if was_connected {
            self.handle_close(CLIENT_DISCONNECT);
        }
    }

    /// Alias for [`disconnect`](Self::disconnect).
    pub fn close(&self) {
        self.disconnect();
    }

    /// Release every manager subscription and remove this socket from the
    /// manager's tracking. Idempotent.
    pub fn destroy(&self) {
        let subs = {
            let mut subs = self.inner.subs.lock().expect("subs lock poisoned");
            std::mem::take(&mut *subs)
        };
        for mut sub in subs {
            sub.release();
        }

        let first = {
            let mut state = self.inner.state.lock().expect("state lock poisoned");
            !std::mem::replace(&mut state.destroyed, true)
        };
        if first {
            self.inner.manager.forget(&self.inner.nsp);
        }
    }

    // ========== Packet router ==========

    /// Route one inbound packet. Packets for other namespaces are ignored;
    /// the underlying connection is shared.
    fn handle_packet(&self, packet: Packet) {
        if packet.nsp != self.inner.nsp {
            return;
        }
        match packet.kind {
            PacketKind::Connect => self.handle_connect_success(packet),
            PacketKind::Event | PacketKind::BinaryEvent => self.handle_event(packet),
            PacketKind::Ack | PacketKind::BinaryAck => self.handle_ack(packet),
            PacketKind::Disconnect => self.handle_server_disconnect(),
            PacketKind::ConnectError => {
                let args = packet.data.map_or_else(Vec::new, |data| vec![data]);
                self.emit_lifecycle("connect_error", &args);
            }
        }
    }

    /// Inbound user event: dispatch immediately when connected, buffer for
    /// replay otherwise.
    fn handle_event(&self, packet: Packet) {
        let Some((name, args)) = split_event_payload(packet.data) else {
            log::warn!("malformed event payload for {}, ignoring", self.inner.nsp);
            return;
        };
        let ack = packet.id.map(|id| {
            AckResponder::new(id, self.inner.nsp.clone(), Arc::clone(&self.inner.manager))
        });

        if self.connected() {
            self.dispatch(&name, &args, ack.as_ref());
        } else {
            self.inner
                .buffers
                .lock()
                .expect("buffers lock poisoned")
                .queue_receive(QueuedEvent { name, args, ack });
        }
    }

    /// Inbound ACK: resolve the pending continuation, or ignore an unknown
    /// id.
    fn handle_ack(&self, packet: Packet) {
        let Some(id) = packet.id else {
            log::warn!("ack packet without id for {}, ignoring", self.inner.nsp);
            return;
        };
        let callback = self
            .inner
            .acks
            .lock()
            .expect("acks lock poisoned")
            .resolve(id);
        match callback {
            Some(callback) => callback(ack_args(packet.data)),
            None => log::debug!("ack {} has no pending continuation, ignoring", id),
        }
    }

    // ========== Event emission ==========

    /// Emit `event` with `args` to the server.
    ///
    /// While disconnected the packet is appended to the send buffer, unless
    /// the volatile flag is set, in which case it is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SocketError::ReservedEvent`] for lifecycle event names; no
    /// packet is produced.
    pub fn emit(&self, event: &str, args: Vec<Value>) -> Result<(), SocketError> {
        self.emit_inner(event, args, None)
    }

    /// Emit `event` with `args`, expecting an acknowledgment.
    ///
    /// The packet carries a fresh correlation id and `callback` runs when
    /// the matching ACK arrives.
    ///
    /// # Errors
    ///
    /// Returns [`SocketError::ReservedEvent`] for lifecycle event names.
    pub fn emit_with_ack(
        &self,
        event: &str,
        args: Vec<Value>,
        callback: impl FnOnce(Vec<Value>) + Send + 'static,
    ) -> Result<(), SocketError> {
        self.emit_inner(event, args, Some(Box::new(callback)))
    }

    /// Emit the generic "message" event with `args`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`emit`](Self::emit).
    pub fn send(&self, args: Vec<Value>) -> Result<(), SocketError> {
        self.emit("message", args)
    }

    fn emit_inner(
        &self,
        event: &str,
        args: Vec<Value>,
        ack: Option<AckCallback>,
    ) -> Result<(), SocketError> {
        if RESERVED_EVENTS.contains(&event) {
            return Err(SocketError::ReservedEvent(event.to_owned()));
        }

        let inner = &self.inner;
        // Flags cover exactly one emission: sent, buffered, or dropped.
        defer! {
            *inner.flags.lock().expect("flags lock poisoned") = EmitFlags::default();
        }
        let flags = *self.inner.flags.lock().expect("flags lock poisoned");

        let mut data = Vec::with_capacity(args.len() + 1);
        data.push(Value::String(event.to_owned()));
        data.extend(args);

        let id = ack.map(|callback| {
            self.inner
                .acks
                .lock()
                .expect("acks lock poisoned")
                .register(callback)
        });

        let packet = Packet {
            kind: PacketKind::Event,
            nsp: self.inner.nsp.clone(),
            data: Some(Value::Array(data)),
            id,
            options: Some(PacketOptions {
                compress: flags.compress.unwrap_or(true),
            }),
        };

        let connected = self.connected();
        if flags.volatile && (!connected || !self.inner.manager.transport_writable()) {
            log::debug!("discarding volatile packet, connection not ready");
            return Ok(());
        }

        if connected {
            self.inner.manager.send_packet(packet);
        } else {
            self.inner
                .buffers
                .lock()
                .expect("buffers lock poisoned")
                .queue_send(packet);
        }
        Ok(())
    }

    /// Set per-emission compression. The encoder default is on; this applies
    /// to the next emission only.
    pub fn compress(&self, compress: bool) -> &Self {
        self.inner
            .flags
            .lock()
            .expect("flags lock poisoned")
            .compress = Some(compress);
        self
    }

    /// Mark the next emission volatile: dropped instead of buffered when the
    /// socket is disconnected or the transport is not writable.
    pub fn volatile(&self) -> &Self {
        self.inner
            .flags
            .lock()
            .expect("flags lock poisoned")
            .volatile = true;
        self
    }

    // ========== Listener registration ==========

    /// Register a listener for `event`.
    pub fn on(
        &self,
        event: &str,
        callback: impl FnMut(&[Value], Option<&AckResponder>) + Send + 'static,
    ) -> ListenerId {
        self.inner
            .named
            .lock()
            .expect("named lock poisoned")
            .add(event, false, Arc::new(Mutex::new(callback)))
    }

    /// Register a listener for `event` that fires at most once.
    pub fn once(
        &self,
        event: &str,
        callback: impl FnMut(&[Value], Option<&AckResponder>) + Send + 'static,
    ) -> ListenerId {
        self.inner
            .named
            .lock()
            .expect("named lock poisoned")
            .add(event, true, Arc::new(Mutex::new(callback)))
    }

    /// Remove one listener for `event` by token, or every listener for
    /// `event` when no token is given.
    pub fn off(&self, event: &str, id: Option<ListenerId>) {
        self.inner
            .named
            .lock()
            .expect("named lock poisoned")
            .remove(event, id);
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .named
            .lock()
            .expect("named lock poisoned")
            .count(event)
    }

    /// Register a listener observing every dispatched inbound event, after
    /// any listeners already present.
    pub fn on_any(
        &self,
        callback: impl FnMut(&str, &[Value], Option<&AckResponder>) + Send + 'static,
    ) -> ListenerId {
        self.inner
            .any
            .lock()
            .expect("any lock poisoned")
            .append(Arc::new(Mutex::new(callback)))
    }

    /// Register an any-listener ahead of those already present.
    pub fn prepend_any(
        &self,
        callback: impl FnMut(&str, &[Value], Option<&AckResponder>) + Send + 'static,
    ) -> ListenerId {
        self.inner
            .any
            .lock()
            .expect("any lock poisoned")
            .prepend(Arc::new(Mutex::new(callback)))
    }

    /// Remove one any-listener by token, or clear the list when no token is
    /// given.
    pub fn off_any(&self, id: Option<ListenerId>) {
        self.inner.any.lock().expect("any lock poisoned").remove(id);
    }

    /// Tokens of the live any-listener list, in invocation order.
    #[must_use]
    pub fn any_listener_ids(&self) -> Vec<ListenerId> {
        self.inner.any.lock().expect("any lock poisoned").ids()
    }

    /// Number of registered any-listeners.
    #[must_use]
    pub fn any_listener_count(&self) -> usize {
        self.inner.any.lock().expect("any lock poisoned").len()
    }

    // ========== Dispatch ==========

    /// Two-stage dispatch for inbound events: a snapshot of the
    /// any-listener list first, then the named listeners for the event.
    fn dispatch(&self, name: &str, args: &[Value], ack: Option<&AckResponder>) {
        let any = self.inner.any.lock().expect("any lock poisoned").snapshot();
        for callback in any {
            (&mut *callback.lock().expect("any-listener poisoned"))(name, args, ack);
        }
        self.deliver_named(name, args, ack);
    }

    fn deliver_named(&self, name: &str, args: &[Value], ack: Option<&AckResponder>) {
        let callbacks = self
            .inner
            .named
            .lock()
            .expect("named lock poisoned")
            .snapshot(name);
        for callback in callbacks {
            (&mut *callback.lock().expect("listener poisoned"))(args, ack);
        }
    }

    /// Local lifecycle notification. Bypasses any-listeners: those observe
    /// remote events only.
    fn emit_lifecycle(&self, event: &str, args: &[Value]) {
        self.deliver_named(event, args, None);
    }
}

/// Split an EVENT payload into its name and argument list.
///
/// The payload must be an array headed by a string event name; anything else
/// is a protocol anomaly.
fn split_event_payload(data: Option<Value>) -> Option<(String, Vec<Value>)> {
    let Some(Value::Array(mut entries)) = data else {
        return None;
    };
    if entries.is_empty() {
        return None;
    }
    let Value::String(name) = entries.remove(0) else {
        return None;
    };
    Some((name, entries))
}

/// Normalize ACK payload data into an argument list.
fn ack_args(data: Option<Value>) -> Vec<Value> {
    match data {
        Some(Value::Array(args)) => args,
        Some(other) => vec![other],
        None => Vec::new(),
    }
}
