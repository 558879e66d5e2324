//! Method-channel protocol — call/response types and the seams to the host
//!
//! The host framework owns the actual binary transport; this module models
//! the pieces the bridge touches: a named channel endpoint, an incoming
//! `MethodCall`, and a consume-once `ResponseSink` standing in for the
//! channel's result object.

pub mod dispatch;
pub mod queue;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Channel endpoint this bridge registers under.
pub const CHANNEL_NAME: &str = "flutter_acpplaces";

/// Method names understood by the dispatcher.
pub mod methods {
    pub const EXTENSION_VERSION: &str = "extensionVersion";
    pub const CLEAR: &str = "clear";
    pub const GET_CURRENT_POINTS_OF_INTEREST: &str = "getCurrentPointsOfInterest";
    pub const GET_LAST_KNOWN_LOCATION: &str = "getLastKnownLocation";
    pub const GET_NEARBY_POINTS_OF_INTEREST: &str = "getNearbyPointsOfInterest";
    pub const PROCESS_GEOFENCE: &str = "processGeofence";
    pub const SET_AUTHORIZATION_STATUS: &str = "setAuthorizationStatus";
}

/// Error codes delivered through `ResponseSink::error`.
pub mod codes {
    /// Argument payload failed shape validation; the SDK was not invoked.
    pub const BAD_ARGUMENTS: &str = "bad_arguments";
}

/// One incoming channel call: a method name plus an opaque argument payload.
///
/// The payload is whatever the transport decoded — no shape is guaranteed
/// until the marshalling layer has validated it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The channel's reply object. At most one of the three methods may be
/// called, exactly once — consuming `Box<Self>` encodes that in the types.
///
/// Implementations are only safe to complete from the main queue for
/// asynchronous operations; the dispatcher upholds that discipline.
pub trait ResponseSink: Send {
    /// Deliver a successful result value.
    fn success(self: Box<Self>, value: Value);
    /// Deliver an explicit error with a stable code and human-readable message.
    fn error(self: Box<Self>, code: String, message: String, details: Option<Value>);
    /// Signal that the method name is not handled by this bridge.
    fn not_implemented(self: Box<Self>);
}

/// Receiver side of a registered channel: one callback per incoming call.
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: MethodCall, sink: Box<dyn ResponseSink>);
}

/// Host-framework binding surface. Registering a handler under a name that
/// already has one replaces it, matching the host channel semantics.
pub trait ChannelTransport: Send + Sync {
    fn register(&self, channel_name: &str, handler: Arc<dyn MethodCallHandler>);
    fn unregister(&self, channel_name: &str);
}
