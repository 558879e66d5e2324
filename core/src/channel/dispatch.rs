// Method dispatch — one channel call in, at most one SDK call out
//
// Sync operations answer inline on the calling thread. Async operations
// hand their SDK callback through the main queue before touching the sink,
// because the channel reply object is only safe on that thread.

use serde_json::Value;
use std::sync::Arc;

use super::queue::MainQueue;
use super::{codes, methods, MethodCall, MethodCallHandler, ResponseSink};
use crate::places::marshal::{
    self, generate_poi_string, ArgumentError, GeofenceRequest, NearbyRequest,
};
use crate::places::types::AuthorizationStatus;
use crate::places::PlacesSdk;

/// Stateless request router. Holds the SDK and the main queue, nothing else;
/// no state survives a call boundary.
pub struct Dispatcher {
    sdk: Arc<dyn PlacesSdk>,
    queue: MainQueue,
}

impl Dispatcher {
    pub fn new(sdk: Arc<dyn PlacesSdk>, queue: MainQueue) -> Self {
        Self { sdk, queue }
    }

    fn get_current_points_of_interest(&self, sink: Box<dyn ResponseSink>) {
        let queue = self.queue.clone();
        self.sdk.get_current_points_of_interest(Box::new(move |pois| {
            queue.post(move || sink.success(Value::String(generate_poi_string(&pois))));
        }));
    }

    fn get_last_known_location(&self, sink: Box<dyn ResponseSink>) {
        let queue = self.queue.clone();
        self.sdk.get_last_known_location(Box::new(move |location| {
            // Contract quirk, preserved: an unavailable location produces no
            // response at all rather than an explicit "no data" signal.
            let Some(location) = location else {
                tracing::debug!("No last known location, leaving the call unanswered");
                return;
            };
            queue.post(move || match serde_json::to_string(&location) {
                Ok(json) => sink.success(Value::String(json)),
                Err(err) => {
                    tracing::error!("Location did not serialize: {err}");
                    sink.success(Value::String("{}".into()));
                }
            });
        }));
    }

    fn get_nearby_points_of_interest(
        &self,
        arguments: Option<&Value>,
        sink: Box<dyn ResponseSink>,
    ) {
        let request = match NearbyRequest::from_payload(arguments) {
            Ok(request) => request,
            Err(err) => return reject(sink, methods::GET_NEARBY_POINTS_OF_INTEREST, err),
        };
        let queue = self.queue.clone();
        self.sdk.get_nearby_points_of_interest(
            request.location,
            request.limit,
            Box::new(move |pois| {
                queue.post(move || sink.success(Value::String(generate_poi_string(&pois))));
            }),
        );
    }

    fn process_geofence(&self, arguments: Option<&Value>, sink: Box<dyn ResponseSink>) {
        let request = match GeofenceRequest::from_payload(arguments) {
            Ok(request) => request,
            Err(err) => return reject(sink, methods::PROCESS_GEOFENCE, err),
        };
        self.sdk
            .process_geofence(&request.geofence, request.transition_type);
        sink.success(Value::Null);
    }

    fn set_authorization_status(&self, arguments: Option<&Value>, sink: Box<dyn ResponseSink>) {
        let code = match marshal::authorization_code(arguments) {
            Ok(code) => code,
            Err(err) => return reject(sink, methods::SET_AUTHORIZATION_STATUS, err),
        };
        let status = AuthorizationStatus::from_code(code);
        if status.is_none() {
            // Passthrough quirk: out-of-range codes still reach the SDK,
            // just with no valid status attached.
            tracing::warn!(code, "Authorization code has no valid status, forwarding anyway");
        }
        self.sdk.set_authorization_status(status);
        sink.success(Value::Null);
    }
}

impl MethodCallHandler for Dispatcher {
    fn on_method_call(&self, call: MethodCall, sink: Box<dyn ResponseSink>) {
        tracing::debug!(method = %call.method, "Dispatching channel call");
        match call.method.as_str() {
            methods::EXTENSION_VERSION => {
                sink.success(Value::String(self.sdk.extension_version()));
            }
            methods::CLEAR => {
                self.sdk.clear();
                sink.success(Value::Null);
            }
            methods::GET_CURRENT_POINTS_OF_INTEREST => self.get_current_points_of_interest(sink),
            methods::GET_LAST_KNOWN_LOCATION => self.get_last_known_location(sink),
            methods::GET_NEARBY_POINTS_OF_INTEREST => {
                self.get_nearby_points_of_interest(call.arguments.as_ref(), sink);
            }
            methods::PROCESS_GEOFENCE => self.process_geofence(call.arguments.as_ref(), sink),
            methods::SET_AUTHORIZATION_STATUS => {
                self.set_authorization_status(call.arguments.as_ref(), sink);
            }
            other => {
                tracing::debug!(method = other, "Method not implemented");
                sink.not_implemented();
            }
        }
    }
}

fn reject(sink: Box<dyn ResponseSink>, method: &str, err: ArgumentError) {
    tracing::error!(method, error = %err, "Rejecting call: malformed arguments");
    sink.error(codes::BAD_ARGUMENTS.to_string(), err.to_string(), None);
}
