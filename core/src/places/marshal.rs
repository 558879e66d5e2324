// Payload marshalling — untyped channel payloads in, typed requests out
//
// The original channel contract validated payloads with bare type tests and
// silently dropped the call on mismatch. Here every shape check produces an
// `ArgumentError` so the dispatcher can answer with an explicit error
// response instead of leaving the caller hanging.

use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{Geofence, Location, PointOfInterest};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Why an argument payload failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("argument payload is missing")]
    MissingPayload,

    #[error("argument payload must be a map")]
    NotAMap,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

// ============================================================================
// TYPED REQUESTS
// ============================================================================

/// Validated arguments for `getNearbyPointsOfInterest`.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRequest {
    pub location: Location,
    pub limit: u32,
}

impl NearbyRequest {
    /// Parse `{ "Location": {latitude, longitude}, "Limit": int }`.
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, ArgumentError> {
        let map = require_map(payload)?;
        let location_map = require_field_map(map, "Location")?;
        let location = Location::new(
            require_f64(location_map, "latitude")?,
            require_f64(location_map, "longitude")?,
        );
        let limit_raw = require_i64(map, "Limit")?;
        let limit = u32::try_from(limit_raw).map_err(|_| ArgumentError::WrongType {
            field: "Limit",
            expected: "a non-negative integer",
        })?;
        Ok(Self { location, limit })
    }
}

/// Validated arguments for `processGeofence`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceRequest {
    pub geofence: Geofence,
    pub transition_type: i32,
}

impl GeofenceRequest {
    /// Parse `{ "Geofence": {latitude, longitude, radius, expirationDuration,
    /// requestId}, "TransitionType": int }`.
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, ArgumentError> {
        let map = require_map(payload)?;
        let fence_map = require_field_map(map, "Geofence")?;
        let geofence = Geofence {
            latitude: require_f64(fence_map, "latitude")?,
            longitude: require_f64(fence_map, "longitude")?,
            radius: require_f64(fence_map, "radius")?,
            expiration_duration: require_i64(fence_map, "expirationDuration")?,
            request_id: require_string(fence_map, "requestId")?,
        };
        let transition_raw = require_i64(map, "TransitionType")?;
        let transition_type =
            i32::try_from(transition_raw).map_err(|_| ArgumentError::WrongType {
                field: "TransitionType",
                expected: "a 32-bit integer",
            })?;
        Ok(Self {
            geofence,
            transition_type,
        })
    }
}

/// Parse the bare-integer payload of `setAuthorizationStatus`.
pub fn authorization_code(payload: Option<&Value>) -> Result<i64, ArgumentError> {
    let value = payload.ok_or(ArgumentError::MissingPayload)?;
    value.as_i64().ok_or(ArgumentError::WrongType {
        field: "status",
        expected: "an integer",
    })
}

// ============================================================================
// WIRE SERIALIZATION
// ============================================================================

/// Wire record for one POI. Field order here is the wire field order.
#[derive(Serialize)]
struct WirePoi<'a> {
    #[serde(rename = "POI")]
    name: &'a str,
    latitude: f64,
    longitude: f64,
    identifier: &'a str,
}

/// Serialize POIs into the channel's JSON array string, preserving input
/// order. An empty slice yields the literal `"[]"`. A record that fails to
/// serialize is logged and skipped; the rest still go out.
pub fn generate_poi_string(pois: &[PointOfInterest]) -> String {
    let mut records = Vec::with_capacity(pois.len());
    for poi in pois {
        match wire_record(poi) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(identifier = %poi.identifier, "Skipping unserializable POI: {err:#}");
            }
        }
    }
    Value::Array(records).to_string()
}

fn wire_record(poi: &PointOfInterest) -> anyhow::Result<Value> {
    serde_json::to_value(WirePoi {
        name: &poi.name,
        latitude: poi.latitude,
        longitude: poi.longitude,
        identifier: &poi.identifier,
    })
    .context("POI record did not serialize")
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn require_map(payload: Option<&Value>) -> Result<&Map<String, Value>, ArgumentError> {
    payload
        .ok_or(ArgumentError::MissingPayload)?
        .as_object()
        .ok_or(ArgumentError::NotAMap)
}

fn require_field<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ArgumentError> {
    map.get(field).ok_or(ArgumentError::MissingField(field))
}

fn require_field_map<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Map<String, Value>, ArgumentError> {
    require_field(map, field)?
        .as_object()
        .ok_or(ArgumentError::WrongType {
            field,
            expected: "a map",
        })
}

fn require_f64(map: &Map<String, Value>, field: &'static str) -> Result<f64, ArgumentError> {
    require_field(map, field)?
        .as_f64()
        .ok_or(ArgumentError::WrongType {
            field,
            expected: "a number",
        })
}

fn require_i64(map: &Map<String, Value>, field: &'static str) -> Result<i64, ArgumentError> {
    require_field(map, field)?
        .as_i64()
        .ok_or(ArgumentError::WrongType {
            field,
            expected: "an integer",
        })
}

fn require_string(map: &Map<String, Value>, field: &'static str) -> Result<String, ArgumentError> {
    require_field(map, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or(ArgumentError::WrongType {
            field,
            expected: "a string",
        })
}
