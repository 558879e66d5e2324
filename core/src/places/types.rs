// Places value types — transient, request-scoped, immutable once built

use serde::{Deserialize, Serialize};

/// A point of interest as resolved by the Places SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub identifier: String,
}

impl PointOfInterest {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            identifier: identifier.into(),
        }
    }
}

/// A geographic coordinate. Serializes to the wire shape
/// `{"latitude": .., "longitude": ..}` used by `getLastKnownLocation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Geofence descriptor handed to `processGeofence`. The serde shape matches
/// the nested payload map (`expirationDuration`, `requestId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    /// Lifetime of the geofence registration, in milliseconds.
    pub expiration_duration: i64,
    pub request_id: String,
}

/// Location authorization status, fixed bijection with the channel's
/// integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    Denied,
    Always,
    Unknown,
    Restricted,
    WhenInUse,
}

impl AuthorizationStatus {
    /// Map a channel integer code to a status. Codes outside `0..=4` have no
    /// valid status and yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Denied),
            1 => Some(Self::Always),
            2 => Some(Self::Unknown),
            3 => Some(Self::Restricted),
            4 => Some(Self::WhenInUse),
            _ => None,
        }
    }

    /// Inverse of [`from_code`](Self::from_code).
    pub fn code(self) -> i64 {
        match self {
            Self::Denied => 0,
            Self::Always => 1,
            Self::Unknown => 2,
            Self::Restricted => 3,
            Self::WhenInUse => 4,
        }
    }
}

impl std::fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denied => write!(f, "Denied"),
            Self::Always => write!(f, "Always"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Restricted => write!(f, "Restricted"),
            Self::WhenInUse => write!(f, "WhenInUse"),
        }
    }
}
