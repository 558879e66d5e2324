//! Places domain — value types, payload marshalling, and the SDK seam

pub mod marshal;
pub mod sdk;
pub mod types;

pub use sdk::{LocationCallback, PlacesSdk, PoiCallback};
pub use types::{AuthorizationStatus, Geofence, Location, PointOfInterest};
