// Places SDK seam
//
// The real SDK lives on the native side; the bridge only ever talks to this
// trait. Asynchronous operations take a boxed callback because the SDK is
// free to complete them from any worker thread — the dispatcher, not the
// SDK, is responsible for hopping back onto the main queue.

use super::types::{AuthorizationStatus, Geofence, Location, PointOfInterest};

/// Callback for operations resolving a list of POIs.
pub type PoiCallback = Box<dyn FnOnce(Vec<PointOfInterest>) + Send>;

/// Callback for operations resolving an optional location.
pub type LocationCallback = Box<dyn FnOnce(Option<Location>) + Send>;

/// Surface of the native Places SDK consumed by the dispatcher.
#[cfg_attr(test, mockall::automock)]
pub trait PlacesSdk: Send + Sync {
    /// Version string of the underlying Places extension.
    fn extension_version(&self) -> String;

    /// Clear all Places state held by the SDK.
    fn clear(&self);

    /// Resolve the POIs the device is currently within. An empty list is a
    /// valid answer, never an error.
    fn get_current_points_of_interest(&self, callback: PoiCallback);

    /// Resolve the device's last known location, if the SDK has one.
    fn get_last_known_location(&self, callback: LocationCallback);

    /// Resolve up to `limit` POIs near `location`.
    fn get_nearby_points_of_interest(
        &self,
        location: Location,
        limit: u32,
        callback: PoiCallback,
    );

    /// Feed a geofence transition event into the SDK.
    fn process_geofence(&self, geofence: &Geofence, transition_type: i32);

    /// Set the location authorization status. `None` means the channel
    /// supplied a code with no valid status; it is forwarded as-is.
    fn set_authorization_status(&self, status: Option<AuthorizationStatus>);
}
