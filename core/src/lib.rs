// Placebridge Core — Places method-channel dispatch
//
// "Does this translate one channel call into one Places SDK call,
//  and one SDK callback into one channel response?"
//
// If the answer is no, it doesn't belong here.

pub mod channel;
pub mod places;
pub mod plugin;

pub use channel::queue::MainQueue;
pub use channel::{
    ChannelTransport, MethodCall, MethodCallHandler, ResponseSink, CHANNEL_NAME,
};
pub use places::marshal::{generate_poi_string, ArgumentError};
pub use places::{AuthorizationStatus, Geofence, Location, PlacesSdk, PointOfInterest};
pub use plugin::{attach, detach, PluginConfig, PluginHandle};
