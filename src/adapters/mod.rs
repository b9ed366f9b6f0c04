// Adapters layer: concrete implementations for external systems (places api, geolocation, map).

pub mod geolocation;
pub mod google_places;
pub mod map;

pub use geolocation::{DeviceLocator, FixedPosition, IpGeolocation, Unavailable};
pub use google_places::GooglePlacesClient;
pub use map::HeadlessMap;
