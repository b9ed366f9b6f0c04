pub mod location;
pub mod markers;
pub mod mood;
pub mod orchestrator;

pub use crate::domain::model::{Coordinate, Mood, MoodConfig, Place};
pub use crate::domain::ports::{ConfigProvider, GeolocationSource, MapView, PlacesService};
pub use crate::utils::error::Result;
