pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, OutputFormat};

pub use adapters::{DeviceLocator, GooglePlacesClient, HeadlessMap};
pub use app::NearbyApp;
pub use config::Settings;
pub use crate::core::orchestrator::{SearchController, SearchOutcome, SearchSettings};
pub use domain::model::{Coordinate, Mood, Place, ResponseOrdering};
pub use utils::error::{NearbyError, Result};
pub use view::Page;
