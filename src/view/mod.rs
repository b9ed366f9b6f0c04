//! Presentation: a pure mapping from controller state to a renderable page.
//!
//! [`render`] does no I/O; [`Page::to_html`], [`Page::to_text`] and the
//! `Serialize` impl turn the page into concrete output.

pub mod html;
pub mod icons;
pub mod text;
pub mod theme;

use crate::core::mood::MoodRegistry;
use crate::core::orchestrator::ControllerSnapshot;
use crate::domain::model::{Coordinate, MapOptions, Mood, OpenStatus, Place};
use icons::{mood_icon, Icon};
use serde::Serialize;
use std::collections::HashMap;

pub const TITLE: &str = "Smart Nearby";
pub const SUBTITLE: &str = "What's the vibe today?";
pub const LOADING_TEXT: &str = "Searching nearby...";
pub const MISSING_RATING: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub subtitle: String,
    pub moods: Vec<MoodButton>,
    pub loading: Option<String>,
    pub cards: Vec<PlaceCard>,
    pub map: MapPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodButton {
    pub mood: Mood,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCard {
    pub id: String,
    pub name: String,
    pub rating: String,
    pub address: String,
    pub status: StatusBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub status: OpenStatus,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPanel {
    pub container_id: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub styles: serde_json::Value,
    pub disable_default_ui: bool,
    pub pins: Vec<MapPin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub place_id: String,
    pub title: String,
    pub position: Coordinate,
}

pub fn render(snapshot: &ControllerSnapshot, options: &MapOptions) -> Page {
    let moods = MoodRegistry::new()
        .entries()
        .map(|(mood, _)| MoodButton {
            mood,
            label: mood.name().to_string(),
            icon: mood_icon(mood),
            active: snapshot.active_mood == Some(mood),
        })
        .collect();

    let by_id: HashMap<&str, &Place> = snapshot
        .places
        .iter()
        .map(|place| (place.id.as_str(), place))
        .collect();
    let pins = snapshot
        .markers
        .iter()
        .filter_map(|marker| by_id.get(marker.place_id.as_str()))
        .map(|place| MapPin {
            place_id: place.id.clone(),
            title: place.name.clone(),
            position: place.location,
        })
        .collect();

    Page {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        moods,
        loading: snapshot.searching.then(|| LOADING_TEXT.to_string()),
        cards: snapshot.places.iter().map(place_card).collect(),
        map: MapPanel {
            container_id: options.container_id.clone(),
            center: snapshot.map_center,
            zoom: options.zoom,
            styles: options.styles.clone(),
            disable_default_ui: options.disable_default_ui,
            pins,
        },
    }
}

fn place_card(place: &Place) -> PlaceCard {
    PlaceCard {
        id: place.id.clone(),
        name: place.name.clone(),
        rating: rating_text(place.rating),
        address: place.address.clone(),
        status: status_badge(place.open_status),
    }
}

/// 沒有評分（或評分為 0）時顯示 "N/A"
pub fn rating_text(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value > 0.0 => value.to_string(),
        _ => MISSING_RATING.to_string(),
    }
}

pub fn status_badge(status: OpenStatus) -> StatusBadge {
    let (label, color) = match status {
        OpenStatus::Open => ("Open Now", theme::OPEN_COLOR),
        OpenStatus::Closed => ("Closed", theme::CLOSED_COLOR),
        OpenStatus::Unknown => ("Hours unknown", theme::UNKNOWN_COLOR),
    };
    StatusBadge {
        status,
        label: label.to_string(),
        color: color.to_string(),
    }
}
