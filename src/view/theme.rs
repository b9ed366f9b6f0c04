use crate::domain::model::{Coordinate, MapOptions};
use serde_json::{json, Value};

pub const DEFAULT_ZOOM: u8 = 14;
pub const DEFAULT_CONTAINER_ID: &str = "map";

pub const OPEN_COLOR: &str = "#4caf50";
pub const CLOSED_COLOR: &str = "#f44336";
pub const UNKNOWN_COLOR: &str = "#888888";
pub const RATING_COLOR: &str = "#FFD700";

/// 深色地圖樣式
pub fn dark_map_style() -> Value {
    json!([
        { "elementType": "geometry", "stylers": [{ "color": "#242f3e" }] },
        { "elementType": "labels.text.fill", "stylers": [{ "color": "#746855" }] },
        { "elementType": "labels.text.stroke", "stylers": [{ "color": "#242f3e" }] },
        { "featureType": "poi", "elementType": "labels.text.fill", "stylers": [{ "color": "#d59563" }] },
        { "featureType": "road", "elementType": "geometry", "stylers": [{ "color": "#38414e" }] },
        { "featureType": "water", "elementType": "geometry", "stylers": [{ "color": "#17263c" }] }
    ])
}

pub fn map_options(center: Coordinate, zoom: u8, container_id: &str) -> MapOptions {
    MapOptions {
        container_id: container_id.to_string(),
        center,
        zoom,
        styles: dark_map_style(),
        disable_default_ui: true,
    }
}

pub const STYLESHEET: &str = r#"
body { margin: 0; }
.container { display: flex; height: 100vh; background-color: #0f0f0f; color: #fff; font-family: Inter, sans-serif; }
.sidebar { width: 400px; padding: 24px; display: flex; flex-direction: column; border-right: 1px solid #222; z-index: 10; background-color: #121212; }
.header { margin-bottom: 24px; }
.title { font-size: 24px; font-weight: bold; margin: 0; }
.subtitle { color: #888; font-size: 14px; }
.mood-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin-bottom: 30px; }
.mood-button { display: flex; align-items: center; justify-content: center; padding: 12px; background-color: #1e1e1e; border: 1px solid #333; border-radius: 8px; color: #fff; cursor: pointer; transition: 0.2s; font-weight: 500; }
.mood-button.active { border-color: #FFD700; }
.mood-button .label { margin-left: 8px; }
.loading { text-align: center; color: #888; font-size: 14px; }
.results-list { overflow-y: auto; flex: 1; }
.card { padding: 16px; background-color: #1a1a1a; border-radius: 12px; margin-bottom: 12px; border: 1px solid #222; }
.card-header { display: flex; justify-content: space-between; align-items: flex-start; }
.place-name { font-size: 16px; margin: 0; color: #fff; }
.rating { display: flex; align-items: center; gap: 4px; font-size: 14px; color: #FFD700; }
.address { font-size: 13px; color: #aaa; margin: 8px 0; display: flex; align-items: center; gap: 4px; }
.status-row { display: flex; align-items: center; margin-top: 10px; font-size: 12px; }
.status-row .label { margin-left: 5px; }
.status-open { color: #4caf50; }
.status-closed { color: #f44336; }
.status-unknown { color: #888888; }
.map { flex: 1; }
"#;
