use crate::domain::model::{Coordinate, MapOptions, MarkerHandle, MarkerSpec};
use crate::domain::ports::MapView;
use std::collections::BTreeMap;

/// 不連接任何繪圖後端的地圖，只在記憶體中保存中心點與標記
#[derive(Debug, Default, Clone)]
pub struct HeadlessMap {
    options: Option<MapOptions>,
    center: Option<Coordinate>,
    markers: BTreeMap<MarkerHandle, MarkerSpec>,
    next_handle: u64,
    removed: usize,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.options.is_some()
    }

    pub fn options(&self) -> Option<&MapOptions> {
        self.options.as_ref()
    }

    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> impl Iterator<Item = (&MarkerHandle, &MarkerSpec)> {
        self.markers.iter()
    }

    pub fn marker_titles(&self) -> Vec<&str> {
        self.markers.values().map(|m| m.title.as_str()).collect()
    }

    /// 累計被移除的標記數
    pub fn removed_count(&self) -> usize {
        self.removed
    }
}

impl MapView for HeadlessMap {
    fn mount(&mut self, options: &MapOptions) {
        tracing::debug!(
            "Mounting map in #{} at {} (zoom {})",
            options.container_id,
            options.center,
            options.zoom
        );
        self.center = Some(options.center);
        self.options = Some(options.clone());
    }

    fn set_center(&mut self, center: Coordinate) {
        self.center = Some(center);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.insert(handle, marker.clone());
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_some() {
            self.removed += 1;
        }
    }
}
