use crate::domain::model::{MarkerAnimation, MarkerHandle, MarkerSpec, Place};
use crate::domain::ports::MapView;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntry {
    pub place_id: String,
    pub handle: MarkerHandle,
}

/// 以地點 id 索引的標記集合。每次搜尋整批清除再重建，從不就地修改
#[derive(Debug, Default)]
pub struct MarkerSet {
    entries: Vec<MarkerEntry>,
    by_place: HashMap<String, usize>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MarkerEntry] {
        &self.entries
    }

    pub fn handle_for(&self, place_id: &str) -> Option<MarkerHandle> {
        self.by_place
            .get(place_id)
            .map(|&index| self.entries[index].handle)
    }

    /// 從地圖上移除所有標記並清空集合
    pub fn clear<M: MapView + ?Sized>(&mut self, map: &mut M) {
        for entry in self.entries.drain(..) {
            map.remove_marker(entry.handle);
        }
        self.by_place.clear();
    }

    /// 每個地點建立一個新標記
    pub fn rebuild<M: MapView + ?Sized>(&mut self, map: &mut M, places: &[Place]) {
        self.clear(map);
        self.entries.reserve(places.len());

        for place in places {
            let handle = map.add_marker(&MarkerSpec {
                position: place.location,
                title: place.name.clone(),
                animation: MarkerAnimation::Drop,
            });
            self.by_place.insert(place.id.clone(), self.entries.len());
            self.entries.push(MarkerEntry {
                place_id: place.id.clone(),
                handle,
            });
        }
    }
}
