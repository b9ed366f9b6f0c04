use crate::core::location::LocationTracker;
use crate::core::markers::{MarkerEntry, MarkerSet};
use crate::core::mood::MoodRegistry;
use crate::domain::model::{
    Coordinate, MapOptions, Mood, Place, PriceLevel, ResponseOrdering, SearchRequest,
    SearchStatus,
};
use crate::domain::ports::{ConfigProvider, MapView, PlacesService};
use tokio::sync::Mutex;

pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub radius_meters: u32,
    pub ordering: ResponseOrdering,
}

impl SearchSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            radius_meters: config.search_radius(),
            ordering: config.response_ordering(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            ordering: ResponseOrdering::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 成功，結果與標記已一併寫入
    Committed { count: usize },
    /// 服務回傳非 OK 狀態，畫面保持空白
    Failed { status: SearchStatus },
    /// 無法取得回應，畫面保持空白
    Unreachable { message: String },
    /// 已有更新的搜尋，這個回應被丟棄
    Superseded,
}

/// 給畫面層使用的狀態快照
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub searching: bool,
    pub active_mood: Option<Mood>,
    pub places: Vec<Place>,
    pub markers: Vec<MarkerEntry>,
    pub location: Coordinate,
    pub map_center: Coordinate,
    pub generation: u64,
}

struct ControllerState<M> {
    map: M,
    tracker: LocationTracker,
    map_center: Coordinate,
    searching: bool,
    active_mood: Option<Mood>,
    results: Vec<Place>,
    markers: MarkerSet,
    issued: u64,
}

impl<M: MapView> ControllerState<M> {
    fn clear_results(&mut self) {
        self.markers.clear(&mut self.map);
        self.results.clear();
    }

    fn commit(&mut self, places: Vec<Place>) {
        self.markers.rebuild(&mut self.map, &places);
        self.results = places;
    }

    fn recenter(&mut self, center: Coordinate) {
        self.map.set_center(center);
        self.map_center = center;
    }
}

/// 心情搜尋的協調者。所有狀態都在同一把鎖後面，鎖不會跨越網路呼叫
pub struct SearchController<P: PlacesService, M: MapView> {
    places: P,
    registry: MoodRegistry,
    settings: SearchSettings,
    state: Mutex<ControllerState<M>>,
}

impl<P: PlacesService, M: MapView> SearchController<P, M> {
    pub fn new(places: P, map: M, default_location: Coordinate, settings: SearchSettings) -> Self {
        Self {
            places,
            registry: MoodRegistry::new(),
            settings,
            state: Mutex::new(ControllerState {
                map,
                tracker: LocationTracker::new(default_location),
                map_center: default_location,
                searching: false,
                active_mood: None,
                results: Vec::new(),
                markers: MarkerSet::new(),
                issued: 0,
            }),
        }
    }

    pub fn places(&self) -> &P {
        &self.places
    }

    pub fn build_request(&self, mood: Mood, location: Coordinate) -> SearchRequest {
        let config = self.registry.lookup(mood);
        SearchRequest {
            location,
            radius_meters: self.settings.radius_meters,
            types: vec![config.category.to_string()],
            keyword: config.keyword.map(str::to_string),
            max_price_level: config.max_price_tier.unwrap_or(PriceLevel::MAX),
        }
    }

    pub async fn search(&self, mood: Mood) -> SearchOutcome {
        let (generation, request) = {
            let mut state = self.state.lock().await;
            state.searching = true;
            state.active_mood = Some(mood);
            state.issued += 1;
            state.clear_results();
            (state.issued, self.build_request(mood, state.tracker.current()))
        };

        tracing::info!(
            "🔎 Search #{} for {} ({}) around {}",
            generation,
            mood,
            request.types.join(","),
            request.location
        );

        let response = self.places.nearby_search(&request).await;

        let mut state = self.state.lock().await;
        if self.settings.ordering == ResponseOrdering::LatestRequest && generation != state.issued {
            tracing::debug!(
                "Dropping response for search #{} (latest is #{})",
                generation,
                state.issued
            );
            return SearchOutcome::Superseded;
        }

        state.searching = false;
        match response {
            Ok(response) if response.status.is_ok() => {
                let count = response.places.len();
                state.commit(response.places);
                tracing::info!("📍 Search #{} returned {} places", generation, count);
                SearchOutcome::Committed { count }
            }
            Ok(response) => {
                tracing::warn!(
                    "Search #{} finished with status {}",
                    generation,
                    response.status
                );
                SearchOutcome::Failed {
                    status: response.status,
                }
            }
            Err(e) => {
                tracing::warn!("Search #{} failed: {}", generation, e);
                SearchOutcome::Unreachable {
                    message: e.to_string(),
                }
            }
        }
    }

    pub async fn mount(&self, options: &MapOptions) {
        let mut state = self.state.lock().await;
        state.map.mount(options);
        state.map_center = options.center;
    }

    /// 只移動地圖，不改變搜尋原點
    pub async fn recenter(&self, center: Coordinate) {
        self.state.lock().await.recenter(center);
    }

    pub async fn current_location(&self) -> Coordinate {
        self.state.lock().await.tracker.current()
    }

    /// 只有第一次呼叫會回傳 true
    pub async fn begin_location_refresh(&self) -> bool {
        self.state.lock().await.tracker.begin_refresh()
    }

    /// 更新搜尋原點並把地圖移到新位置
    pub async fn apply_device_location(&self, position: Coordinate) {
        let mut state = self.state.lock().await;
        state.tracker.apply(position);
        state.recenter(position);
    }

    pub async fn is_searching(&self) -> bool {
        self.state.lock().await.searching
    }

    pub async fn snapshot(&self) -> ControllerSnapshot {
        let state = self.state.lock().await;
        ControllerSnapshot {
            searching: state.searching,
            active_mood: state.active_mood,
            places: state.results.clone(),
            markers: state.markers.entries().to_vec(),
            location: state.tracker.current(),
            map_center: state.map_center,
            generation: state.issued,
        }
    }

    pub async fn with_map<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        let state = self.state.lock().await;
        f(&state.map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::map::HeadlessMap;
    use crate::domain::model::{OpenStatus, SearchResponse};
    use crate::utils::error::{NearbyError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticPlaces {
        response: SearchResponse,
        calls: AtomicUsize,
    }

    impl StaticPlaces {
        fn new(response: SearchResponse) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PlacesService for StaticPlaces {
        async fn nearby_search(&self, _request: &SearchRequest) -> Result<SearchResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct SequencedPlaces {
        responses: std::sync::Mutex<std::collections::VecDeque<SearchResponse>>,
    }

    impl SequencedPlaces {
        fn new(responses: Vec<SearchResponse>) -> Self {
            Self {
                responses: std::sync::Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl PlacesService for SequencedPlaces {
        async fn nearby_search(&self, _request: &SearchRequest) -> Result<SearchResponse> {
            let next = self.responses.lock().unwrap().pop_front();
            Ok(next.unwrap_or_else(|| SearchResponse::failed(SearchStatus::UnknownError)))
        }
    }

    struct BrokenPlaces;

    #[async_trait]
    impl PlacesService for BrokenPlaces {
        async fn nearby_search(&self, _request: &SearchRequest) -> Result<SearchResponse> {
            Err(NearbyError::ApiStatusError {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingPlaces {
        requests: std::sync::Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl PlacesService for RecordingPlaces {
        async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(SearchResponse::ok(vec![]))
        }
    }

    fn place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {}", id),
            rating: None,
            address: "Somewhere".to_string(),
            open_status: OpenStatus::Open,
            location: Coordinate::new(40.7, -74.0),
        }
    }

    fn controller<P: PlacesService>(places: P) -> SearchController<P, HeadlessMap> {
        SearchController::new(
            places,
            HeadlessMap::new(),
            Coordinate::DEFAULT,
            SearchSettings::default(),
        )
    }

    #[test]
    fn test_build_request_without_price_cap_uses_max_level() {
        let controller = controller(StaticPlaces::new(SearchResponse::ok(vec![])));
        let request = controller.build_request(Mood::Work, Coordinate::DEFAULT);

        assert_eq!(request.location, Coordinate::DEFAULT);
        assert_eq!(request.radius_meters, 2000);
        assert_eq!(request.types, vec!["cafe".to_string()]);
        assert_eq!(request.keyword.as_deref(), Some("wifi quiet"));
        assert_eq!(request.max_price_level, PriceLevel::MAX);
    }

    #[test]
    fn test_build_request_for_cheap_caps_price() {
        let controller = controller(StaticPlaces::new(SearchResponse::ok(vec![])));
        let request = controller.build_request(Mood::Cheap, Coordinate::DEFAULT);

        assert_eq!(request.types, vec!["restaurant".to_string()]);
        assert_eq!(request.keyword, None);
        assert_eq!(request.max_price_level.value(), 1);
    }

    #[tokio::test]
    async fn test_successful_search_commits_places_and_markers() {
        let places = vec![place("a"), place("b"), place("c")];
        let controller = controller(StaticPlaces::new(SearchResponse::ok(places)));

        let outcome = controller.search(Mood::Date).await;

        assert_eq!(outcome, SearchOutcome::Committed { count: 3 });
        let snapshot = controller.snapshot().await;
        assert!(!snapshot.searching);
        assert_eq!(snapshot.active_mood, Some(Mood::Date));
        assert_eq!(snapshot.places.len(), 3);
        assert_eq!(snapshot.markers.len(), 3);
        assert_eq!(controller.with_map(|m| m.marker_count()).await, 3);
        assert_eq!(controller.places.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_status_leaves_everything_empty() {
        let controller = controller(SequencedPlaces::new(vec![
            SearchResponse::ok(vec![place("a"), place("b")]),
            SearchResponse::failed(SearchStatus::OverQueryLimit),
        ]));
        controller.search(Mood::Work).await;
        assert_eq!(controller.snapshot().await.places.len(), 2);

        let outcome = controller.search(Mood::Work).await;

        assert_eq!(
            outcome,
            SearchOutcome::Failed {
                status: SearchStatus::OverQueryLimit
            }
        );
        let snapshot = controller.snapshot().await;
        assert!(!snapshot.searching);
        assert!(snapshot.places.is_empty());
        assert!(snapshot.markers.is_empty());
        assert_eq!(controller.with_map(|m| m.marker_count()).await, 0);
    }

    #[tokio::test]
    async fn test_transport_error_is_absorbed() {
        let controller = controller(BrokenPlaces);

        let outcome = controller.search(Mood::Quick).await;

        assert!(matches!(outcome, SearchOutcome::Unreachable { .. }));
        let snapshot = controller.snapshot().await;
        assert!(!snapshot.searching);
        assert!(snapshot.places.is_empty());
        assert_eq!(controller.with_map(|m| m.marker_count()).await, 0);
    }

    #[tokio::test]
    async fn test_new_search_clears_previous_markers_first() {
        let controller = controller(StaticPlaces::new(SearchResponse::ok(vec![
            place("a"),
            place("b"),
        ])));

        controller.search(Mood::Work).await;
        controller.search(Mood::Work).await;

        let (live, removed) = controller
            .with_map(|m| (m.marker_count(), m.removed_count()))
            .await;
        assert_eq!(live, 2);
        assert_eq!(removed, 2);
        assert_eq!(controller.snapshot().await.generation, 2);
    }

    #[tokio::test]
    async fn test_device_location_moves_origin_and_map() {
        let controller = controller(StaticPlaces::new(SearchResponse::ok(vec![])));
        let sf = Coordinate::new(37.7749, -122.4194);

        assert!(controller.begin_location_refresh().await);
        assert!(!controller.begin_location_refresh().await);
        controller.apply_device_location(sf).await;

        assert_eq!(controller.current_location().await, sf);
        assert_eq!(controller.with_map(|m| m.center()).await, Some(sf));
        assert_eq!(controller.snapshot().await.map_center, sf);
    }

    #[tokio::test]
    async fn test_recenter_moves_map_but_not_search_origin() {
        let controller = controller(RecordingPlaces::default());
        let london = Coordinate::new(51.5074, -0.1278);

        controller.recenter(london).await;
        controller.search(Mood::Quick).await;

        assert_eq!(controller.with_map(|m| m.center()).await, Some(london));
        assert_eq!(controller.snapshot().await.map_center, london);
        assert_eq!(controller.current_location().await, Coordinate::DEFAULT);
        let requests = controller.places.requests.lock().unwrap().clone();
        assert_eq!(requests[0].location, Coordinate::DEFAULT);
    }
}
