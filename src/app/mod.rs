use crate::core::orchestrator::{SearchController, SearchOutcome, SearchSettings};
use crate::domain::model::{Coordinate, MapOptions, Mood};
use crate::domain::ports::{GeolocationSource, MapView, PlacesService};
use crate::view::{self, Page};

/// 把控制器、定位來源與地圖設定組在一起的應用程式外殼
pub struct NearbyApp<P: PlacesService, M: MapView, G: GeolocationSource> {
    controller: SearchController<P, M>,
    geolocation: G,
    map_options: MapOptions,
}

impl<P, M, G> NearbyApp<P, M, G>
where
    P: PlacesService,
    M: MapView,
    G: GeolocationSource,
{
    pub fn new(
        places: P,
        map: M,
        geolocation: G,
        map_options: MapOptions,
        settings: SearchSettings,
    ) -> Self {
        let controller = SearchController::new(places, map, map_options.center, settings);
        Self {
            controller,
            geolocation,
            map_options,
        }
    }

    pub fn controller(&self) -> &SearchController<P, M> {
        &self.controller
    }

    pub fn map_options(&self) -> &MapOptions {
        &self.map_options
    }

    /// 掛上地圖後嘗試一次裝置定位
    pub async fn start(&self) -> Option<Coordinate> {
        self.controller.mount(&self.map_options).await;
        self.locate().await
    }

    /// 一次性定位；失敗時保留預設座標，不回報錯誤
    pub async fn locate(&self) -> Option<Coordinate> {
        if !self.controller.begin_location_refresh().await {
            tracing::debug!("Device location already requested, skipping");
            return None;
        }

        match self.geolocation.current_position().await {
            Ok(Some(position)) => {
                tracing::info!("📡 Device location resolved to {}", position);
                self.controller.apply_device_location(position).await;
                Some(position)
            }
            Ok(None) => {
                tracing::debug!("Device location unavailable, keeping default origin");
                None
            }
            Err(e) => {
                tracing::warn!("Device location lookup failed: {}", e);
                None
            }
        }
    }

    pub async fn select_mood(&self, mood: Mood) -> SearchOutcome {
        self.controller.search(mood).await
    }

    pub async fn page(&self) -> Page {
        let snapshot = self.controller.snapshot().await;
        view::render(&snapshot, &self.map_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geolocation::{FixedPosition, IpGeolocation, Unavailable};
    use crate::adapters::map::HeadlessMap;
    use crate::domain::model::{SearchRequest, SearchResponse};
    use crate::utils::error::{NearbyError, Result};
    use crate::view::theme;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingPlaces {
        requests: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl PlacesService for RecordingPlaces {
        async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(SearchResponse::ok(vec![]))
        }
    }

    struct CountingGeolocation {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl GeolocationSource for CountingGeolocation {
        async fn current_position(&self) -> Result<Option<Coordinate>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(NearbyError::GeolocationError {
                    message: "permission denied".to_string(),
                });
            }
            Ok(Some(Coordinate::new(48.8566, 2.3522)))
        }
    }

    fn options() -> MapOptions {
        theme::map_options(Coordinate::DEFAULT, theme::DEFAULT_ZOOM, "map")
    }

    #[tokio::test]
    async fn test_search_uses_resolved_device_location() {
        let sf = Coordinate::new(37.7749, -122.4194);
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            FixedPosition(sf),
            options(),
            SearchSettings::default(),
        );

        assert_eq!(app.start().await, Some(sf));
        app.select_mood(Mood::Cheap).await;

        let controller = app.controller();
        let requests = controller.places().requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].location, sf);
        assert_eq!(requests[0].types, vec!["restaurant".to_string()]);
        assert_eq!(controller.with_map(|m| m.center()).await, Some(sf));
        assert!(controller.with_map(|m| m.is_mounted()).await);
    }

    #[tokio::test]
    async fn test_unavailable_geolocation_keeps_default() {
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            Unavailable,
            options(),
            SearchSettings::default(),
        );

        assert_eq!(app.start().await, None);
        assert_eq!(app.controller().current_location().await, Coordinate::DEFAULT);
    }

    #[tokio::test]
    async fn test_stalled_ip_lookup_does_not_block_start() {
        let server = httpmock::MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/json");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(serde_json::json!({ "lat": 37.7749, "lon": -122.4194 }));
        });

        let geolocation =
            IpGeolocation::with_timeout(server.url("/json"), Duration::from_millis(200)).unwrap();
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            geolocation,
            options(),
            SearchSettings::default(),
        );

        let located = tokio::time::timeout(Duration::from_secs(3), app.start())
            .await
            .expect("start should not wait on a stalled lookup");

        assert_eq!(located, None);
        assert_eq!(app.controller().current_location().await, Coordinate::DEFAULT);

        app.select_mood(Mood::Work).await;
        let requests = app.controller().places().requests.lock().unwrap().clone();
        assert_eq!(requests[0].location, Coordinate::DEFAULT);
    }

    #[tokio::test]
    async fn test_geolocation_errors_are_swallowed_and_not_retried() {
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            CountingGeolocation {
                calls: AtomicUsize::new(0),
                fail: true,
            },
            options(),
            SearchSettings::default(),
        );

        assert_eq!(app.start().await, None);
        assert_eq!(app.locate().await, None);
        assert_eq!(app.geolocation.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.controller().current_location().await, Coordinate::DEFAULT);
    }

    #[tokio::test]
    async fn test_second_locate_is_a_no_op() {
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            CountingGeolocation {
                calls: AtomicUsize::new(0),
                fail: false,
            },
            options(),
            SearchSettings::default(),
        );

        assert!(app.start().await.is_some());
        assert_eq!(app.locate().await, None);
        assert_eq!(app.geolocation.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_page_reflects_controller_state() {
        let app = NearbyApp::new(
            RecordingPlaces::default(),
            HeadlessMap::new(),
            Unavailable,
            options(),
            SearchSettings::default(),
        );
        app.start().await;
        app.select_mood(Mood::Date).await;

        let page = app.page().await;
        assert_eq!(page.title, "Smart Nearby");
        assert!(page.loading.is_none());
        assert!(page.cards.is_empty());
        assert!(page.moods.iter().any(|b| b.mood == Mood::Date && b.active));
    }
}
