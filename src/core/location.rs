use crate::domain::model::Coordinate;

/// 目前的搜尋原點。裝置定位在整個生命週期內只嘗試一次
#[derive(Debug, Clone)]
pub struct LocationTracker {
    current: Coordinate,
    refresh_attempted: bool,
}

impl LocationTracker {
    pub fn new(default: Coordinate) -> Self {
        Self {
            current: default,
            refresh_attempted: false,
        }
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    /// 第一次呼叫回傳 true，之後永遠回傳 false
    pub fn begin_refresh(&mut self) -> bool {
        !std::mem::replace(&mut self.refresh_attempted, true)
    }

    pub fn apply(&mut self, position: Coordinate) {
        self.current = position;
    }

    pub fn refresh_attempted(&self) -> bool {
        self.refresh_attempted
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new(Coordinate::DEFAULT)
    }
}
