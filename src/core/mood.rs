use crate::domain::model::{Mood, MoodConfig, PriceLevel};

const WORK: MoodConfig = MoodConfig {
    category: "cafe",
    keyword: Some("wifi quiet"),
    max_price_tier: None,
};

const DATE: MoodConfig = MoodConfig {
    category: "restaurant",
    keyword: Some("romantic"),
    max_price_tier: None,
};

const QUICK: MoodConfig = MoodConfig {
    category: "bakery",
    keyword: Some("fast food"),
    max_price_tier: None,
};

const CHEAP: MoodConfig = MoodConfig {
    category: "restaurant",
    keyword: None,
    max_price_tier: Some(PriceLevel::CHEAP),
};

/// 固定的心情 → 搜尋設定對照表
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodRegistry;

impl MoodRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn lookup(&self, mood: Mood) -> &'static MoodConfig {
        match mood {
            Mood::Work => &WORK,
            Mood::Date => &DATE,
            Mood::Quick => &QUICK,
            Mood::Cheap => &CHEAP,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Mood, &'static MoodConfig)> + '_ {
        Mood::ALL.into_iter().map(move |mood| (mood, self.lookup(mood)))
    }
}
