use crate::domain::model::Mood;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Coffee,
    Heart,
    Zap,
    DollarSign,
    Star,
    MapPin,
    Clock,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Coffee => "coffee",
            Icon::Heart => "heart",
            Icon::Zap => "zap",
            Icon::DollarSign => "dollar-sign",
            Icon::Star => "star",
            Icon::MapPin => "map-pin",
            Icon::Clock => "clock",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Coffee => "☕",
            Icon::Heart => "♥",
            Icon::Zap => "⚡",
            Icon::DollarSign => "$",
            Icon::Star => "★",
            Icon::MapPin => "📍",
            Icon::Clock => "🕒",
        }
    }
}

pub fn mood_icon(mood: Mood) -> Icon {
    match mood {
        Mood::Work => Icon::Coffee,
        Mood::Date => Icon::Heart,
        Mood::Quick => Icon::Zap,
        Mood::Cheap => Icon::DollarSign,
    }
}
