use super::icons::Icon;
use super::Page;

impl Page {
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            self.title.clone(),
            self.subtitle.clone(),
            String::new(),
        ];

        let buttons: Vec<String> = self
            .moods
            .iter()
            .map(|button| {
                let label = format!("{} {}", button.icon.glyph(), button.label);
                if button.active {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect();
        lines.push(buttons.join("  "));
        lines.push(String::new());

        if let Some(loading) = &self.loading {
            lines.push(loading.clone());
        }

        for card in &self.cards {
            lines.push(format!(
                "{}  {} {}",
                card.name,
                Icon::Star.glyph(),
                card.rating
            ));
            lines.push(format!("  {} {}", Icon::MapPin.glyph(), card.address));
            lines.push(format!("  {} {}", Icon::Clock.glyph(), card.status.label));
        }

        lines.push(String::new());
        lines.push(format!(
            "Map: {} (zoom {}), {} markers",
            self.map.center,
            self.map.zoom,
            self.map.pins.len()
        ));

        lines.join("\n")
    }
}
