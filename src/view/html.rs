use super::icons::Icon;
use super::theme::{RATING_COLOR, STYLESHEET};
use super::{Page, PlaceCard};
use crate::domain::model::OpenStatus;
use crate::utils::error::Result;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_class(status: OpenStatus) -> &'static str {
    match status {
        OpenStatus::Open => "status-open",
        OpenStatus::Closed => "status-closed",
        OpenStatus::Unknown => "status-unknown",
    }
}

fn render_card(card: &PlaceCard) -> String {
    format!(
        r#"<div class="card" data-place-id="{id}">
  <div class="card-header">
    <h3 class="place-name">{name}</h3>
    <div class="rating" style="color: {rating_color}">{star} {rating}</div>
  </div>
  <p class="address">{pin} {address}</p>
  <div class="status-row {status_class}">{clock}<span class="label">{status}</span></div>
</div>"#,
        id = escape(&card.id),
        name = escape(&card.name),
        rating_color = RATING_COLOR,
        star = Icon::Star.glyph(),
        rating = escape(&card.rating),
        pin = Icon::MapPin.glyph(),
        address = escape(&card.address),
        status_class = status_class(card.status.status),
        clock = Icon::Clock.glyph(),
        status = escape(&card.status.label),
    )
}

impl Page {
    /// 完整的 HTML 頁面；地圖設定以 JSON 放在容器的 data 屬性上，交給前端地圖元件
    pub fn to_html(&self) -> Result<String> {
        let buttons: Vec<String> = self
            .moods
            .iter()
            .map(|button| {
                format!(
                    r#"<button class="mood-button{active}" data-mood="{mood}" data-icon="{icon_name}">{icon} <span class="label">{label}</span></button>"#,
                    active = if button.active { " active" } else { "" },
                    mood = button.mood,
                    icon_name = button.icon.name(),
                    icon = button.icon.glyph(),
                    label = escape(&button.label),
                )
            })
            .collect();

        let loading = self
            .loading
            .as_deref()
            .map(|text| format!(r#"<p class="loading">{}</p>"#, escape(text)))
            .unwrap_or_default();

        let cards: Vec<String> = self.cards.iter().map(render_card).collect();
        let map_config = serde_json::to_string(&self.map)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<div class="container">
<div class="sidebar">
<header class="header">
<h1 class="title">{title}</h1>
<p class="subtitle">{subtitle}</p>
</header>
<div class="mood-grid">
{buttons}
</div>
{loading}
<div class="results-list">
{cards}
</div>
</div>
<div id="{container_id}" class="map" data-map-config="{map_config}"></div>
</div>
</body>
</html>
"#,
            title = escape(&self.title),
            style = STYLESHEET,
            subtitle = escape(&self.subtitle),
            buttons = buttons.join("\n"),
            loading = loading,
            cards = cards.join("\n"),
            container_id = escape(&self.map.container_id),
            map_config = escape(&map_config),
        ))
    }
}
