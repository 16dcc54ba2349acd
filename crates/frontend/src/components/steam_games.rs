use dioxus::logger::tracing;
use dioxus::prelude::*;
use portfolio_shared::models::{format_playtime, RecentGame};

use crate::api;

pub const STEAM_ID: &str = "76561198088720071";

const GAME_PLACEHOLDER: &str = "/static/images/placeholder.svg";

const SAMPLE_NOTE: &str = "Using sample data";

fn header_image(appid: u32) -> String {
    format!("https://steamcdn-a.akamaihd.net/steam/apps/{}/header.jpg", appid)
}

/// Shown when the games proxy is unavailable.
pub fn sample_games() -> Vec<RecentGame> {
    [
        (730, "Counter-Strike 2", 120, 2400),
        (570, "Dota 2", 80, 1800),
        (271590, "Grand Theft Auto V", 45, 600),
        (1086940, "Baldur's Gate 3", 200, 1200),
        (1174180, "Red Dead Redemption 2", 60, 800),
        (1245620, "ELDEN RING", 150, 900),
    ]
    .into_iter()
    .map(|(appid, name, recent, total)| RecentGame {
        appid,
        name: name.to_string(),
        playtime_recent: Some(recent),
        playtime_total: total,
        header_image: header_image(appid),
        icon_url: None,
    })
    .collect()
}

/// Games to show plus an optional note. Any failure falls back to the sample list.
pub fn games_or_sample(result: Result<Vec<RecentGame>, String>) -> (Vec<RecentGame>, Option<String>) {
    match result {
        Ok(games) => (games, None),
        Err(e) => {
            tracing::warn!("recent games unavailable: {}", e);
            (sample_games(), Some(SAMPLE_NOTE.to_string()))
        }
    }
}

#[component]
pub fn SteamGames() -> Element {
    let games_resource = use_resource(|| api::fetch_recent_games(STEAM_ID));

    let body = match &*games_resource.read() {
        None => rsx! {
            div { class: "games-loading",
                div { class: "spinner" }
                span { "Loading recent games..." }
            }
        },
        Some(result) => {
            let (games, note) = games_or_sample(result.clone());
            rsx! {
                if let Some(note) = note {
                    p { class: "games-note", "{note} - Showing sample data" }
                }
                if games.is_empty() {
                    div { class: "games-empty",
                        p { "No recent games found" }
                    }
                } else {
                    div { class: "games-grid",
                        for game in games {
                            GameCard { key: "{game.appid}", game }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "steam-games",
            div { class: "games-header",
                h2 { "Recently Played Games" }
                p { class: "games-intro",
                    "Video games may not belong on a bookshelf, but they are still one of my favourite "
                    "narrative vehicles. I listen to their soundtracks while I work, play them to relax, "
                    "and borrow mechanics I love for stories of my own."
                }
            }
            {body}
        }
    }
}

#[component]
fn GameCard(game: RecentGame) -> Element {
    let mut hovered = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    let image = if image_failed() {
        GAME_PLACEHOLDER.to_string()
    } else {
        game.header_image.clone()
    };
    let total = format_playtime(game.playtime_total);
    let recent = game.playtime_recent.map(format_playtime);

    rsx! {
        div {
            class: "game-card",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            div { class: "game-image",
                img {
                    src: "{image}",
                    alt: "{game.name}",
                    onerror: move |_| image_failed.set(true),
                }
            }
            div { class: "game-info",
                h3 { "{game.name}" }
                div { class: "game-playtime",
                    span { "{total} total" }
                    if let Some(recent) = recent.clone() {
                        span { "{recent} recent" }
                    }
                }
            }

            if hovered() {
                div { class: "game-hover",
                    h3 { "{game.name}" }
                    p { span { class: "accent", "Total: " } "{total}" }
                    if let Some(recent) = recent {
                        p { span { class: "accent", "Last 2 weeks: " } "{recent}" }
                    }
                }
            }
        }
    }
}
