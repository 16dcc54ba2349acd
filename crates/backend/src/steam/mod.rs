use std::time::Duration;

use portfolio_shared::models::RecentGame;
use serde::Deserialize;

use crate::config::SteamConfig;

const RECENT_GAMES_COUNT: &str = "6";
const STEAM_CDN: &str = "https://steamcdn-a.akamaihd.net";

#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("Missing Steam ID or API key")]
    MissingCredentials,
    #[error("Steam API error: {0}")]
    Status(u16),
    #[error("Steam request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// Upstream wire format

#[derive(Deserialize, Default)]
struct RecentlyPlayedResponse {
    #[serde(default)]
    response: RecentlyPlayedBody,
}

#[derive(Deserialize, Default)]
struct RecentlyPlayedBody {
    games: Option<Vec<RawGame>>,
}

#[derive(Deserialize)]
struct RawGame {
    appid: u32,
    #[serde(default)]
    name: String,
    playtime_2weeks: Option<u32>,
    #[serde(default)]
    playtime_forever: u32,
    #[serde(default)]
    img_icon_url: String,
}

impl From<RawGame> for RecentGame {
    fn from(g: RawGame) -> Self {
        let icon_url = (!g.img_icon_url.is_empty()).then(|| {
            format!(
                "{}/steamcommunity/public/images/apps/{}/{}.jpg",
                STEAM_CDN, g.appid, g.img_icon_url
            )
        });
        RecentGame {
            appid: g.appid,
            name: g.name,
            playtime_recent: g.playtime_2weeks,
            playtime_total: g.playtime_forever,
            header_image: header_image(g.appid),
            icon_url,
        }
    }
}

pub fn header_image(appid: u32) -> String {
    format!("{}/steam/apps/{}/header.jpg", STEAM_CDN, appid)
}

/// Server-side proxy for the Steam Web API, so the key never reaches the browser.
pub struct SteamClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl SteamClient {
    pub fn new(config: &SteamConfig) -> Result<Self, SteamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(SteamClient {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Up to six games the account played in the last two weeks.
    pub async fn recent_games(&self, steam_id: &str) -> Result<Vec<RecentGame>, SteamError> {
        let steam_id = steam_id.trim();
        let key = match self.api_key.as_deref() {
            Some(key) if !steam_id.is_empty() => key,
            _ => return Err(SteamError::MissingCredentials),
        };

        let url = format!(
            "{}/IPlayerService/GetRecentlyPlayedGames/v0001/",
            self.base_url
        );
        tracing::debug!(steam_id, "Fetching recently played games");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key", key),
                ("steamid", steam_id),
                ("format", "json"),
                ("count", RECENT_GAMES_COUNT),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SteamError::Status(status.as_u16()));
        }

        let body: RecentlyPlayedResponse = resp.json().await?;
        Ok(body
            .response
            .games
            .unwrap_or_default()
            .into_iter()
            .map(RecentGame::from)
            .collect())
    }
}
