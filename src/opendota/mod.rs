use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::{Transport, TransportError};

pub mod model;

pub use model::{find_hero, find_hero_image, Hero, HeroStat, MatchDetails, Profile, RecentMatch};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to retrive {0} from web API: {1}")]
    Transport(String, #[source] TransportError),
    #[error("Failed to decode response of {0}: {1}")]
    DecodeError(String, serde_json::Error, String),
    #[error("No recent matches for account {0}")]
    EmptyHistory(String),
    #[error("Hero {0} not found in hero list")]
    HeroNotFound(u16),
    #[error("Hero {0} not found in hero stats")]
    HeroImageNotFound(u16),
}

/// Read-only access to the opendota endpoints.
pub struct OpenDota<'t, T> {
    transport: &'t T,
    base: String,
    key: Option<String>,
}

impl<'t, T: Transport> OpenDota<'t, T> {
    pub fn new(transport: &'t T, base: &str, key: Option<&str>) -> Self {
        let base = base.trim_end_matches('/').to_string();
        let key = key.map(str::to_string);
        Self {
            transport,
            base,
            key,
        }
    }

    fn url(&self, path: &str) -> String {
        match &self.key {
            Some(key) => format!("{}/{}?api_key={}", self.base, path, key),
            None => format!("{}/{}", self.base, path),
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R, FetchError> {
        // shown in logs and errors instead of the real url, which may hold the key
        let shown = format!("{}/{}", self.base, path);
        log::debug!("GET {}", shown);
        let content = match self.transport.get(&self.url(path)).await {
            Ok(content) => content,
            Err(err) => return Err(FetchError::Transport(shown, err)),
        };
        serde_json::from_slice(&content).map_err(|err| {
            let content = String::from_utf8_lossy(&content).into_owned();
            FetchError::DecodeError(shown, err, content)
        })
    }

    pub async fn recent_matches(&self, account_id: &str) -> Result<Vec<RecentMatch>, FetchError> {
        self.fetch(&format!("players/{}/recentMatches", account_id)).await
    }

    pub async fn match_details(&self, match_id: u64) -> Result<MatchDetails, FetchError> {
        self.fetch(&format!("matches/{}", match_id)).await
    }

    pub async fn profile(&self, account_id: &str) -> Result<Profile, FetchError> {
        self.fetch::<model::Player>(&format!("players/{}", account_id))
            .await
            .map(|player| player.profile)
    }

    pub async fn heroes(&self) -> Result<Vec<Hero>, FetchError> {
        self.fetch("heroes").await
    }

    pub async fn hero_stats(&self) -> Result<Vec<HeroStat>, FetchError> {
        self.fetch("heroStats").await
    }
}
