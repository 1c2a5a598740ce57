use crate::{
    client::Transport,
    opendota::{
        find_hero, find_hero_image, FetchError, Hero, MatchDetails, OpenDota, Profile, RecentMatch,
    },
};

/// Everything besides the match summary that goes into one notification.
/// Values are kept exactly as the API returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub details: MatchDetails,
    pub profile: Profile,
    pub hero: Hero,
    pub hero_img: String,
}

pub struct Aggregator<'t, T> {
    api: OpenDota<'t, T>,
    account_id: String,
}

impl<'t, T: Transport> Aggregator<'t, T> {
    pub fn new(api: OpenDota<'t, T>, account_id: &str) -> Self {
        let account_id = account_id.to_string();
        Self { api, account_id }
    }

    /// Recent match history of the watched account, never empty.
    pub async fn recent_matches(&self) -> Result<Vec<RecentMatch>, FetchError> {
        let matches = self.api.recent_matches(&self.account_id).await?;
        if matches.is_empty() {
            return Err(FetchError::EmptyHistory(self.account_id.clone()));
        }
        Ok(matches)
    }

    /// Fetches score, profile and hero data for `mat` one after another.
    /// The first failure aborts the whole enrichment.
    pub async fn enrich(&self, mat: &RecentMatch) -> Result<Enrichment, FetchError> {
        let details = self.api.match_details(mat.match_id).await?;
        let profile = self.api.profile(&self.account_id).await?;

        let heroes = self.api.heroes().await?;
        let hero = find_hero(&heroes, mat.hero_id)
            .cloned()
            .ok_or(FetchError::HeroNotFound(mat.hero_id))?;

        let stats = self.api.hero_stats().await?;
        let hero_img = find_hero_image(&stats, mat.hero_id)
            .map(str::to_string)
            .ok_or(FetchError::HeroImageNotFound(mat.hero_id))?;

        Ok(Enrichment {
            details,
            profile,
            hero,
            hero_img,
        })
    }
}

#[cfg(test)]
pub mod fixtures {
    use crate::client::fake::FakeTransport;

    pub const BASE: &str = "https://od.test/api";
    pub const ACCOUNT: &str = "39734272";

    pub fn url(path: &str) -> String {
        format!("{}/{}", BASE, path)
    }

    pub fn recent_matches(entries: &[(u64, i64)]) -> String {
        let items: Vec<String> = entries
            .iter()
            .map(|(match_id, start_time)| {
                format!(
                    r#"{{"match_id": {}, "player_slot": 0, "radiant_win": true,
                        "duration": 3661, "game_mode": 22, "lobby_type": 7, "hero_id": 14,
                        "start_time": {}, "kills": 10, "deaths": 2, "assists": 15,
                        "xp_per_min": 700, "gold_per_min": 550, "hero_damage": 30123,
                        "tower_damage": 4200, "hero_healing": 800, "last_hits": 210}}"#,
                    match_id, start_time
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    pub fn details(match_id: u64) -> String {
        format!(
            r#"{{"match_id": {}, "radiant_score": 41, "dire_score": 23, "players": []}}"#,
            match_id
        )
    }

    pub const PROFILE: &str = r#"{
        "profile": {"account_id": 39734272, "personaname": "Hingle",
                    "avatar": "https://avatars.test/hingle.jpg", "plus": true},
        "rank_tier": 55
    }"#;

    pub const HEROES: &str = r#"[
        {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage",
         "primary_attr": "agi", "attack_type": "Melee", "roles": ["Carry"]},
        {"id": 14, "name": "npc_dota_hero_pudge", "localized_name": "Pudge",
         "primary_attr": "str", "attack_type": "Melee", "roles": ["Disabler"]}
    ]"#;

    pub const HERO_STATS: &str = r#"[
        {"id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage",
         "img": "/apps/dota2/images/dota_react/heroes/antimage.png?"},
        {"id": 14, "name": "npc_dota_hero_pudge", "localized_name": "Pudge",
         "img": "/apps/dota2/images/dota_react/heroes/pudge.png?"}
    ]"#;

    /// Transport serving a complete and consistent set of responses for
    /// the given recent match list.
    pub fn transport(entries: &[(u64, i64)]) -> FakeTransport {
        let transport = FakeTransport::default()
            .with(
                &url(&format!("players/{}/recentMatches", ACCOUNT)),
                &recent_matches(entries),
            )
            .with(&url(&format!("players/{}", ACCOUNT)), PROFILE)
            .with(&url("heroes"), HEROES)
            .with(&url("heroStats"), HERO_STATS);
        for (match_id, _) in entries {
            transport.set(&url(&format!("matches/{}", match_id)), &details(*match_id));
        }
        transport
    }
}
