// response definitions of the opendota endpoints we read
// unknown fields are ignored, opendota adds new ones every patch

use serde::{Deserialize, Serialize};

mod lenient {
    use serde::de::{Deserialize, Deserializer};

    // missing or null both become the default value
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

// match_id, player_slot, radiant_win and start_time drive detection and
// stay required, the display-only counters tolerate gaps
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecentMatch {
    pub match_id: u64,
    pub player_slot: i32,
    pub radiant_win: bool,
    pub duration: u64,
    pub game_mode: i32,
    pub hero_id: u16,
    pub start_time: i64,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub kills: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub deaths: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub assists: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub xp_per_min: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub gold_per_min: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub hero_damage: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tower_damage: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub hero_healing: u32,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub last_hits: u32,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchDetails {
    pub match_id: u64,
    pub radiant_score: u32,
    pub dire_score: u32,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub account_id: u64,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Hero {
    pub id: u16,
    pub name: String,
    pub localized_name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroStat {
    pub id: u16,
    pub img: String,
}

pub fn find_hero(heroes: &[Hero], hero_id: u16) -> Option<&Hero> {
    heroes.iter().find(|hero| hero.id == hero_id)
}

pub fn find_hero_image(stats: &[HeroStat], hero_id: u16) -> Option<&str> {
    stats
        .iter()
        .find(|stat| stat.id == hero_id)
        .map(|stat| stat.img.as_str())
}
