use chrono_tz::Tz;
use serde::Serialize;

use crate::{
    aggregator::Enrichment,
    dota2::{game_mode_label, title_case, Side},
    opendota::RecentMatch,
    time::{format_duration, format_timestamp, format_timestamp_long},
};

pub const WIN_COLOR: u32 = 0x00ff00;
pub const LOSS_COLOR: u32 = 0xff0000;
pub const DEFAULT_NAME: &str = "Hingle McCringleberry";
pub const DEFAULT_AVATAR: &str =
    "https://pbs.twimg.com/profile_images/1456045731018588162/9XVAIpwZ_400x400.jpg";

const OPENDOTA_WEB: &str = "https://www.opendota.com";
const STEAM_CDN: &str = "https://cdn.cloudflare.steamstatic.com";

// discord webhook payload

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: u32,
    pub thumbnail: Thumbnail,
    pub footer: Footer,
    pub author: Author,
    pub fields: Vec<Field>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub own_score: u32,
    pub opponent_score: u32,
}

impl Outcome {
    pub fn new(mat: &RecentMatch, radiant_score: u32, dire_score: u32) -> Self {
        let side = Side::from(mat.player_slot);
        let won = side.won(mat.radiant_win);
        let (own_score, opponent_score) = match side {
            Side::Radiant => (radiant_score, dire_score),
            Side::Dire => (dire_score, radiant_score),
        };
        Self {
            won,
            own_score,
            opponent_score,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.won {
            "Win"
        } else {
            "Loss"
        }
    }

    pub fn color(&self) -> u32 {
        if self.won {
            WIN_COLOR
        } else {
            LOSS_COLOR
        }
    }

    pub fn scoreboard(&self) -> String {
        format!("{} - {}", self.own_score, self.opponent_score)
    }
}

/// Renders one finished match as a webhook message. Pure, no I/O.
pub fn build(username: &str, mat: &RecentMatch, data: &Enrichment, zone: Tz) -> Webhook {
    let outcome = Outcome::new(mat, data.details.radiant_score, data.details.dire_score);
    let name = data.profile.personaname.as_deref().unwrap_or(DEFAULT_NAME);
    let avatar = data.profile.avatar.as_deref().unwrap_or(DEFAULT_AVATAR);
    let game_mode = title_case(game_mode_label(mat.game_mode));

    let stats = format!(
        "Hero: {}\nK/D/A: {}/{}/{}\nXPM: {}\nGPM: {}\nGame Mode: {}",
        data.hero.localized_name,
        mat.kills,
        mat.deaths,
        mat.assists,
        mat.xp_per_min,
        mat.gold_per_min,
        game_mode
    );
    let performance = format!(
        "HD: {}\nTD: {}\nHH: {}\nLast hits: {}",
        mat.hero_damage, mat.tower_damage, mat.hero_healing, mat.last_hits
    );
    let timing = format!(
        "Duration: {}\nStart: {}",
        format_duration(mat.duration),
        format_timestamp(mat.start_time, zone)
    );

    let embed = Embed {
        title: format!("Match #{}", mat.match_id),
        description: format!("**{}** - __**{}**__", outcome.label(), outcome.scoreboard()),
        url: format!("{}/matches/{}", OPENDOTA_WEB, mat.match_id),
        color: outcome.color(),
        thumbnail: Thumbnail {
            url: format!("{}{}", STEAM_CDN, data.hero_img),
        },
        footer: Footer {
            text: format_timestamp_long(mat.start_time, zone),
        },
        author: Author {
            name: name.to_string(),
            url: format!("{}/players/{}", OPENDOTA_WEB, data.profile.account_id),
            icon_url: avatar.to_string(),
        },
        fields: vec![
            Field {
                name: "Stats".to_string(),
                value: stats,
                inline: true,
            },
            Field {
                name: "Performance".to_string(),
                value: performance,
                inline: true,
            },
            Field {
                name: "Match Details".to_string(),
                value: timing,
                inline: false,
            },
        ],
    };

    Webhook {
        username: username.to_string(),
        embeds: vec![embed],
    }
}
