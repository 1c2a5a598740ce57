use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

pub mod game_mode;

pub use game_mode::game_mode_label;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Side {
    Radiant,
    Dire,
}

impl From<i32> for Side {
    fn from(player_slot: i32) -> Self {
        // slots 0..=127 are radiant, the high bit marks dire
        if (0..=127).contains(&player_slot) {
            Self::Radiant
        } else {
            Self::Dire
        }
    }
}

impl Side {
    pub fn won(self, radiant_win: bool) -> bool {
        match self {
            Side::Radiant => radiant_win,
            Side::Dire => !radiant_win,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Radiant => "Radiant",
            Side::Dire => "Dire",
        };
        f.write_str(name)
    }
}

lazy_static! {
    static ref GAME_MODE_KEY: Regex = Regex::new(r"^game_mode_(\w+)$").unwrap();
    static ref WORD_START: Regex = Regex::new(r"\b\w").unwrap();
}

/// Turns an internal key such as `game_mode_all_pick` into `All Pick`.
/// Anything not shaped like a game mode key becomes `Unknown`.
pub fn title_case(key: &str) -> String {
    let Some(name) = GAME_MODE_KEY.captures(key).and_then(|c| c.get(1)) else {
        return "Unknown".to_string();
    };
    let spaced = name.as_str().replace('_', " ");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_from_slot() {
        assert_eq!(Side::from(0), Side::Radiant);
        assert_eq!(Side::from(4), Side::Radiant);
        assert_eq!(Side::from(127), Side::Radiant);
        assert_eq!(Side::from(128), Side::Dire);
        assert_eq!(Side::from(130), Side::Dire);
        assert_eq!(Side::from(-1), Side::Dire);
    }

    #[test]
    fn outcome_from_slot() {
        assert!(Side::from(0).won(true));
        assert!(!Side::from(130).won(true));
        assert!(Side::from(130).won(false));
        assert!(!Side::from(0).won(false));
    }

    #[test]
    fn title_case_game_modes() {
        assert_eq!(title_case("game_mode_all_pick"), "All Pick");
        assert_eq!(title_case("game_mode_turbo"), "Turbo");
        assert_eq!(
            title_case("game_mode_all_random_death_match"),
            "All Random Death Match"
        );
        assert_eq!(title_case("game_mode_1v1_mid"), "1v1 Mid");
    }

    #[test]
    fn title_case_rejects_other_keys() {
        assert_eq!(title_case("Unknown"), "Unknown");
        assert_eq!(title_case("all_pick"), "Unknown");
        assert_eq!(title_case("game_mode_"), "Unknown");
        assert_eq!(title_case("game_mode_all pick"), "Unknown");
    }
}
