#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameMode {
    pub id: i32,
    pub name: &'static str,
    // part of the upstream table, not shown in notifications
    #[allow(dead_code)]
    pub balanced: bool,
}

const fn mode(id: i32, name: &'static str, balanced: bool) -> GameMode {
    GameMode { id, name, balanced }
}

pub static GAME_MODES: [GameMode; 25] = [
    mode(0, "game_mode_unknown", true),
    mode(1, "game_mode_all_pick", true),
    mode(2, "game_mode_captains_mode", true),
    mode(3, "game_mode_random_draft", true),
    mode(4, "game_mode_single_draft", true),
    mode(5, "game_mode_all_random", true),
    mode(6, "game_mode_intro", false),
    mode(7, "game_mode_diretide", false),
    mode(8, "game_mode_reverse_captains_mode", false),
    mode(9, "game_mode_greeviling", false),
    mode(10, "game_mode_tutorial", false),
    mode(11, "game_mode_mid_only", false),
    mode(12, "game_mode_least_played", true),
    mode(13, "game_mode_limited_heroes", false),
    mode(14, "game_mode_compendium_matchmaking", false),
    mode(15, "game_mode_custom", false),
    mode(16, "game_mode_captains_draft", true),
    mode(17, "game_mode_balanced_draft", true),
    mode(18, "game_mode_ability_draft", false),
    mode(19, "game_mode_event", false),
    mode(20, "game_mode_all_random_death_match", false),
    mode(21, "game_mode_1v1_mid", false),
    mode(22, "game_mode_all_draft", true),
    mode(23, "game_mode_turbo", false),
    mode(24, "game_mode_mutation", false),
];

/// Internal key of a game mode code, `"Unknown"` for codes outside the table.
pub fn game_mode_label(id: i32) -> &'static str {
    GAME_MODES
        .iter()
        .find(|mode| mode.id == id)
        .map_or("Unknown", |mode| mode.name)
}
