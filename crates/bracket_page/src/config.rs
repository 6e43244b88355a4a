use serde::Deserialize;

/// Element ids and sizes the page is built around. Every field has a default, so a TOML file
/// only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub player_rows_id: String,
    pub add_player_button_id: String,
    pub reset_players_button_id: String,
    pub generate_bracket_button_id: String,
    /// Rows present after a reset.
    pub default_player_count: u32,
    pub max_name_length: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            player_rows_id: "player-rows".to_string(),
            add_player_button_id: "btn-add-player".to_string(),
            reset_players_button_id: "btn-reset-players".to_string(),
            generate_bracket_button_id: "btn-generate-bracket".to_string(),
            default_player_count: 4,
            max_name_length: 20,
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
