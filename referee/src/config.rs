use checkers::Weights;
use serde::Deserialize;
use std::{collections::HashMap, error::Error, path::PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Relative to the config file.
    pub log: PathBuf,
    pub num_threads: usize,
    pub player: HashMap<String, PlayerConfig>,
    pub r#match: Vec<MatchConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    #[serde(default)]
    pub weights: Weights,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    pub players: [String; 2],
    pub num_games: usize,
    pub max_plies: usize,
}

impl Config {
    /// Parses the config and checks that every match names known players.
    pub fn from_toml(text: &str) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(text)?;
        for match_config in &config.r#match {
            for player_name in &match_config.players {
                if !config.player.contains_key(player_name) {
                    return Err(format!("Player {player_name} not found").into());
                }
            }
        }
        Ok(config)
    }

    pub fn weights(&self, match_config: &MatchConfig) -> [Weights; 2] {
        match_config
            .players
            .each_ref()
            .map(|name| self.player[name].weights)
    }
}
