use gobang_engine::config::Validate;
use gobang_engine::{FirstPlayerMode, GobangSessionSettings, OpponentMode};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "gobang_demo_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub games: u32,
    pub seed: Option<u64>,
    pub first_player: FirstPlayerMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: None,
            first_player: FirstPlayerMode::Random,
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > 10_000 {
            return Err("games must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl DemoConfig {
    pub fn session_settings(&self) -> GobangSessionSettings {
        GobangSessionSettings {
            first_player: self.first_player,
            opponent_mode: OpponentMode::Bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobang_engine::config::{load_yaml_config, save_yaml_config};

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("gobang_demo_config_test_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let file_path = temp_file_path();
        let config = DemoConfig::default();

        save_yaml_config(&file_path, &config).unwrap();
        let loaded = load_yaml_config::<DemoConfig>(&file_path).unwrap();

        assert_eq!(loaded, Some(config));
        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_zero_games_is_invalid() {
        let config = DemoConfig {
            games: 0,
            ..DemoConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
