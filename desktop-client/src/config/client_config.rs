use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_config.yaml";

type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(&get_config_path())
}

pub fn config_manager_for(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub bot_move_delay_ms: u64,
    pub default_mode: GameMode,
    pub window_width: f32,
    pub window_height: f32,
    #[serde(default)]
    pub bot_seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > 10_000 {
            return Err("bot_move_delay_ms must be at most 10000".to_string());
        }
        if self.window_width < 320.0 || self.window_height < 240.0 {
            return Err("window size must be at least 320x240".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bot_move_delay_ms: 500,
            default_mode: GameMode::HumanVsBot,
            window_width: 640.0,
            window_height: 480.0,
            bot_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigManager;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tic_tac_toe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let path = get_temp_file_path();
        let written = ClientConfig {
            bot_move_delay_ms: 250,
            default_mode: GameMode::HumanVsHuman,
            window_width: 800.0,
            window_height: 600.0,
            bot_seed: Some(12345),
        };

        let manager: ConfigManager<_, ClientConfig, _> = ConfigManager::from_yaml_file(&path);
        manager.set_config(&written).unwrap();

        let reread: ConfigManager<_, ClientConfig, _> = ConfigManager::from_yaml_file(&path);
        assert_eq!(reread.get_config().unwrap(), written);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClientConfig {
            bot_move_delay_ms: 60_000,
            ..ClientConfig::default()
        };

        let manager: ConfigManager<_, ClientConfig, _> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }
}
