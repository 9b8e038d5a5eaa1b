use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tic_tac_toe_client_config.yaml";

pub const MIN_CELL_SIZE: f32 = 40.0;
pub const MAX_CELL_SIZE: f32 = 300.0;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub cell_size: f32,
    pub window_title: String,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(format!(
                "cell_size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, self.cell_size
            ));
        }
        if self.window_title.trim().is_empty() {
            return Err("window_title must not be empty".to_string());
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.is_empty()
        {
            return Err("log_prefix must not be empty if provided".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            window_title: "Tic Tac Toe".to_string(),
            log_prefix: None,
        }
    }
}
