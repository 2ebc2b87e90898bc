use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE: &str = "snake_eater_config.yaml";

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or(Path::new(CONFIG_FILE)))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub display: DisplayConfig,
    pub assets: AssetsConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.assets.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub tile_size: u32,
    pub recolor_on_feed: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.tile_size < 8 {
            return Err("tile_size must be at least 8".to_string());
        }
        if self.tile_size > 64 {
            return Err("tile_size must not exceed 64".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AssetsConfig {
    pub food_image: String,
    pub head_image: String,
}

impl Validate for AssetsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.food_image.is_empty() {
            return Err("food_image must not be empty".to_string());
        }
        if self.head_image.is_empty() {
            return Err("head_image must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub verbose: bool,
    pub event_log_capacity: usize,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.event_log_capacity == 0 {
            return Err("event_log_capacity must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                tile_size: 25,
                recolor_on_feed: true,
            },
            assets: AssetsConfig {
                food_image: "banana.png".to_string(),
                head_image: "lips.jpg".to_string(),
            },
            log: LogConfig {
                verbose: false,
                event_log_capacity: 20,
            },
        }
    }
}
