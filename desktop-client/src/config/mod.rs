mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{AssetsConfig, Config, get_config_manager};
