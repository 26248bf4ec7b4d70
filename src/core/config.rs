use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    FSError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeError(#[from] toml::de::Error),
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub cors_hosts: Vec<String>,

    #[serde(default)]
    pub secure_session: bool,

    /// Load the demo user/project/task set at startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_hosts: vec![],
            secure_session: false,
            seed_demo_data: false,
        }
    }
}

impl Config {
    pub fn parse(path: Option<String>) -> Result<Config, ConfigError> {
        let path = path.unwrap_or("config.toml".to_string());
        let contents = fs::read_to_string(Path::new(path.as_str()))?;
        let config: Config = toml::from_str(contents.as_str())?;

        Ok(config)
    }

    pub fn is_valid(&self) -> bool {
        !self.listen_addr.is_empty()
    }
}
