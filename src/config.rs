use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    /// Catalog item names granted when a profile is created.
    pub starter_items: Vec<String>,
    /// Deadline for destructive-action confirmation prompts.
    pub confirm_timeout_secs: i64,
    pub daily_cooldown_secs: i64,
    pub coinflip_cooldown_secs: i64,
    pub equip_cooldown_secs: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let starter_items = env_map
            .get("STARTER_ITEMS")
            .map(|s| {
                s.split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let confirm_timeout_secs = parse_secs(&env_map, "CONFIRM_TIMEOUT_SECS", 15)?;
        let daily_cooldown_secs = parse_secs(&env_map, "DAILY_COOLDOWN_SECS", 5)?;
        let coinflip_cooldown_secs = parse_secs(&env_map, "COINFLIP_COOLDOWN_SECS", 3)?;
        let equip_cooldown_secs = parse_secs(&env_map, "EQUIP_COOLDOWN_SECS", 2)?;

        Ok(Config {
            port,
            database_path,
            starter_items,
            confirm_timeout_secs,
            daily_cooldown_secs,
            coinflip_cooldown_secs,
            equip_cooldown_secs,
        })
    }
}

fn parse_secs(
    env_map: &HashMap<String, String>,
    key: &str,
    default: i64,
) -> Result<i64, ConfigError> {
    let Some(raw) = env_map.get(key) else {
        return Ok(default);
    };
    let secs = raw.parse::<i64>().map_err(|_| {
        ConfigError::InvalidValue(key.to_string(), "must be a valid i64".to_string())
    })?;
    if secs <= 0 {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "must be positive".to_string(),
        ));
    }
    Ok(secs)
}
