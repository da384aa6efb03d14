use crate::error::AppError;
use std::env;
use std::str::FromStr;

pub const DEFAULT_DDRAGON_URL: &str = "http://ddragon.leagueoflegends.com/";
pub const DEFAULT_QUEUES_URL: &str = "https://static.developer.riotgames.com/docs/lol/queues.json";
pub const DEFAULT_RIOT_HOST: &str = "api.riotgames.com";
pub const DEFAULT_FALLBACK_VERSION: &str = "13.3.1";

/// How queue descriptions from the static catalog are shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueNameMode {
    /// Drop the last character whatever it is ("5v5 Ranked Solo games" -> "5v5 Ranked Solo game").
    #[default]
    Literal,
    /// Drop a trailing `s` only when there is one.
    Singular,
}

impl FromStr for QueueNameMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(QueueNameMode::Literal),
            "singular" => Ok(QueueNameMode::Singular),
            other => Err(AppError::ConfigError(format!(
                "unknown queue name mode '{}' (expected literal or singular)",
                other
            ))),
        }
    }
}

/// How a platform region is mapped onto a match-v5 routing cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingMode {
    /// Every region routes to `europe`, matching the old bot's broken conditional.
    Legacy,
    /// Regions are grouped into europe / asia / americas / sea.
    #[default]
    Mapped,
}

impl FromStr for RoutingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(RoutingMode::Legacy),
            "mapped" => Ok(RoutingMode::Mapped),
            other => Err(AppError::ConfigError(format!(
                "unknown routing mode '{}' (expected legacy or mapped)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub ddragon_url: String,
    pub queues_url: String,
    pub riot_host: String,
    pub fallback_version: String,
    pub queue_names: QueueNameMode,
    pub routing: RoutingMode,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            ddragon_url: DEFAULT_DDRAGON_URL.to_string(),
            queues_url: DEFAULT_QUEUES_URL.to_string(),
            riot_host: DEFAULT_RIOT_HOST.to_string(),
            fallback_version: DEFAULT_FALLBACK_VERSION.to_string(),
            queue_names: QueueNameMode::default(),
            routing: RoutingMode::default(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_KEY").map_err(|_| {
            AppError::ConfigError("RIOT_KEY not found in environment or .env file".to_string())
        })?;

        let mut config = Config::new(api_key);

        if let Ok(version) = env::var("RIOT_FALLBACK_VERSION") {
            config.fallback_version = version;
        }
        if let Ok(mode) = env::var("RIOT_QUEUE_NAMES") {
            config.queue_names = mode.parse()?;
        }
        if let Ok(mode) = env::var("RIOT_ROUTING") {
            config.routing = mode.parse()?;
        }

        Ok(config)
    }

    pub fn with_queue_names(mut self, mode: QueueNameMode) -> Self {
        self.queue_names = mode;
        self
    }

    pub fn with_routing(mut self, mode: RoutingMode) -> Self {
        self.routing = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_hosts() {
        let config = Config::new("key");
        assert_eq!(config.ddragon_url, "http://ddragon.leagueoflegends.com/");
        assert_eq!(config.riot_host, "api.riotgames.com");
        assert_eq!(config.fallback_version, "13.3.1");
        assert_eq!(config.queue_names, QueueNameMode::Literal);
        assert_eq!(config.routing, RoutingMode::Mapped);
    }

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("Singular".parse::<QueueNameMode>().unwrap(), QueueNameMode::Singular);
        assert_eq!(" LEGACY ".parse::<RoutingMode>().unwrap(), RoutingMode::Legacy);
        assert!("strict".parse::<RoutingMode>().is_err());
    }
}
