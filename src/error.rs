use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error for {url}: {message}")]
    Http { url: String, message: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parsing error for {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No queue found with id {0}")]
    QueueNotFound(i64),

    #[error("No champion found with key {0}")]
    ChampionNotFound(String),

    #[error("Summoner {0} is not a participant of the active game")]
    ParticipantNotFound(String),

    #[error("No champion mastery found")]
    NoChampionMastery,

    #[error("No ranked entries found")]
    Unranked,
}

impl AppError {
    /// True when the upstream answered 404, which several endpoints use for "nothing here".
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Status { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
