use crate::api::endpoints::redact;
use crate::error::{AppError, Result};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("summoner_lookup/", env!("CARGO_PKG_VERSION"));

/// A single blocking GET returning the response body as text.
///
/// Non-2xx answers must come back as [`AppError::Status`] so callers can tell
/// "nothing here" (404) apart from real failures.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url)
    }
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        UreqTransport { agent }
    }

    /// Use a preconfigured agent (timeouts, proxies, ...).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        UreqTransport { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &Url) -> Result<String> {
        let shown = redact(url);
        debug!(url = %shown, "GET");

        match self.agent.get(url.as_str()).call() {
            Ok(resp) => resp.into_string().map_err(|e| AppError::Http {
                url: shown,
                message: e.to_string(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(AppError::Status { url: shown, status }),
            // The transport's own Display embeds the full URL, api_key included.
            Err(ureq::Error::Transport(t)) => {
                let message = match t.message() {
                    Some(detail) => format!("{}: {}", t.kind(), detail),
                    None => t.kind().to_string(),
                };
                Err(AppError::Http { url: shown, message })
            }
        }
    }
}
