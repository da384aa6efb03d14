//! Lookup helpers for a Discord bot: summoner profiles, live games, champion
//! mastery, ranked standing and match counts from the Riot API and DDragon.
//!
//! [`RiotApiClient`] returns typed results; [`display`] turns them into the
//! strings the bot posts, including the fallback messages for failures.

pub mod api;
pub mod config;
pub mod display;
pub mod error;

pub use api::client::RiotApiClient;
pub use api::endpoints::RoutingCluster;
pub use api::models::{ChampionInfo, ChampionKey, LiveGame, MasteryEntry, RankedEntry, SummonerProfile};
pub use api::transport::{Transport, UreqTransport};
pub use config::{Config, QueueNameMode, RoutingMode};
pub use error::{AppError, Result};
