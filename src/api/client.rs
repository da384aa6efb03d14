use crate::api::endpoints::{self, redact, RoutingCluster};
use crate::api::transport::{Transport, UreqTransport};
use crate::config::{Config, QueueNameMode};
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::models::*;

/// Queue label used when the catalog has nothing for a queue id.
pub const FALLBACK_QUEUE_NAME: &str = "Game";

/// Number of mastery entries reported by [`RiotApiClient::summoner_champions`].
pub const TOP_MASTERY_COUNT: usize = 3;

/// Client for the Riot API and DDragon.
///
/// Every operation issues its requests one after the other and returns a
/// [`Result`]; turning a failure into a user-facing fallback is left to
/// [`crate::display`].
pub struct RiotApiClient<T = UreqTransport> {
    config: Config,
    transport: T,
}

impl RiotApiClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        RiotApiClient {
            config,
            transport: UreqTransport::new(),
        }
    }
}

impl<T: Transport> RiotApiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        RiotApiClient { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get_json<D: DeserializeOwned>(&self, url: &Url) -> Result<D> {
        let body = self.transport.get(url)?;
        serde_json::from_str(&body).map_err(|source| AppError::Json {
            url: redact(url),
            source,
        })
    }

    /// Latest game client version listed by DDragon.
    #[instrument(skip(self))]
    pub fn latest_version(&self) -> Result<String> {
        let url = endpoints::versions_url(&self.config)?;
        let versions: Vec<String> = self.get_json(&url)?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::EmptyResponse(redact(&url)))
    }

    /// Latest version, or the configured fallback when DDragon can't be reached.
    pub fn resolve_version(&self) -> String {
        match self.latest_version() {
            Ok(version) => version,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.config.fallback_version,
                    "Using fallback game version"
                );
                self.config.fallback_version.clone()
            }
        }
    }

    #[instrument(skip(self))]
    pub fn summoner_account(&self, name: &str, region: &str) -> Result<SummonerProfile> {
        let url = endpoints::riot_url(
            &self.config,
            region,
            &["summoner", "v4", "summoners", "by-name", name],
            &[],
        )?;
        let summoner: SummonerDto = self.get_json(&url)?;

        let version = self.resolve_version();
        let profile_icon_url =
            endpoints::profile_icon_url(&self.config, &version, summoner.profile_icon_id);

        Ok(SummonerProfile {
            name: summoner.name,
            summoner_id: summoner.id,
            account_id: summoner.account_id,
            puuid: summoner.puuid,
            profile_icon_url,
            level: summoner.summoner_level,
        })
    }

    /// Description of a queue from the static catalog, shortened per [`QueueNameMode`].
    #[instrument(skip(self))]
    pub fn queue_name(&self, queue_id: i64) -> Result<String> {
        let url = endpoints::queues_url(&self.config)?;
        let queues: Vec<QueueDto> = self.get_json(&url)?;

        queues
            .into_iter()
            .find(|queue| queue.queue_id == queue_id)
            .and_then(|queue| queue.description)
            .map(|description| shorten_queue_description(&description, self.config.queue_names))
            .ok_or(AppError::QueueNotFound(queue_id))
    }

    pub fn champion(&self, key: impl Into<ChampionKey>) -> Result<ChampionInfo> {
        self.champion_by_key(&key.into())
    }

    #[instrument(skip(self))]
    fn champion_by_key(&self, key: &ChampionKey) -> Result<ChampionInfo> {
        let version = self.resolve_version();
        let url = endpoints::champions_url(&self.config, &version)?;
        let catalog: DataDragonChampions = self.get_json(&url)?;

        let champion = catalog
            .data
            .into_values()
            .find(|champion| key.matches(&champion.key))
            .ok_or_else(|| AppError::ChampionNotFound(key.to_string()))?;

        Ok(ChampionInfo {
            champion_icon_url: endpoints::champion_icon_url(&self.config, &version, &champion.id),
            champion_splash_url: endpoints::champion_splash_url(&self.config, &champion.id),
            name: champion.name,
            id: champion.id,
        })
    }

    /// The summoner's active game, or `None` when they are not in one.
    #[instrument(skip(self))]
    pub fn live_game(&self, summoner_id: &str, region: &str) -> Result<Option<LiveGame>> {
        let url = endpoints::riot_url(
            &self.config,
            region,
            &["spectator", "v4", "active-games", "by-summoner", summoner_id],
            &[],
        )?;

        let game: CurrentGameInfoDto = match self.get_json(&url) {
            Ok(game) => game,
            Err(e) if e.is_not_found() => {
                debug!("No active game");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let participant = game
            .participants
            .iter()
            .find(|participant| participant.summoner_id == summoner_id)
            .ok_or_else(|| AppError::ParticipantNotFound(summoner_id.to_string()))?;

        let champion = self.champion(participant.champion_id)?;
        let queue_name = match self.queue_name(game.game_queue_config_id) {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Falling back to generic queue name");
                FALLBACK_QUEUE_NAME.to_string()
            }
        };

        Ok(Some(LiveGame {
            queue_id: game.game_queue_config_id,
            queue_name,
            champion,
        }))
    }

    /// Number of match ids played in `[start_time, end_time]` (epoch seconds), capped by `count`.
    #[instrument(skip(self))]
    pub fn matches_number(
        &self,
        puuid: &str,
        region: &str,
        start_time: i64,
        end_time: i64,
        count: u32,
    ) -> Result<usize> {
        let cluster = RoutingCluster::for_region(region, self.config.routing);
        debug!(%cluster, "Resolved routing cluster");

        let url = endpoints::riot_url(
            &self.config,
            cluster.as_str(),
            &["match", "v5", "matches", "by-puuid", puuid, "ids"],
            &[
                ("startTime", start_time.to_string()),
                ("endTime", end_time.to_string()),
                ("count", count.to_string()),
            ],
        )?;
        let ids: Vec<String> = self.get_json(&url)?;

        Ok(ids.len())
    }

    /// Top champion masteries in upstream order (highest points first).
    #[instrument(skip(self))]
    pub fn summoner_champions(&self, summoner_id: &str, region: &str) -> Result<Vec<MasteryEntry>> {
        let url = endpoints::riot_url(
            &self.config,
            region,
            &["champion-mastery", "v4", "champion-masteries", "by-summoner", summoner_id],
            &[],
        )?;
        let masteries: Vec<ChampionMasteryDto> = self.get_json(&url)?;

        if masteries.is_empty() {
            return Err(AppError::NoChampionMastery);
        }

        let mut entries = Vec::with_capacity(TOP_MASTERY_COUNT);
        for mastery in masteries.into_iter().take(TOP_MASTERY_COUNT) {
            let champion = self.champion(mastery.champion_id)?;
            entries.push(MasteryEntry {
                champion,
                level: mastery.champion_level,
                points: mastery.champion_points,
            });
        }

        Ok(entries)
    }

    /// First ranked entry returned for the summoner.
    #[instrument(skip(self))]
    pub fn summoner_ranked(&self, summoner_id: &str, region: &str) -> Result<RankedEntry> {
        let url = endpoints::riot_url(
            &self.config,
            region,
            &["league", "v4", "entries", "by-summoner", summoner_id],
            &[],
        )?;
        let entries: Vec<LeagueEntryDto> = self.get_json(&url)?;

        entries
            .into_iter()
            .next()
            .map(RankedEntry::from)
            .ok_or(AppError::Unranked)
    }
}

pub fn shorten_queue_description(description: &str, mode: QueueNameMode) -> String {
    match mode {
        QueueNameMode::Literal => {
            let mut shortened = description.to_string();
            shortened.pop();
            shortened
        }
        QueueNameMode::Singular => description
            .strip_suffix('s')
            .unwrap_or(description)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_mode_drops_last_character() {
        assert_eq!(
            shorten_queue_description("5v5 Ranked Solo games", QueueNameMode::Literal),
            "5v5 Ranked Solo game"
        );
        assert_eq!(
            shorten_queue_description("Ranked Solo/Duo 5x5Game", QueueNameMode::Literal),
            "Ranked Solo/Duo 5x5Gam"
        );
        assert_eq!(shorten_queue_description("", QueueNameMode::Literal), "");
    }

    #[test]
    fn singular_mode_only_strips_plural_s() {
        assert_eq!(
            shorten_queue_description("5v5 ARAM games", QueueNameMode::Singular),
            "5v5 ARAM game"
        );
        assert_eq!(
            shorten_queue_description("Ranked Solo/Duo 5x5Game", QueueNameMode::Singular),
            "Ranked Solo/Duo 5x5Game"
        );
    }
}
