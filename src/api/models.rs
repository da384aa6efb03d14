use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i64,
    pub summoner_level: i64,
}

// Entry of the static queues.json catalog
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueDto {
    pub queue_id: i64,
    #[serde(default)]
    pub description: Option<String>,
}

// Data Dragon champion.json response
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, DataDragonChampion>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataDragonChampion {
    pub id: String,
    pub name: String,
    pub key: String,
}

// Spectator V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfoDto {
    pub game_queue_config_id: i64,
    pub participants: Vec<CurrentGameParticipantDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipantDto {
    #[serde(default)]
    pub summoner_id: String,
    pub champion_id: i64,
}

// Champion Mastery V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i64,
    pub champion_points: i64,
}

// League V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub queue_type: String,
    pub rank: String,
    pub tier: String,
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
}

/// Champion key as handed out by the mastery and spectator APIs.
///
/// Keys compare loosely: two keys that both read as integers compare as
/// numbers, anything else falls back to exact string comparison. `"1"`, `1`
/// and `" 01"` are the same champion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionKey(String);

impl ChampionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }

    pub fn matches(&self, raw: &str) -> bool {
        *self == ChampionKey::from(raw)
    }
}

impl PartialEq for ChampionKey {
    fn eq(&self, other: &Self) -> bool {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a == b,
            _ => self.0 == other.0,
        }
    }
}

impl Eq for ChampionKey {}

impl From<String> for ChampionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ChampionKey {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<i64> for ChampionKey {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for ChampionKey {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ChampionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummonerProfile {
    pub name: String,
    pub summoner_id: String,
    pub account_id: String,
    pub puuid: String,
    pub profile_icon_url: String,
    pub level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionInfo {
    pub name: String,
    pub id: String,
    pub champion_icon_url: String,
    pub champion_splash_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveGame {
    pub queue_id: i64,
    pub queue_name: String,
    pub champion: ChampionInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasteryEntry {
    pub champion: ChampionInfo,
    pub level: i64,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub queue_type: String,
    pub rank: String,
    pub tier: String,
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
}

impl RankedEntry {
    /// Rounded percentage of games won; 0 when no games were played.
    pub fn win_rate(&self) -> i64 {
        let games = self.wins + self.losses;
        if games <= 0 {
            0
        } else {
            (self.wins as f64 / games as f64 * 100.0).round() as i64
        }
    }
}

impl From<LeagueEntryDto> for RankedEntry {
    fn from(dto: LeagueEntryDto) -> Self {
        RankedEntry {
            queue_type: dto.queue_type,
            rank: dto.rank,
            tier: dto.tier,
            league_points: dto.league_points,
            wins: dto.wins,
            losses: dto.losses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_keys_compare_loosely() {
        assert_eq!(ChampionKey::from("1"), ChampionKey::from(1i64));
        assert_eq!(ChampionKey::from(" 01"), ChampionKey::from(1u32));
        assert_ne!(ChampionKey::from("103"), ChampionKey::from(1i64));
        assert!(ChampionKey::from("Ahri").matches("Ahri"));
        assert!(!ChampionKey::from("Ahri").matches("ahri"));
    }

    fn entry(wins: i64, losses: i64) -> RankedEntry {
        RankedEntry {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            rank: "II".to_string(),
            tier: "GOLD".to_string(),
            league_points: 42,
            wins,
            losses,
        }
    }

    #[test]
    fn win_rate_rounds_to_whole_percent() {
        assert_eq!(entry(2, 1).win_rate(), 67);
        assert_eq!(entry(1, 2).win_rate(), 33);
        assert_eq!(entry(10, 0).win_rate(), 100);
    }

    #[test]
    fn win_rate_without_games_is_zero() {
        assert_eq!(entry(0, 0).win_rate(), 0);
    }

    #[test]
    fn summoner_dto_reads_camel_case() {
        let dto: SummonerDto = serde_json::from_str(
            r#"{"id":"s","accountId":"a","puuid":"p","name":"Faker","profileIconId":6,"summonerLevel":500,"revisionDate":1}"#,
        )
        .unwrap();
        assert_eq!(dto.account_id, "a");
        assert_eq!(dto.profile_icon_id, 6);
    }
}
