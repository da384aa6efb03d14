use crate::api::client::FALLBACK_QUEUE_NAME;
use crate::api::models::{ChampionInfo, LiveGame, MasteryEntry, RankedEntry, SummonerProfile};
use crate::error::Result;
use colored::*;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

pub const NOT_PLAYING: &str = "Currently not playing.";
pub const NO_MASTERY: &str = "You don't have any champion mastery.";
pub const MATCHES_ERROR: &str = "An error occured while fetching matches number.";
pub const UNRANKED: &str = "Unranked.";

/// Groups digits the en-US way: `1234567` -> `1,234,567`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn format_win_rate(entry: &RankedEntry) -> String {
    format!("{}%", entry.win_rate())
}

pub fn queue_label(result: &Result<String>) -> String {
    match result {
        Ok(name) => name.clone(),
        Err(e) => {
            warn!(error = %e, "An error occured while fetching queue description");
            FALLBACK_QUEUE_NAME.to_string()
        }
    }
}

pub fn live_game_status(result: &Result<Option<LiveGame>>) -> String {
    match result {
        Ok(Some(game)) => format!(
            "Currently playing a **{}** as **{}**",
            game.queue_name, game.champion.name
        ),
        Ok(None) => NOT_PLAYING.to_string(),
        Err(e) => {
            warn!(error = %e, "An error occured while fetching live game");
            NOT_PLAYING.to_string()
        }
    }
}

pub fn mastery_summary(result: &Result<Vec<MasteryEntry>>) -> String {
    match result {
        Ok(entries) if !entries.is_empty() => entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                format!(
                    "**[{}]** {}. {}: {}",
                    entry.level,
                    idx + 1,
                    entry.champion.name,
                    format_thousands(entry.points)
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Ok(_) => NO_MASTERY.to_string(),
        Err(e) => {
            warn!(error = %e, "An error occured while fetching summoner champions mastery");
            NO_MASTERY.to_string()
        }
    }
}

pub fn matches_summary(result: &Result<usize>) -> String {
    match result {
        Ok(count) => count.to_string(),
        Err(e) => {
            warn!(error = %e, "An error occured while fetching matches number");
            MATCHES_ERROR.to_string()
        }
    }
}

pub fn ranked_summary(result: &Result<RankedEntry>) -> String {
    match result {
        Ok(entry) => format!(
            "{} {} {} LP, {}W {}L ({})",
            entry.tier,
            entry.rank,
            entry.league_points,
            entry.wins,
            entry.losses,
            format_win_rate(entry)
        ),
        Err(e) => {
            warn!(error = %e, "An error occured while fetching ranked entries");
            UNRANKED.to_string()
        }
    }
}

// Terminal output used by the CLI.

#[derive(Tabled)]
struct RankedRow {
    queue: String,
    tier: String,
    rank: String,
    lp: String,
    wins: String,
    losses: String,
    win_rate: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_profile(profile: &SummonerProfile) {
    println!("\n{}", format!("🎮 {} ", profile.name).bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("{} {}", "Level:".bold(), profile.level);
    println!("{} {}", "Summoner ID:".bold(), profile.summoner_id);
    println!("{} {}", "Account ID:".bold(), profile.account_id);
    println!("{} {}", "PUUID:".bold(), profile.puuid);
    println!("{} {}\n", "Icon:".bold(), profile.profile_icon_url);
}

pub fn display_champion(champion: &ChampionInfo) {
    println!("\n{}", format!("🛡️ {} ({})", champion.name, champion.id).bold().cyan());
    println!("{} {}", "Icon:".bold(), champion.champion_icon_url);
    println!("{} {}\n", "Splash:".bold(), champion.champion_splash_url);
}

pub fn display_ranked(entry: &RankedEntry) {
    let win_rate = if entry.win_rate() >= 50 {
        format_win_rate(entry).green().to_string()
    } else {
        format_win_rate(entry).red().to_string()
    };

    let rows = vec![RankedRow {
        queue: entry.queue_type.clone(),
        tier: entry.tier.clone(),
        rank: entry.rank.clone(),
        lp: entry.league_points.to_string(),
        wins: entry.wins.to_string(),
        losses: entry.losses.to_string(),
        win_rate,
    }];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn champion(name: &str) -> ChampionInfo {
        ChampionInfo {
            name: name.to_string(),
            id: name.to_string(),
            champion_icon_url: String::new(),
            champion_splash_url: String::new(),
        }
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-12345), "-12,345");
    }

    #[test]
    fn live_game_errors_read_as_not_playing() {
        let err: Result<Option<LiveGame>> = Err(AppError::ParticipantNotFound("x".to_string()));
        assert_eq!(live_game_status(&err), "Currently not playing.");
        assert_eq!(live_game_status(&Ok(None)), "Currently not playing.");
    }

    #[test]
    fn live_game_sentence() {
        let game = LiveGame {
            queue_id: 420,
            queue_name: "5v5 Ranked Solo game".to_string(),
            champion: champion("Ahri"),
        };
        assert_eq!(
            live_game_status(&Ok(Some(game))),
            "Currently playing a **5v5 Ranked Solo game** as **Ahri**"
        );
    }

    #[test]
    fn mastery_lines_are_ranked() {
        let entries = vec![
            MasteryEntry { champion: champion("Ahri"), level: 7, points: 1_234_567 },
            MasteryEntry { champion: champion("Annie"), level: 5, points: 45_000 },
        ];
        assert_eq!(
            mastery_summary(&Ok(entries)),
            "**[7]** 1. Ahri: 1,234,567\n**[5]** 2. Annie: 45,000"
        );
        assert_eq!(mastery_summary(&Err(AppError::NoChampionMastery)), NO_MASTERY);
    }

    #[test]
    fn fallbacks_for_other_results() {
        assert_eq!(queue_label(&Err(AppError::QueueNotFound(9999))), "Game");
        assert_eq!(matches_summary(&Ok(12)), "12");
        assert_eq!(matches_summary(&Err(AppError::NoChampionMastery)), MATCHES_ERROR);
        assert_eq!(ranked_summary(&Err(AppError::Unranked)), "Unranked.");
    }

    #[test]
    fn ranked_summary_with_guarded_win_rate() {
        let entry = RankedEntry {
            queue_type: "RANKED_SOLO_5x5".to_string(),
            rank: "IV".to_string(),
            tier: "SILVER".to_string(),
            league_points: 0,
            wins: 0,
            losses: 0,
        };
        assert_eq!(ranked_summary(&Ok(entry)), "SILVER IV 0 LP, 0W 0L (0%)");
    }
}
