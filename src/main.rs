use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use summoner_lookup::display::output::{
    display_champion, display_error, display_info, display_profile, display_ranked, display_success,
    live_game_status, mastery_summary, matches_summary, queue_label, ranked_summary,
};
use summoner_lookup::{Config, QueueNameMode, RiotApiClient, RoutingCluster, RoutingMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Summoner Lookup")]
#[command(about = "Query summoner, live game, mastery and ranked data from the Riot API", long_about = None)]
struct Args {
    /// How queue descriptions are shortened: literal or singular
    #[arg(long, global = true)]
    queue_names: Option<String>,

    /// How regions map to match routing clusters: legacy or mapped
    #[arg(long, global = true)]
    routing: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest game version on DDragon
    Version,

    /// Summoner profile by name
    Profile { name: String, region: String },

    /// Queue name for a queue id
    Queue { id: i64 },

    /// Champion info by numeric key
    Champion { key: String },

    /// What the summoner is currently playing
    Live { summoner_id: String, region: String },

    /// Number of matches played in a time window
    Matches {
        puuid: String,
        region: String,

        /// Look back this many days (ignored when --start is given)
        #[arg(short, long, default_value = "7")]
        days: i64,

        /// Window start, epoch seconds
        #[arg(long)]
        start: Option<i64>,

        /// Window end, epoch seconds (default: now)
        #[arg(long)]
        end: Option<i64>,

        /// Maximum number of match ids to request (max: 100)
        #[arg(short, long, default_value = "100")]
        count: u32,
    },

    /// Top three champion masteries
    Mastery { summoner_id: String, region: String },

    /// First ranked entry
    Ranked { summoner_id: String, region: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(mode) = args.queue_names {
        config = config.with_queue_names(mode.parse::<QueueNameMode>()?);
    }
    if let Some(mode) = args.routing {
        config = config.with_routing(mode.parse::<RoutingMode>()?);
    }

    let client = RiotApiClient::new(config);

    match args.command {
        Command::Version => {
            let version = client.resolve_version();
            display_success(&format!("Latest version: {}", version));
        }
        Command::Profile { name, region } => {
            display_info(&format!("Fetching summoner {} in region {}", name, region));
            let profile = client.summoner_account(&name, &region)?;
            display_profile(&profile);
        }
        Command::Queue { id } => {
            println!("{}", queue_label(&client.queue_name(id)));
        }
        Command::Champion { key } => {
            let champion = client.champion(key.as_str())?;
            display_champion(&champion);
        }
        Command::Live { summoner_id, region } => {
            println!("{}", live_game_status(&client.live_game(&summoner_id, &region)));
        }
        Command::Matches {
            puuid,
            region,
            days,
            start,
            end,
            count,
        } => {
            if count == 0 || count > 100 {
                bail!("--count must be between 1 and 100");
            }

            let now = Utc::now();
            let end_time = end.unwrap_or_else(|| now.timestamp());
            let start_time = match start {
                Some(start) => start,
                None => Duration::try_days(days)
                    .and_then(|window| now.checked_sub_signed(window))
                    .map(|start| start.timestamp())
                    .with_context(|| format!("--days {} is out of range", days))?,
            };
            if start_time > end_time {
                bail!("Window start {} is after end {}", start_time, end_time);
            }

            let cluster = RoutingCluster::for_region(&region, client.config().routing);
            display_info(&format!("Counting matches on the {} cluster", cluster));
            let result = client.matches_number(&puuid, &region, start_time, end_time, count);
            println!("{}", matches_summary(&result));
        }
        Command::Mastery { summoner_id, region } => {
            println!("{}", mastery_summary(&client.summoner_champions(&summoner_id, &region)));
        }
        Command::Ranked { summoner_id, region } => {
            let result = client.summoner_ranked(&summoner_id, &region);
            if let Ok(entry) = &result {
                display_ranked(entry);
            }
            println!("{}", ranked_summary(&result));
        }
    }

    Ok(())
}
