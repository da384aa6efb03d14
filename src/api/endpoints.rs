// URL builders for the Riot API and the DDragon CDN.

use crate::config::{Config, RoutingMode};
use crate::error::{AppError, Result};
use std::fmt;
use url::Url;

/// Match-v5 routing cluster a platform region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingCluster {
    Europe,
    Asia,
    Americas,
    Sea,
}

impl RoutingCluster {
    pub fn for_region(region: &str, mode: RoutingMode) -> Self {
        match mode {
            RoutingMode::Legacy => RoutingCluster::Europe,
            RoutingMode::Mapped => match region.to_ascii_uppercase().as_str() {
                "EUW1" | "EUN1" | "RU" | "TR1" => RoutingCluster::Europe,
                "JP1" | "KR" | "OC1" => RoutingCluster::Asia,
                "NA1" | "LA1" | "LA2" | "BR1" => RoutingCluster::Americas,
                _ => RoutingCluster::Sea,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingCluster::Europe => "europe",
            RoutingCluster::Asia => "asia",
            RoutingCluster::Americas => "americas",
            RoutingCluster::Sea => "sea",
        }
    }
}

impl fmt::Display for RoutingCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme, host and path only, so the api key never reaches a log line or error.
pub fn redact(url: &Url) -> String {
    format!(
        "{}://{}{}",
        url.scheme(),
        url.host_str().unwrap_or_default(),
        url.path()
    )
}

fn ddragon_base(config: &Config) -> String {
    format!("{}/", config.ddragon_url.trim_end_matches('/'))
}

/// `https://{subdomain}.{riot_host}/lol/{segments...}?{query}&api_key=...`
pub fn riot_url(
    config: &Config,
    subdomain: &str,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<Url> {
    let host = format!("{}.{}", subdomain, config.riot_host).to_ascii_lowercase();
    let mut url = Url::parse(&format!("https://{}/", host))?;

    // A region carrying '/', '?', '#' or '@' would move the api key to another host.
    if url.host_str() != Some(host.as_str()) {
        return Err(AppError::InvalidUrl(url::ParseError::InvalidDomainCharacter));
    }

    url.path_segments_mut()
        .map_err(|_| AppError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push("lol")
        .extend(segments);

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("api_key", &config.api_key);
    }

    Ok(url)
}

pub fn versions_url(config: &Config) -> Result<Url> {
    Ok(Url::parse(&format!("{}api/versions.json", ddragon_base(config)))?)
}

pub fn champions_url(config: &Config, version: &str) -> Result<Url> {
    Ok(Url::parse(&format!(
        "{}cdn/{}/data/en_US/champion.json",
        ddragon_base(config),
        version
    ))?)
}

pub fn queues_url(config: &Config) -> Result<Url> {
    Ok(Url::parse(&config.queues_url)?)
}

pub fn profile_icon_url(config: &Config, version: &str, icon_id: i64) -> String {
    format!(
        "{}cdn/{}/img/profileicon/{}.png",
        ddragon_base(config),
        version,
        icon_id
    )
}

pub fn champion_icon_url(config: &Config, version: &str, champion_id: &str) -> String {
    format!(
        "{}cdn/{}/img/champion/{}.png",
        ddragon_base(config),
        version,
        champion_id
    )
}

pub fn champion_splash_url(config: &Config, champion_id: &str) -> String {
    format!(
        "{}cdn/img/champion/splash/{}_0.jpg",
        ddragon_base(config),
        champion_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONS: [(&str, RoutingCluster); 5] = [
        ("EUW1", RoutingCluster::Europe),
        ("KR", RoutingCluster::Asia),
        ("NA1", RoutingCluster::Americas),
        ("PH2", RoutingCluster::Sea),
        ("oc1", RoutingCluster::Asia),
    ];

    #[test]
    fn mapped_routing_groups_regions() {
        for (region, expected) in REGIONS {
            assert_eq!(RoutingCluster::for_region(region, RoutingMode::Mapped), expected, "{}", region);
        }
        for region in ["EUN1", "RU", "TR1"] {
            assert_eq!(RoutingCluster::for_region(region, RoutingMode::Mapped), RoutingCluster::Europe);
        }
        for region in ["LA1", "LA2", "BR1"] {
            assert_eq!(RoutingCluster::for_region(region, RoutingMode::Mapped), RoutingCluster::Americas);
        }
    }

    #[test]
    fn legacy_routing_always_lands_in_europe() {
        for (region, _) in REGIONS {
            assert_eq!(RoutingCluster::for_region(region, RoutingMode::Legacy), RoutingCluster::Europe);
        }
    }

    #[test]
    fn riot_url_encodes_segments_and_appends_key() {
        let config = Config::new("secret");
        let url = riot_url(
            &config,
            "euw1",
            &["summoner", "v4", "summoners", "by-name", "Some Name"],
            &[],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Some%20Name?api_key=secret"
        );
        assert_eq!(
            redact(&url),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Some%20Name"
        );
    }

    #[test]
    fn riot_url_rejects_regions_that_change_the_host() {
        let config = Config::new("secret");
        for region in ["evil.example#", "evil.example/", "evil.example?", "evil@example", "eu w1"] {
            let result = riot_url(&config, region, &["league", "v4", "entries", "by-summoner", "sid"], &[]);
            assert!(
                matches!(result, Err(AppError::InvalidUrl(_))),
                "{} -> {:?}",
                region,
                result.map(|url| url.host_str().map(str::to_string))
            );
        }
    }

    #[test]
    fn riot_url_accepts_upper_case_regions() {
        let config = Config::new("secret");
        let url = riot_url(&config, "EUW1", &["league"], &[]).unwrap();
        assert_eq!(url.host_str(), Some("euw1.api.riotgames.com"));
    }

    #[test]
    fn riot_url_keeps_query_order() {
        let config = Config::new("k");
        let url = riot_url(
            &config,
            "europe",
            &["match", "v5", "matches", "by-puuid", "p", "ids"],
            &[("startTime", "1".to_string()), ("count", "20".to_string())],
        )
        .unwrap();
        assert_eq!(url.query(), Some("startTime=1&count=20&api_key=k"));
    }

    #[test]
    fn ddragon_urls_tolerate_missing_trailing_slash() {
        let mut config = Config::new("k");
        config.ddragon_url = "http://cdn.test".to_string();
        assert_eq!(
            champion_icon_url(&config, "14.1.1", "Ahri"),
            "http://cdn.test/cdn/14.1.1/img/champion/Ahri.png"
        );
        assert_eq!(
            champion_splash_url(&config, "Ahri"),
            "http://cdn.test/cdn/img/champion/splash/Ahri_0.jpg"
        );
        assert_eq!(
            versions_url(&config).unwrap().as_str(),
            "http://cdn.test/api/versions.json"
        );
    }
}
