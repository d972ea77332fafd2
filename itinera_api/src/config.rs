use std::{fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context, anyhow};
use itinera_core::{
    kmh::Kmh,
    planner::{DEFAULT_ESTIMATE_SPEED_KMH, PlannerParams, RankingSource},
};
use itinera_osrm::Overview;
use tracing::Level;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// Public OSRM demo server: car profile only, rate limited.
const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
const DEFAULT_OSRM_TIMEOUT_SECS: u64 = 40;

pub struct Config {
    pub bind_addr: String,
    pub osrm_url: String,
    pub osrm_timeout: Duration,
    pub overview: Overview,
    pub planner: PlannerParams,
    pub log_level: Level,
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|error| anyhow!("invalid {name}='{value}': {error}")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let timeout_secs: u64 = parse_or(&lookup, "OSRM_TIMEOUT_SECS", DEFAULT_OSRM_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(anyhow!("OSRM_TIMEOUT_SECS must be greater than zero"));
        }

        let osrm_url = lookup("OSRM_BASE_URL").unwrap_or_else(|| DEFAULT_OSRM_URL.to_string());
        reqwest::Url::parse(&osrm_url).with_context(|| format!("invalid OSRM_BASE_URL='{osrm_url}'"))?;

        Ok(Self {
            bind_addr: lookup("ITINERA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            osrm_url,
            osrm_timeout: Duration::from_secs(timeout_secs),
            overview: parse_or(&lookup, "OSRM_OVERVIEW", Overview::default())?,
            planner: PlannerParams {
                ranking: parse_or(&lookup, "ITINERA_RANKING", RankingSource::default())?,
                estimate_speed: parse_or(
                    &lookup,
                    "ITINERA_ESTIMATE_SPEED_KMH",
                    Kmh::new(DEFAULT_ESTIMATE_SPEED_KMH),
                )?,
            },
            log_level: parse_or(&lookup, "ITINERA_LOG_LEVEL", Level::INFO)?,
        })
    }
}
