use std::time::Duration;

use itinera_core::{
    cost_matrix::CostMatrix,
    metric::Metric,
    point::RoutePoint,
    profile::Profile,
    provider::{ProviderError, RouteProvider, RouteResult},
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    error::OsrmError,
    profile::OsrmProfile,
    response::{OsrmErrorBody, parse_route, parse_table},
};

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const OSRM_TABLE_API_PATH: &str = "/table/v1/";

/// Level of detail of the returned route geometry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overview {
    #[default]
    Simplified,
    Full,
}

impl Overview {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overview::Simplified => "simplified",
            Overview::Full => "full",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown overview '{0}', expected 'simplified' or 'full'")]
pub struct UnknownOverview(String);

impl std::str::FromStr for Overview {
    type Err = UnknownOverview;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simplified" => Ok(Overview::Simplified),
            "full" => Ok(Overview::Full),
            other => Err(UnknownOverview(other.to_string())),
        }
    }
}

pub struct OsrmClientParams {
    pub osrm_url: String,
    /// Upper bound for a single request, connection included.
    pub timeout: Duration,
    pub overview: Overview,
}

pub struct OsrmClient {
    params: OsrmClientParams,
    client: reqwest::Client,
}

/// `{base}{path}{profile}/{lon,lat;lon,lat;...}`
fn api_url(base: &str, path: &str, profile: OsrmProfile, points: &[RoutePoint]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push_str(path);
    url.push_str(&profile.to_string());
    url.push('/');

    for (i, point) in points.iter().enumerate() {
        url.push_str(&format!("{},{}", point.lon, point.lat));

        if i < points.len() - 1 {
            url.push(';');
        }
    }

    url
}

impl OsrmClient {
    /// `client` is the HTTP transport, shared with whatever else the caller
    /// uses it for.
    pub fn new(params: OsrmClientParams, client: reqwest::Client) -> Self {
        Self { params, client }
    }

    pub fn params(&self) -> &OsrmClientParams {
        &self.params
    }

    #[instrument(skip_all, fields(points = points.len(), %profile))]
    pub async fn fetch_route(
        &self,
        points: &[RoutePoint],
        profile: OsrmProfile,
    ) -> Result<RouteResult, OsrmError> {
        let url = api_url(&self.params.osrm_url, OSRM_ROUTE_API_PATH, profile, points);
        debug!(%url, "OSRM: requesting route");

        let response = self
            .client
            .get(url)
            .query(&[
                ("overview", self.params.overview.as_str()),
                ("geometries", "geojson"),
                ("steps", "false"),
                ("annotations", "false"),
            ])
            .timeout(self.params.timeout)
            .send()
            .await?;

        let body = self.read_body(response).await?;

        parse_route(&body)
    }

    #[instrument(skip_all, fields(points = points.len(), %profile, %metric))]
    pub async fn fetch_table(
        &self,
        points: &[RoutePoint],
        profile: OsrmProfile,
        metric: Metric,
    ) -> Result<CostMatrix, OsrmError> {
        let url = api_url(&self.params.osrm_url, OSRM_TABLE_API_PATH, profile, points);
        debug!(%url, "OSRM: requesting table");

        let annotations = match metric {
            Metric::Distance => "distance",
            Metric::Duration => "duration",
        };

        let response = self
            .client
            .get(url)
            .query(&[("annotations", annotations)])
            .timeout(self.params.timeout)
            .send()
            .await?;

        let body = self.read_body(response).await?;

        parse_table(&body, metric)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String, OsrmError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let (code, message) = match serde_json::from_str::<OsrmErrorBody>(&body) {
            Ok(error) => (Some(error.code), error.message.unwrap_or_default()),
            Err(_) => (None, body),
        };

        Err(OsrmError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

impl RouteProvider for OsrmClient {
    type Profile = OsrmProfile;

    fn resolve_profile(&self, profile: Profile) -> Self::Profile {
        OsrmProfile::from(profile)
    }

    async fn route(
        &self,
        points: &[RoutePoint],
        profile: &Self::Profile,
    ) -> Result<RouteResult, ProviderError> {
        self.fetch_route(points, *profile).await.map_err(|error| {
            warn!(%error, "OSRM: route failed");
            ProviderError::from(error)
        })
    }

    async fn table(
        &self,
        points: &[RoutePoint],
        profile: &Self::Profile,
        metric: Metric,
    ) -> Result<CostMatrix, ProviderError> {
        self.fetch_table(points, *profile, metric)
            .await
            .map_err(|error| {
                warn!(%error, "OSRM: table failed");
                ProviderError::from(error)
            })
    }
}
