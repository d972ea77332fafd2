use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    cost_matrix::CostMatrix,
    error::{PlanError, Stage},
    itinerary::Itinerary,
    kmh::Kmh,
    provider::RouteProvider,
    request::{RouteRequest, RouteRequestInput},
    selector::{ViaOrdering, select_via_order, should_rank},
};

pub const DEFAULT_ESTIMATE_SPEED_KMH: f64 = 50.0;

/// Where the costs used to rank via orders come from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingSource {
    /// Straight-line estimates, no network call.
    #[default]
    Estimate,
    /// The provider's travel cost table, one extra provider call.
    ProviderTable,
}

impl fmt::Display for RankingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RankingSource::Estimate => "estimate",
                RankingSource::ProviderTable => "table",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown ranking source '{0}', expected 'estimate' or 'table'")]
pub struct UnknownRankingSource(String);

impl FromStr for RankingSource {
    type Err = UnknownRankingSource;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "estimate" => Ok(RankingSource::Estimate),
            "table" | "provider_table" => Ok(RankingSource::ProviderTable),
            other => Err(UnknownRankingSource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlannerParams {
    pub ranking: RankingSource,
    /// Speed used to turn estimated distances into durations.
    pub estimate_speed: Kmh,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            ranking: RankingSource::default(),
            estimate_speed: Kmh::new(DEFAULT_ESTIMATE_SPEED_KMH),
        }
    }
}

/// Runs a request end to end: choose the via order, ask the provider for
/// the route, assemble the itinerary.
pub struct RoutePlanner<P> {
    provider: P,
    params: PlannerParams,
}

impl<P> RoutePlanner<P>
where
    P: RouteProvider,
{
    pub fn new(provider: P, params: PlannerParams) -> Self {
        Self { provider, params }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn params(&self) -> &PlannerParams {
        &self.params
    }

    /// Validates `input` then plans it.
    pub async fn plan_input(&self, input: RouteRequestInput) -> Result<Itinerary, PlanError> {
        let request = RouteRequest::try_from(input)?;
        self.plan(&request).await
    }

    #[instrument(
        skip_all,
        fields(
            points = request.points().len(),
            optimize = request.optimize(),
            metric = %request.metric(),
            profile = %request.profile(),
        )
    )]
    pub async fn plan(&self, request: &RouteRequest) -> Result<Itinerary, PlanError> {
        let profile = self.provider.resolve_profile(request.profile());
        let ordering = self.select_order(request, &profile).await?;
        let ordered_points = request.ordered_points(&ordering);

        debug!(
            order = ?ordering.order(),
            cost = ?ordering.cost(),
            %profile,
            "requesting route"
        );

        let route = self
            .provider
            .route(&ordered_points, &profile)
            .await
            .map_err(|error| {
                warn!(%error, "route request failed");
                PlanError::provider(Stage::Routing, error)
            })?;

        info!(
            distance = %route.distance,
            duration_s = route.duration.as_secs_f64(),
            "route found"
        );

        Ok(Itinerary::assemble(request, &ordering, route))
    }

    async fn select_order(
        &self,
        request: &RouteRequest,
        profile: &P::Profile,
    ) -> Result<ViaOrdering, PlanError> {
        if !should_rank(request.num_vias(), request.optimize()) {
            return Ok(ViaOrdering::input_order(request.num_vias()));
        }

        let chain = request.chain();
        let matrix = match self.params.ranking {
            RankingSource::Estimate => {
                CostMatrix::from_estimates(&chain, request.metric(), self.params.estimate_speed)
            }
            RankingSource::ProviderTable => {
                let table = self
                    .provider
                    .table(&chain, profile, request.metric())
                    .await
                    .map_err(|error| {
                        warn!(%error, "cost table request failed");
                        PlanError::provider(Stage::Ordering, error)
                    })?;

                if table.num_locations() != chain.len() {
                    warn!(
                        expected = chain.len(),
                        actual = table.num_locations(),
                        "cost table does not match the requested points"
                    );
                    return Err(PlanError::ProviderError {
                        stage: Stage::Ordering,
                        code: None,
                        message: format!(
                            "cost table covers {} locations, expected {}",
                            table.num_locations(),
                            chain.len()
                        ),
                    });
                }

                table
            }
        };

        Ok(select_via_order(
            &matrix,
            request.num_vias(),
            request.optimize(),
        )?)
    }
}
