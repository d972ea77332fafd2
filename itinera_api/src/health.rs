use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use itinera_core::planner::RankingSource;
use itinera_core::profile::Profile;
use itinera_core::provider::RouteProvider;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    provider_base_url: String,
    /// Domain profile to provider profile.
    profiles: BTreeMap<String, String>,
    ranking: RankingSource,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let provider = state.planner.provider();

    let profiles = Profile::ALL
        .into_iter()
        .map(|profile| {
            (
                profile.to_string(),
                provider.resolve_profile(profile).to_string(),
            )
        })
        .collect();

    Json(HealthResponse {
        status: "ok",
        provider_base_url: provider.params().osrm_url.clone(),
        profiles,
        ranking: state.planner.params().ranking,
    })
}
