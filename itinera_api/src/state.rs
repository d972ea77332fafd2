use itinera_core::planner::RoutePlanner;
use itinera_osrm::OsrmClient;

pub struct AppState {
    pub planner: RoutePlanner<OsrmClient>,
}
