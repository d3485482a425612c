use ::common::{stations_or_empty, Station};
use crate::api_client;
use crate::settings;

/// Latest station availability. Never fails: any error is logged and the
/// map simply shows no markers.
pub async fn fetch_stations() -> Vec<Station> {
    log::trace!("Fetching stations");
    let url = settings::get_settings().api_url("/api/ev-data");

    let stations = stations_or_empty(api_client::get_json(&url, std::iter::empty()).await);
    log::info!("Showing {} stations", stations.len());
    stations
}
