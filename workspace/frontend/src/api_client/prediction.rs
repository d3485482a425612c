use ::common::{prediction_outcome, PredictionDisplay, PredictionQuery};
use crate::api_client;
use crate::settings;

/// Asks the backend for a forecast and turns the outcome into what the
/// popup displays.
pub async fn request_prediction(query: PredictionQuery) -> PredictionDisplay {
    log::debug!(
        "Requesting prediction for station {} (window {})",
        query.station_id,
        query.window_size
    );
    let url = settings::get_settings().api_url("/api/predict");

    prediction_outcome(api_client::get_json(&url, query.params()).await)
}
