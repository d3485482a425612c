//! Domain types and pure client logic shared by the SmartCharge frontend.
//!
//! Everything here compiles for both the native test target and
//! `wasm32-unknown-unknown`, so the frontend keeps its components thin and
//! the behaviour worth testing lives in this crate.

mod cancel;
mod error;
mod map_view;
mod model_meta;
mod prediction;
mod report;
mod station;

pub use cancel::{CancelToken, RequestGuard};
pub use error::{ClientError, Result};
pub use map_view::{MapAction, MapViewState};
pub use model_meta::{
    date_key, group_models, models_or_empty, parse_model_records, FilterAction, GroupedModels, ModelFilter,
    ModelMeta, RawModelRecord,
};
pub use prediction::{
    parse_prediction, prediction_outcome, PredictionDisplay, PredictionQuery, DEFAULT_WINDOW_SIZE,
    PREDICTION_FAILURE, PREDICTION_SUCCESS,
};
pub use report::{
    report_raw_path, report_view_path, ReportDetail, ReportKind, ReportRender, ReportSummary,
    REPORT_LOAD_ERROR,
};
pub use station::{
    index_by_id, parse_stations, stations_or_empty, AvailabilityCounters, ConnectorAvailability, Position, Station,
    StationSummary,
};

/// Formats a metric the way model cards show it: four decimal places.
pub fn format_metric(value: f64) -> String {
    format!("{:.4}", value)
}

/// Formats a coordinate pair to four decimal places, `lat, lon`.
pub fn format_position(position: &Position) -> String {
    format!("{:.4}, {:.4}", position.lat, position.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric_rounds_to_four_places() {
        assert_eq!(format_metric(0.5), "0.5000");
        assert_eq!(format_metric(0.123456), "0.1235");
        assert_eq!(format_metric(0.0), "0.0000");
    }

    #[test]
    fn test_format_position() {
        let position = Position { lat: 46.05, lon: 14.5 };
        assert_eq!(format_position(&position), "46.0500, 14.5000");
    }
}
