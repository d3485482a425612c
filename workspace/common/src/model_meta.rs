//! Model-training metadata: normalization of exported run records and the
//! date → station grouping the admin panel renders.
//!
//! Grouping keys are derived from the records on every call and never
//! stored, so the same snapshot always produces the same mapping.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error, warn};

use crate::error::{ClientError, Result};

/// One run record as exported by the experiment tracker.
///
/// The tracker prefixes params and metrics (`params.station`,
/// `metrics.rmse`); the already-normalized backend shape uses plain keys.
/// Both decode through this type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawModelRecord {
    pub run_id: String,
    #[serde(rename = "params.station", alias = "station")]
    pub station: String,
    #[serde(
        rename = "params.window_size",
        alias = "window_size",
        default,
        deserialize_with = "lenient_window_size"
    )]
    pub window_size: Option<u32>,
    #[serde(rename = "metrics.rmse", alias = "rmse", default)]
    pub rmse: Option<f64>,
    #[serde(rename = "metrics.mae", alias = "mae", default)]
    pub mae: Option<f64>,
    #[serde(deserialize_with = "epoch_millis")]
    pub start_time: i64,
}

/// Window sizes arrive as numbers or numeric strings ("24").
fn lenient_window_size<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

fn epoch_millis<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("start_time is not a finite number"));
    }
    Ok(value as i64)
}

/// A trained model run, normalized for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMeta {
    pub run_id: String,
    pub station: String,
    pub window_size: Option<u32>,
    pub rmse: f64,
    pub mae: f64,
    /// Epoch milliseconds
    pub start_time: i64,
}

impl ModelMeta {
    /// Normalizes a raw record. Absent metrics become zero; a start time
    /// outside chrono's range rejects the record.
    pub fn from_raw(raw: RawModelRecord) -> Option<Self> {
        date_key(raw.start_time)?;
        Some(Self {
            run_id: raw.run_id,
            station: raw.station,
            window_size: raw.window_size,
            rmse: raw.rmse.unwrap_or(0.0),
            mae: raw.mae.unwrap_or(0.0),
            start_time: raw.start_time,
        })
    }

    /// Calendar date (UTC) the run started on
    pub fn date(&self) -> String {
        date_key(self.start_time).unwrap_or_default()
    }

    pub fn window_size_label(&self) -> String {
        self.window_size
            .map(|w| w.to_string())
            .unwrap_or_else(|| "—".to_string())
    }

    /// Link to the run in the experiment-tracking UI
    pub fn tracking_url(&self, tracking_base: &str) -> String {
        format!(
            "{}/#/experiments/0/runs/{}",
            tracking_base.trim_end_matches('/'),
            self.run_id
        )
    }
}

/// `YYYY-MM-DD` of an epoch-millisecond timestamp, in UTC.
pub fn date_key(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Decodes a model-metadata body (a JSON array of run records).
///
/// Records that do not decode are skipped with a warning.
pub fn parse_model_records(body: &Value) -> Result<Vec<ModelMeta>> {
    let entries = body
        .as_array()
        .ok_or_else(|| ClientError::payload("expected an array of models"))?;

    let mut models = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match RawModelRecord::deserialize(entry) {
            Ok(raw) => match ModelMeta::from_raw(raw) {
                Some(model) => models.push(model),
                None => warn!(index, "Skipping model record with out-of-range start_time"),
            },
            Err(e) => warn!(index, error = %e, "Skipping malformed model record"),
        }
    }

    debug!("Normalized {} of {} model records", models.len(), entries.len());
    Ok(models)
}

/// Model runs from a fetch outcome; any failure yields an empty panel.
pub fn models_or_empty(response: Result<Value>) -> Vec<ModelMeta> {
    match response.and_then(|body| parse_model_records(&body)) {
        Ok(models) => models,
        Err(e) => {
            error!("❌ Error fetching model metadata: {}", e);
            Vec::new()
        }
    }
}

/// date → station → runs, in source order within each bucket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedModels {
    by_date: BTreeMap<String, BTreeMap<String, Vec<ModelMeta>>>,
}

/// Groups runs by start date and station.
pub fn group_models(models: &[ModelMeta]) -> GroupedModels {
    let mut by_date: BTreeMap<String, BTreeMap<String, Vec<ModelMeta>>> = BTreeMap::new();
    for model in models {
        by_date
            .entry(model.date())
            .or_default()
            .entry(model.station.clone())
            .or_default()
            .push(model.clone());
    }
    GroupedModels { by_date }
}

impl GroupedModels {
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, Vec<ModelMeta>>)> {
        self.by_date.iter()
    }

    /// Every date key, ascending
    pub fn dates(&self) -> Vec<String> {
        self.by_date.keys().cloned().collect()
    }

    /// Station options for the dropdown: scoped to `date` when one is
    /// chosen, otherwise the sorted union over all dates.
    pub fn stations(&self, date: Option<&str>) -> Vec<String> {
        match date {
            Some(date) => self
                .by_date
                .get(date)
                .map(|stations| stations.keys().cloned().collect())
                .unwrap_or_default(),
            None => self
                .by_date
                .values()
                .flat_map(|stations| stations.keys().cloned())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        }
    }

    /// Applies both filters. A date survives only with at least one
    /// matching station bucket.
    pub fn filter(&self, filter: &ModelFilter) -> GroupedModels {
        let by_date = self
            .by_date
            .iter()
            .filter(|(date, _)| filter.date.as_deref().is_none_or(|d| d == date.as_str()))
            .filter_map(|(date, stations)| {
                let kept: BTreeMap<_, _> = stations
                    .iter()
                    .filter(|(station, _)| {
                        filter.station.as_deref().is_none_or(|s| s == station.as_str())
                    })
                    .map(|(station, models)| (station.clone(), models.clone()))
                    .collect();
                (!kept.is_empty()).then(|| (date.clone(), kept))
            })
            .collect();
        GroupedModels { by_date }
    }

    pub fn model_count(&self) -> usize {
        self.by_date
            .values()
            .flat_map(|stations| stations.values())
            .map(Vec::len)
            .sum()
    }
}

/// Dropdown selections of the admin panel. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub date: Option<String>,
    pub station: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SelectDate(Option<String>),
    SelectStation(Option<String>),
    Reset,
}

impl ModelFilter {
    /// `<select>` uses the empty string for "all"
    pub fn selection(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn apply(&self, action: FilterAction) -> ModelFilter {
        match action {
            // station options are date-scoped, so a new date drops the station
            FilterAction::SelectDate(date) => ModelFilter { date, station: None },
            FilterAction::SelectStation(station) => ModelFilter {
                date: self.date.clone(),
                station,
            },
            FilterAction::Reset => ModelFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn model(run_id: &str, station: &str, start_time: i64) -> ModelMeta {
        ModelMeta {
            run_id: run_id.to_string(),
            station: station.to_string(),
            window_size: Some(24),
            rmse: 0.1,
            mae: 0.05,
            start_time,
        }
    }

    // 2023-11-14T22:13:20Z
    const NOV_14: i64 = 1_700_000_000_000;
    const DAY: i64 = 86_400_000;

    #[test]
    fn test_failed_fetch_yields_no_models() {
        assert!(models_or_empty(Err(ClientError::Status(503))).is_empty());
        assert!(models_or_empty(Err(ClientError::Status(500))).is_empty());
        assert!(models_or_empty(Err(ClientError::Transport("timed out".into()))).is_empty());
        assert!(models_or_empty(Ok(json!({ "runs": [] }))).is_empty());
    }

    #[test]
    fn test_successful_fetch_yields_models() {
        let body = json!([{ "run_id": "r1", "station": "S1", "start_time": NOV_14 }]);
        let models = models_or_empty(Ok(body));
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].rmse, 0.0);
    }

    #[test]
    fn test_exported_record_groups_under_date_and_station() {
        let body = json!([{
            "run_id": "r1",
            "params.station": "S1",
            "params.window_size": "24",
            "metrics.rmse": 0.5,
            "metrics.mae": 0.3,
            "start_time": 1700000000000i64
        }]);
        let models = parse_model_records(&body).unwrap();
        let grouped = group_models(&models);

        assert_eq!(grouped.dates(), vec!["2023-11-14".to_string()]);
        let (_, stations) = grouped.iter().next().unwrap();
        let runs = &stations["S1"];
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].window_size, Some(24));
        assert_eq!(crate::format_metric(runs[0].rmse), "0.5000");
        assert_eq!(crate::format_metric(runs[0].mae), "0.3000");
    }

    #[test]
    fn test_plain_keys_decode_too() {
        let body = json!([{
            "run_id": "r2",
            "station": "S2",
            "window_size": 48,
            "rmse": 1.25,
            "mae": 0.75,
            "start_time": NOV_14
        }]);
        let models = parse_model_records(&body).unwrap();
        assert_eq!(models[0].station, "S2");
        assert_eq!(models[0].window_size, Some(48));
        assert_eq!(models[0].rmse, 1.25);
    }

    #[test]
    fn test_missing_metrics_default_to_zero() {
        let body = json!([{
            "run_id": "r3",
            "params.station": "S1",
            "params.window_size": "12",
            "metrics.rmse": null,
            "start_time": NOV_14
        }]);
        let models = parse_model_records(&body).unwrap();
        assert_eq!(models[0].rmse, 0.0);
        assert_eq!(models[0].mae, 0.0);
    }

    #[test]
    fn test_unparseable_window_size_is_none() {
        let body = json!([
            { "run_id": "a", "params.station": "S1", "params.window_size": "abc", "start_time": NOV_14 },
            { "run_id": "b", "params.station": "S1", "params.window_size": 24.5, "start_time": NOV_14 },
            { "run_id": "c", "params.station": "S1", "start_time": NOV_14 }
        ]);
        let models = parse_model_records(&body).unwrap();
        assert!(models.iter().all(|m| m.window_size.is_none()));
        assert_eq!(models[0].window_size_label(), "—");
    }

    #[test]
    fn test_records_without_start_time_are_skipped() {
        let body = json!([
            { "run_id": "a", "params.station": "S1" },
            { "run_id": "b", "params.station": "S1", "start_time": NOV_14 }
        ]);
        let models = parse_model_records(&body).unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].run_id, "b");
    }

    #[test]
    fn test_non_array_body_is_payload_error() {
        assert!(matches!(
            parse_model_records(&json!({ "models": [] })),
            Err(ClientError::Payload(_))
        ));
    }

    #[test]
    fn test_date_key_is_utc() {
        assert_eq!(date_key(NOV_14).as_deref(), Some("2023-11-14"));
        assert_eq!(date_key(0).as_deref(), Some("1970-01-01"));
        assert_eq!(date_key(i64::MAX), None);
    }

    #[test]
    fn test_buckets_keep_source_order() {
        let models = vec![
            model("r3", "S1", NOV_14),
            model("r1", "S1", NOV_14 + 1000),
            model("r2", "S1", NOV_14 + 2000),
        ];
        let grouped = group_models(&models);
        let (_, stations) = grouped.iter().next().unwrap();
        let ids: Vec<_> = stations["S1"].iter().map(|m| m.run_id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn test_station_options_are_date_scoped() {
        let models = vec![
            model("r1", "S2", NOV_14),
            model("r2", "S1", NOV_14 + DAY),
            model("r3", "S3", NOV_14 + DAY),
        ];
        let grouped = group_models(&models);

        assert_eq!(grouped.dates(), vec!["2023-11-14", "2023-11-15"]);
        assert_eq!(grouped.stations(None), vec!["S1", "S2", "S3"]);
        assert_eq!(grouped.stations(Some("2023-11-15")), vec!["S1", "S3"]);
        assert!(grouped.stations(Some("2020-01-01")).is_empty());
    }

    #[test]
    fn test_filter_drops_dates_without_matching_station() {
        let models = vec![
            model("r1", "S1", NOV_14),
            model("r2", "S2", NOV_14 + DAY),
        ];
        let grouped = group_models(&models);
        let filter = ModelFilter { date: None, station: Some("S2".into()) };
        let filtered = grouped.filter(&filter);

        assert_eq!(filtered.dates(), vec!["2023-11-15"]);
        assert_eq!(filtered.model_count(), 1);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let grouped = group_models(&[model("r1", "S1", NOV_14)]);
        let filter = ModelFilter {
            date: Some("2023-11-14".into()),
            station: Some("S9".into()),
        };
        assert!(grouped.filter(&filter).is_empty());
    }

    #[test]
    fn test_selecting_date_resets_station() {
        let filter = ModelFilter::default()
            .apply(FilterAction::SelectStation(Some("S1".into())))
            .apply(FilterAction::SelectDate(Some("2023-11-14".into())));
        assert_eq!(filter.station, None);
        assert_eq!(filter.date.as_deref(), Some("2023-11-14"));

        let filter = filter.apply(FilterAction::SelectStation(Some("S2".into())));
        assert_eq!(filter.date.as_deref(), Some("2023-11-14"));
        assert_eq!(filter.station.as_deref(), Some("S2"));

        assert_eq!(filter.apply(FilterAction::Reset), ModelFilter::default());
    }

    #[test]
    fn test_selection_treats_empty_as_all() {
        assert_eq!(ModelFilter::selection(""), None);
        assert_eq!(ModelFilter::selection("S1"), Some("S1".to_string()));
    }

    #[test]
    fn test_tracking_url() {
        let m = model("abc123", "S1", NOV_14);
        assert_eq!(
            m.tracking_url("https://dagshub.com/BlazheManev/smartcharge-ai.mlflow/"),
            "https://dagshub.com/BlazheManev/smartcharge-ai.mlflow/#/experiments/0/runs/abc123"
        );
    }

    fn arb_model() -> impl Strategy<Value = ModelMeta> {
        (
            "[a-f0-9]{6}",
            prop::sample::select(vec!["S1", "S2", "S3", "S4"]),
            prop::option::of(1u32..200),
            0.0f64..10.0,
            0.0f64..10.0,
            NOV_14..NOV_14 + 10 * DAY,
        )
            .prop_map(|(run_id, station, window_size, rmse, mae, start_time)| ModelMeta {
                run_id,
                station: station.to_string(),
                window_size,
                rmse,
                mae,
                start_time,
            })
    }

    fn arb_filter() -> impl Strategy<Value = ModelFilter> {
        (
            prop::option::of((0i64..12).prop_map(|d| date_key(NOV_14 + d * DAY).unwrap())),
            prop::option::of(prop::sample::select(vec!["S1", "S2", "S3", "S5"]).prop_map(String::from)),
        )
            .prop_map(|(date, station)| ModelFilter { date, station })
    }

    proptest! {
        #[test]
        fn prop_grouping_is_deterministic(models in prop::collection::vec(arb_model(), 0..40)) {
            prop_assert_eq!(group_models(&models), group_models(&models));
        }

        #[test]
        fn prop_grouping_preserves_every_record(models in prop::collection::vec(arb_model(), 0..40)) {
            let grouped = group_models(&models);
            prop_assert_eq!(grouped.model_count(), models.len());
            for (date, stations) in grouped.iter() {
                for (station, runs) in stations {
                    prop_assert!(!runs.is_empty());
                    for run in runs {
                        prop_assert_eq!(&run.date(), date);
                        prop_assert_eq!(&run.station, station);
                    }
                }
            }
        }

        #[test]
        fn prop_filtered_records_match_selection(
            models in prop::collection::vec(arb_model(), 0..40),
            filter in arb_filter(),
        ) {
            let filtered = group_models(&models).filter(&filter);
            for (date, stations) in filtered.iter() {
                prop_assert!(!stations.is_empty());
                for run in stations.values().flatten() {
                    if let Some(d) = &filter.date {
                        prop_assert_eq!(&run.date(), d);
                        prop_assert_eq!(date, d);
                    }
                    if let Some(s) = &filter.station {
                        prop_assert_eq!(&run.station, s);
                    }
                }
            }
            let expected = models
                .iter()
                .filter(|m| filter.date.as_ref().is_none_or(|d| &m.date() == d))
                .filter(|m| filter.station.as_ref().is_none_or(|s| &m.station == s))
                .count();
            prop_assert_eq!(filtered.model_count(), expected);
        }

        #[test]
        fn prop_empty_filter_matches_all(models in prop::collection::vec(arb_model(), 0..40)) {
            let grouped = group_models(&models);
            prop_assert_eq!(grouped.filter(&ModelFilter::default()), grouped);
        }
    }
}
