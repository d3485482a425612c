use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, warn};

use crate::error::{ClientError, Result};

/// Geographic position of a station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Live occupancy counters of one connector type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityCounters {
    #[serde(deserialize_with = "null_as_default")]
    pub available: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub occupied: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub reserved: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub unknown: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub out_of_service: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct AvailabilitySnapshot {
    #[serde(deserialize_with = "null_as_default")]
    current: AvailabilityCounters,
}

/// Availability of one connector type at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorAvailability {
    #[serde(rename = "type")]
    pub connector_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    availability: AvailabilitySnapshot,
}

impl ConnectorAvailability {
    pub fn current(&self) -> &AvailabilityCounters {
        &self.availability.current
    }
}

/// A charging station as the backend reports it.
///
/// Snapshots are never mutated client-side; each fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    pub position: Position,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Vec<ConnectorAvailability>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fetched_at: String,
}

/// Headline numbers for the sidebar row: the first connector type only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSummary {
    pub available: u32,
    pub total: Option<u32>,
}

impl StationSummary {
    pub fn total_label(&self) -> String {
        self.total.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
    }
}

impl Station {
    pub fn summary(&self) -> StationSummary {
        let first = self.availability.first();
        StationSummary {
            available: first.map(|a| a.current().available).unwrap_or(0),
            total: first.map(|a| a.total),
        }
    }

    /// Label used wherever a station id is shown next to its name
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Index stations by id for label lookups.
pub fn index_by_id(stations: &[Station]) -> HashMap<String, Station> {
    stations.iter().map(|s| (s.id.clone(), s.clone())).collect()
}

/// Extracts the station list from an `/api/ev-data` body.
///
/// The body must carry a `results` array. Entries that fail to decode are
/// dropped with a warning so one bad station does not blank the map.
pub fn parse_stations(body: &Value) -> Result<Vec<Station>> {
    let results = body
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::payload("missing results array"))?;

    let mut stations = Vec::with_capacity(results.len());
    for (index, entry) in results.iter().enumerate() {
        match Station::deserialize(entry) {
            Ok(station) => stations.push(station),
            Err(e) => warn!(index, error = %e, "Skipping malformed station entry"),
        }
    }

    debug!("Parsed {} of {} station entries", stations.len(), results.len());
    Ok(stations)
}

/// Stations from a fetch outcome. Transport failures, error statuses and
/// bodies without `results` all leave the map empty.
pub fn stations_or_empty(response: Result<Value>) -> Vec<Station> {
    match response.and_then(|body| parse_stations(&body)) {
        Ok(stations) => stations,
        Err(e) => {
            error!("❌ Error fetching stations: {}", e);
            Vec::new()
        }
    }
}
