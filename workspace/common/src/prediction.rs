use serde_json::Value;
use tracing::error;

use crate::error::Result;

/// Time-steps of history the forecasting model is asked to consume.
pub const DEFAULT_WINDOW_SIZE: u32 = 24;

pub const PREDICTION_SUCCESS: &str = "✅ Napoved uspešna.";
pub const PREDICTION_FAILURE: &str = "❌ Napaka pri napovedi.";

/// Query parameters of `/api/predict`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    pub station_id: String,
    pub window_size: u32,
}

impl PredictionQuery {
    pub fn for_station(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("stationId", self.station_id.clone()),
            ("windowSize", self.window_size.to_string()),
        ]
    }
}

/// Reads the forecast out of a prediction body.
///
/// Success is signalled by the presence of `input`; strings are shown as
/// they are, any other JSON value in its compact form.
pub fn parse_prediction(body: &Value) -> Option<String> {
    match body.get("input")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// What the popup shows under the predict button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionDisplay {
    pub value: String,
    pub status: String,
}

impl PredictionDisplay {
    pub fn success(value: String) -> Self {
        Self {
            value,
            status: PREDICTION_SUCCESS.to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            value: String::new(),
            status: PREDICTION_FAILURE.to_string(),
        }
    }

    pub fn from_outcome(outcome: Option<String>) -> Self {
        match outcome {
            Some(value) => Self::success(value),
            None => Self::failure(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.status.is_empty()
    }
}

/// Turns a prediction fetch outcome into what the popup shows. Any
/// failure clears the value and shows the failure status.
pub fn prediction_outcome(response: Result<Value>) -> PredictionDisplay {
    let outcome = match response {
        Ok(body) => {
            let value = parse_prediction(&body);
            if value.is_none() {
                error!("Prediction response has no input field");
            }
            value
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            None
        }
    };
    PredictionDisplay::from_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;

    #[test]
    fn test_network_error_clears_value() {
        for failure in [
            ClientError::Transport("connection refused".into()),
            ClientError::Status(503),
            ClientError::payload("not json"),
        ] {
            let display = prediction_outcome(Err(failure));
            assert_eq!(display.value, "");
            assert_eq!(display.status, "❌ Napaka pri napovedi.");
        }
    }

    #[test]
    fn test_successful_fetch_shows_value() {
        let display = prediction_outcome(Ok(json!({ "input": "0.82" })));
        assert_eq!(display, PredictionDisplay::success("0.82".to_string()));
    }

    #[test]
    fn test_string_input_is_displayed_verbatim() {
        let outcome = parse_prediction(&json!({ "input": "0.82" }));
        let display = PredictionDisplay::from_outcome(outcome);
        assert_eq!(display.value, "0.82");
        assert_eq!(display.status, "✅ Napoved uspešna.");
    }

    #[test]
    fn test_non_string_input_is_stringified() {
        assert_eq!(parse_prediction(&json!({ "input": 0.5 })).as_deref(), Some("0.5"));
        assert_eq!(
            parse_prediction(&json!({ "input": [1, 2] })).as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn test_missing_input_is_failure() {
        for body in [json!({}), json!({ "input": null }), json!({ "error": "boom" }), json!("0.8")] {
            let display = PredictionDisplay::from_outcome(parse_prediction(&body));
            assert_eq!(display.value, "");
            assert_eq!(display.status, "❌ Napaka pri napovedi.");
        }
    }

    #[test]
    fn test_query_uses_default_window_size() {
        let query = PredictionQuery::for_station("S1");
        assert_eq!(query.window_size, 24);
        assert_eq!(
            query.params(),
            [("stationId", "S1".to_string()), ("windowSize", "24".to_string())]
        );
    }
}
