use crate::prediction::PredictionDisplay;

/// UI state of the map screen that outlives a single render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapViewState {
    pub selected: Option<String>,
    pub sidebar_open: bool,
    pub picked_date: String,
    pub picked_time: String,
    pub prediction: PredictionDisplay,
    pub predicting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAction {
    ToggleSidebar,
    /// Marker clicked on the map
    SelectMarker(String),
    /// Entry chosen in the sidebar list
    SelectFromSidebar(String),
    PickDate(String),
    PickTime(String),
    PredictionStarted(String),
    PredictionFinished {
        station_id: String,
        display: PredictionDisplay,
    },
}

impl MapViewState {
    pub fn is_selected(&self, station_id: &str) -> bool {
        self.selected.as_deref() == Some(station_id)
    }

    pub fn reduce(&self, action: MapAction) -> MapViewState {
        let mut next = self.clone();
        match action {
            MapAction::ToggleSidebar => next.sidebar_open = !self.sidebar_open,
            MapAction::SelectMarker(station_id) => next.select(station_id),
            MapAction::SelectFromSidebar(station_id) => {
                next.sidebar_open = false;
                next.select(station_id);
            }
            MapAction::PickDate(date) => next.picked_date = date,
            MapAction::PickTime(time) => next.picked_time = time,
            MapAction::PredictionStarted(station_id) => {
                if self.is_selected(&station_id) {
                    next.predicting = true;
                    next.prediction = PredictionDisplay::default();
                }
            }
            MapAction::PredictionFinished { station_id, display } => {
                // a result for a station the user already left is stale
                if self.predicting && self.is_selected(&station_id) {
                    next.predicting = false;
                    next.prediction = display;
                }
            }
        }
        next
    }

    fn select(&mut self, station_id: String) {
        if self.selected.as_deref() != Some(station_id.as_str()) {
            self.selected = Some(station_id);
            self.prediction = PredictionDisplay::default();
            self.predicting = false;
        }
    }
}
