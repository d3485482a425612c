use ::common::{
    format_position, group_models, index_by_id, FilterAction, ModelFilter, ModelMeta, Station,
};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

use super::filters::ModelFilters;
use super::model_card::ModelCard;
use crate::api_client::models::fetch_model_metadata;
use crate::api_client::stations::fetch_stations;
use crate::common::fetch_hook::use_load;

/// Station id → display name lookup, shared between the filters and the list
#[derive(Clone, Default, PartialEq)]
pub struct StationLabels(Rc<HashMap<String, Station>>);

impl StationLabels {
    pub fn new(stations: &[Station]) -> Self {
        Self(Rc::new(index_by_id(stations)))
    }

    /// `"<name> (<id>)"`, or the bare id for stations the map does not know
    pub fn name_for(&self, station_id: &str) -> String {
        self.0
            .get(station_id)
            .map(Station::label)
            .unwrap_or_else(|| station_id.to_string())
    }

    pub fn position_for(&self, station_id: &str) -> Option<String> {
        self.0.get(station_id).map(|s| format_position(&s.position))
    }
}

#[derive(Default, PartialEq)]
struct FilterStore(ModelFilter);

impl Reducible for FilterStore {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("Model filter action: {:?}", action);
        Rc::new(FilterStore(self.0.apply(action)))
    }
}

#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    let models_state = use_load(|| async { Ok::<_, String>(fetch_model_metadata().await) });
    let stations_state = use_load(|| async { Ok::<_, String>(fetch_stations().await) });
    let filter = use_reducer(FilterStore::default);

    let models: Vec<ModelMeta> = models_state.data().cloned().unwrap_or_default();
    let grouped = use_memo(models, |models| group_models(models));

    let stations: Vec<Station> = stations_state.data().cloned().unwrap_or_default();
    let labels = use_memo(stations, |stations| StationLabels::new(stations));

    let on_action = {
        let dispatcher = filter.dispatcher();
        Callback::from(move |action: FilterAction| dispatcher.dispatch(action))
    };

    let header = html! {
        <h1 class="text-2xl font-bold mb-4">{"🧠 Pregled Napovednih Modelov"}</h1>
    };

    if models_state.is_pending() {
        return html! {
            <div class="p-6">
                {header}
                <p>{"🔄 Nalaganje modelov..."}</p>
            </div>
        };
    }

    let current = &filter.0;
    let visible = grouped.filter(current);
    log::trace!(
        "Showing {} of {} model runs",
        visible.model_count(),
        grouped.model_count()
    );

    html! {
        <div class="p-6">
            {header}
            <ModelFilters
                filter={current.clone()}
                dates={grouped.dates()}
                stations={grouped.stations(current.date.as_deref())}
                labels={(*labels).clone()}
                {on_action}
            />
            if visible.is_empty() {
                <p class="italic opacity-70">{"Ni zadetkov za izbrane filtre."}</p>
            } else {
                { for visible.iter().map(|(date, stations)| html! {
                    <section key={date.clone()} class="mb-8">
                        <h2 class="text-xl font-semibold mb-3">{format!("📅 {}", date)}</h2>
                        { for stations.iter().map(|(station, runs)| html! {
                            <div key={station.clone()} class="mb-4">
                                <h3 class="font-semibold">
                                    {format!("🔌 {}", labels.name_for(station))}
                                    if let Some(position) = labels.position_for(station) {
                                        <span class="ml-2 text-sm opacity-70">{format!("📍 {}", position)}</span>
                                    }
                                </h3>
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-3 mt-2">
                                    { for runs.iter().map(|model| html! {
                                        <ModelCard key={model.run_id.clone()} model={model.clone()} />
                                    })}
                                </div>
                            </div>
                        })}
                    </section>
                })}
            }
        </div>
    }
}
