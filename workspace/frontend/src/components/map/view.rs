use ::common::{MapAction, MapViewState, PredictionQuery, RequestGuard, Station};
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::leaflet::{LeafletMap, StationMarker};
use super::popup::StationPopup;
use super::sidebar::StationSidebar;
use crate::api_client::prediction::request_prediction;
use crate::api_client::stations::fetch_stations;
use crate::common::fetch_hook::use_load;

/// Ljubljana city centre
const INITIAL_CENTER: (f64, f64) = (46.05, 14.5);
const INITIAL_ZOOM: f64 = 13.0;
const FOCUS_ZOOM: f64 = 17.0;
const FLY_DURATION_SECS: f64 = 1.2;

#[derive(Default, PartialEq)]
struct MapStore(MapViewState);

impl Reducible for MapStore {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Map action: {:?}", action);
        Rc::new(MapStore(self.0.reduce(action)))
    }
}

#[function_component(MapView)]
pub fn map_view() -> Html {
    let container_ref = use_node_ref();
    let map = use_mut_ref(|| None::<LeafletMap>);
    let markers = use_mut_ref(HashMap::<String, StationMarker>::new);
    let popup_hosts = use_state(Vec::<(Station, Element)>::new);
    let store = use_reducer(MapStore::default);
    let predictions = use_memo((), |_| RequestGuard::new());

    let stations_state = use_load(|| async { Ok::<_, String>(fetch_stations().await) });
    let stations: Vec<Station> = stations_state.data().cloned().unwrap_or_default();

    // Mount the Leaflet map once; tear it down with the screen
    {
        let container_ref = container_ref.clone();
        let map = map.clone();
        let markers = markers.clone();
        let predictions = predictions.clone();
        use_effect_with((), move |_| {
            if let Some(container) = container_ref.cast::<Element>() {
                log::debug!("Mounting Leaflet map");
                *map.borrow_mut() = Some(LeafletMap::mount(
                    &container,
                    INITIAL_CENTER.0,
                    INITIAL_CENTER.1,
                    INITIAL_ZOOM,
                ));
            } else {
                log::error!("Map container missing, cannot mount Leaflet");
            }

            move || {
                predictions.cancel_all();
                markers.borrow_mut().clear();
                if let Some(map) = map.borrow_mut().take() {
                    map.destroy();
                }
            }
        });
    }

    // One marker per station, each with a detached element its popup renders into
    {
        let map = map.clone();
        let markers = markers.clone();
        let popup_hosts = popup_hosts.clone();
        let dispatcher = store.dispatcher();
        use_effect_with(stations.clone(), move |stations| {
            let mut markers = markers.borrow_mut();
            markers.clear();

            let map = map.borrow();
            let document = web_sys::window().and_then(|w| w.document());
            let (Some(map), Some(document)) = (map.as_ref(), document) else {
                return;
            };

            let mut hosts = Vec::with_capacity(stations.len());
            for station in stations {
                let Ok(host) = document.create_element("div") else {
                    log::error!("Could not create popup element for {}", station.id);
                    continue;
                };
                let on_click = {
                    let dispatcher = dispatcher.clone();
                    let station_id = station.id.clone();
                    move || dispatcher.dispatch(MapAction::SelectMarker(station_id.clone()))
                };
                let marker = StationMarker::place(
                    map,
                    station.position.lat,
                    station.position.lon,
                    &host,
                    on_click,
                );
                markers.insert(station.id.clone(), marker);
                hosts.push((station.clone(), host));
            }

            log::info!("Placed {} station markers", hosts.len());
            popup_hosts.set(hosts);
        });
    }

    let on_action = {
        let dispatcher = store.dispatcher();
        Callback::from(move |action: MapAction| dispatcher.dispatch(action))
    };

    let on_predict = {
        let dispatcher = store.dispatcher();
        let predictions = predictions.clone();
        Callback::from(move |station_id: String| {
            let token = predictions.issue();
            dispatcher.dispatch(MapAction::PredictionStarted(station_id.clone()));

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let display = request_prediction(PredictionQuery::for_station(station_id.clone())).await;
                if token.is_cancelled() {
                    log::debug!("Dropping stale prediction for {}", station_id);
                    return;
                }
                dispatcher.dispatch(MapAction::PredictionFinished { station_id, display });
            });
        })
    };

    let on_toggle_sidebar = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MapAction::ToggleSidebar))
    };

    let on_sidebar_select = {
        let dispatcher = store.dispatcher();
        let map = map.clone();
        let markers = markers.clone();
        Callback::from(move |station: Station| {
            dispatcher.dispatch(MapAction::SelectFromSidebar(station.id.clone()));

            let marker = markers.borrow().get(&station.id).map(|m| m.marker.clone());
            if let Some(map) = map.borrow().as_ref() {
                map.fly_to_then(
                    station.position.lat,
                    station.position.lon,
                    FOCUS_ZOOM,
                    FLY_DURATION_SECS,
                    move || {
                        if let Some(marker) = marker {
                            marker.open_popup();
                        }
                    },
                );
            }
        })
    };

    let view = &store.0;

    html! {
        <div class="relative w-full" style="height: calc(100vh - 4rem);">
            <div ref={container_ref} class="absolute inset-0"></div>

            <button
                class="btn btn-sm bg-base-100 absolute"
                style="top: 1rem; left: 3.5rem; z-index: 1001;"
                onclick={on_toggle_sidebar}
            >
                {"☰"}
            </button>

            if view.sidebar_open {
                <StationSidebar stations={stations.clone()} on_select={on_sidebar_select} />
            }

            { for popup_hosts.iter().map(|(station, host)| {
                let selected = view.is_selected(&station.id).then(|| view.clone());
                create_portal(
                    html! {
                        <StationPopup
                            station={station.clone()}
                            view={selected}
                            on_action={on_action.clone()}
                            on_predict={on_predict.clone()}
                        />
                    },
                    host.clone(),
                )
            })}
        </div>
    }
}
