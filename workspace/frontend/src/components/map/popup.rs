use ::common::{MapAction, MapViewState, Station};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::format::local_time_from_iso;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub station: Station,
    /// Present only while this station is the selected one
    #[prop_or_default]
    pub view: Option<MapViewState>,
    pub on_action: Callback<MapAction>,
    pub on_predict: Callback<String>,
}

#[function_component(StationPopup)]
pub fn station_popup(props: &Props) -> Html {
    let station = &props.station;

    html! {
        <div class="text-sm" style="min-width: 220px;">
            <strong>{&station.name}</strong><br />
            {&station.address}<br />
            <hr class="my-2" />
            {if station.availability.is_empty() {
                html! { <div class="mb-2">{"📦 ? total"}</div> }
            } else {
                html! {
                    { for station.availability.iter().map(|a| {
                        let current = a.current();
                        html! {
                            <div style="margin-bottom: 0.5rem;">
                                <b>{&a.connector_type}</b><br />
                                {format!("🟢 {} available", current.available)}<br />
                                {format!("🔴 {} occupied", current.occupied)}<br />
                                {format!("📦 {} total", a.total)}
                            </div>
                        }
                    })}
                }
            }}
            <small><i>{format!("Fetched: {}", local_time_from_iso(&station.fetched_at))}</i></small>
            {if let Some(view) = &props.view {
                html! {
                    <PredictionForm
                        station_id={station.id.clone()}
                        view={view.clone()}
                        on_action={props.on_action.clone()}
                        on_predict={props.on_predict.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PredictionFormProps {
    station_id: String,
    view: MapViewState,
    on_action: Callback<MapAction>,
    on_predict: Callback<String>,
}

#[function_component(PredictionForm)]
fn prediction_form(props: &PredictionFormProps) -> Html {
    let view = &props.view;

    let on_date = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_action.emit(MapAction::PickDate(value));
        })
    };

    let on_time = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_action.emit(MapAction::PickTime(value));
        })
    };

    let on_click = {
        let on_predict = props.on_predict.clone();
        let station_id = props.station_id.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("Prediction requested for station {}", station_id);
            on_predict.emit(station_id.clone());
        })
    };

    html! {
        <div class="mt-3 flex flex-col gap-2">
            <hr />
            <label class="flex items-center gap-2">
                {"📅"}
                <input type="date" class="input input-bordered input-xs" value={view.picked_date.clone()} oninput={on_date} />
            </label>
            <label class="flex items-center gap-2">
                {"🕒"}
                <input type="time" class="input input-bordered input-xs" value={view.picked_time.clone()} oninput={on_time} />
            </label>
            <button class="btn btn-primary btn-xs" onclick={on_click} disabled={view.predicting}>
                {if view.predicting { "🔄 Napovedujem..." } else { "🔮 Napovej" }}
            </button>
            if !view.prediction.value.is_empty() {
                <div><b>{"Napoved: "}</b>{&view.prediction.value}</div>
            }
            if !view.prediction.status.is_empty() {
                <div>{&view.prediction.status}</div>
            }
        </div>
    }
}
