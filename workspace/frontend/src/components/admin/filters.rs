use ::common::{FilterAction, ModelFilter};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::view::StationLabels;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filter: ModelFilter,
    pub dates: Vec<String>,
    pub stations: Vec<String>,
    pub labels: StationLabels,
    pub on_action: Callback<FilterAction>,
}

fn selected_value(e: &Event) -> Option<String> {
    ModelFilter::selection(&e.target_unchecked_into::<HtmlSelectElement>().value())
}

#[function_component(ModelFilters)]
pub fn model_filters(props: &Props) -> Html {
    let on_date = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| on_action.emit(FilterAction::SelectDate(selected_value(&e))))
    };

    let on_station = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| on_action.emit(FilterAction::SelectStation(selected_value(&e))))
    };

    let on_reset = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(FilterAction::Reset))
    };

    let chosen_date = props.filter.date.clone().unwrap_or_default();
    let chosen_station = props.filter.station.clone().unwrap_or_default();

    html! {
        <div class="flex flex-wrap items-end gap-4 mb-6">
            <label class="form-control">
                <span class="label-text">{"📅 Datum:"}</span>
                <select class="select select-bordered select-sm" onchange={on_date}>
                    <option value="" selected={chosen_date.is_empty()}>{"Vsi"}</option>
                    { for props.dates.iter().map(|date| html! {
                        <option value={date.clone()} selected={*date == chosen_date}>{date}</option>
                    })}
                </select>
            </label>
            <label class="form-control">
                <span class="label-text">{"🏷️ Postaja:"}</span>
                <select class="select select-bordered select-sm" onchange={on_station}>
                    <option value="" selected={chosen_station.is_empty()}>{"Vse"}</option>
                    { for props.stations.iter().map(|station| html! {
                        <option value={station.clone()} selected={*station == chosen_station}>
                            {props.labels.name_for(station)}
                        </option>
                    })}
                </select>
            </label>
            <button class="btn btn-outline btn-sm" onclick={on_reset}>{"🔄 Ponastavi"}</button>
        </div>
    }
}
