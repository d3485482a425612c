use ::common::{format_metric, ModelMeta};
use yew::prelude::*;

use crate::common::format::local_time_from_millis;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub model: ModelMeta,
}

#[function_component(ModelCard)]
pub fn model_card(props: &Props) -> Html {
    let model = &props.model;
    let tracking_url = model.tracking_url(&settings::get_settings().tracking_base_url);

    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4 text-sm">
                <p>
                    <b>{"Run ID: "}</b>
                    <a class="link link-primary" href={tracking_url} target="_blank" rel="noopener noreferrer">
                        {&model.run_id}
                    </a>
                </p>
                <p><b>{"Window Size: "}</b>{model.window_size_label()}</p>
                <p><b>{"RMSE: "}</b>{format_metric(model.rmse)}</p>
                <p><b>{"MAE: "}</b>{format_metric(model.mae)}</p>
                <p><b>{"Trained: "}</b>{local_time_from_millis(model.start_time)}</p>
            </div>
        </div>
    }
}
