use ::common::Station;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stations: Vec<Station>,
    pub on_select: Callback<Station>,
}

#[function_component(StationSidebar)]
pub fn station_sidebar(props: &Props) -> Html {
    html! {
        <div
            class="absolute bg-base-100 rounded-lg shadow-lg p-4 overflow-y-auto"
            style="top: 1rem; right: 1rem; width: 250px; max-height: 80vh; z-index: 1000;"
        >
            <h3 class="font-bold text-lg mb-2">{"📋 Polnilnice"}</h3>
            { for props.stations.iter().map(|station| {
                let summary = station.summary();
                let onclick = {
                    let on_select = props.on_select.clone();
                    let station = station.clone();
                    Callback::from(move |_: MouseEvent| {
                        log::debug!("Sidebar selected station {}", station.id);
                        on_select.emit(station.clone());
                    })
                };
                html! {
                    <div key={station.id.clone()} class="cursor-pointer py-2 border-b border-base-200" {onclick}>
                        <strong>{&station.name}</strong><br />
                        <small>{&station.address}</small><br />
                        <span>{format!("🟢 {} / 📦 {}", summary.available, summary.total_label())}</span>
                    </div>
                }
            })}
        </div>
    }
}
