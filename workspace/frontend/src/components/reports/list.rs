use ::common::ReportSummary;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::reports::list_reports;
use crate::common::fetch_hook::use_load;
use crate::common::fetch_render::LoadRender;
use crate::router::Route;

#[function_component(DriftReports)]
pub fn drift_reports() -> Html {
    let reports = use_load(list_reports);

    let render = Callback::from(|reports: Vec<ReportSummary>| {
        if reports.is_empty() {
            return html! { <p class="italic opacity-70">{"Ni poročil."}</p> };
        }
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for reports.iter().map(|report| html! {
                    <Link<Route>
                        key={report.id.clone()}
                        to={Route::Report { id: report.id.clone() }}
                        classes="card bg-base-100 shadow hover:shadow-lg transition-shadow"
                    >
                        <div class="card-body p-4">
                            <h3 class="card-title text-base">{report.kind.label()}</h3>
                            <p>{format!("🔌 {}", report.station_id)}</p>
                            if !report.filename.is_empty() {
                                <p class="text-xs opacity-60">{&report.filename}</p>
                            }
                        </div>
                    </Link<Route>>
                })}
            </div>
        }
    });

    html! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-4">{"📉 Drift & Expectation Reports"}</h2>
            <LoadRender<Vec<ReportSummary>>
                state={(*reports).clone()}
                {render}
                loading_text={Some("🔄 Loading reports...".to_string())}
            />
        </div>
    }
}
