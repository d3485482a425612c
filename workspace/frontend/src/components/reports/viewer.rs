use ::common::{ReportRender, REPORT_LOAD_ERROR};
use yew::prelude::*;

use crate::api_client::reports::{get_report, raw_report_url};
use crate::common::fetch_hook::use_load_with;
use crate::common::loading::Loading;
use crate::hooks::LoadState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
}

#[function_component(ReportViewer)]
pub fn report_viewer(props: &Props) -> Html {
    let report = use_load_with(props.id.to_string(), get_report);

    let detail = match &*report {
        LoadState::Pending => return html! { <Loading text={Some("🔄 Loading...".to_string())} /> },
        LoadState::Failure(_) => return html! { <p class="p-6">{REPORT_LOAD_ERROR}</p> },
        LoadState::Success(detail) => detail,
    };

    let id = props.id.clone();
    let body = match detail.render(move || raw_report_url(&id)) {
        ReportRender::Frame { src } => html! {
            <iframe
                {src}
                title="Drift Report"
                sandbox="allow-scripts"
                class="w-full border-0"
                height="800"
            />
        },
        ReportRender::Inline { html } => Html::from_html_unchecked(AttrValue::from(html)),
    };

    html! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-4">
                {format!("📄 Report: {} {}", detail.station_id, detail.kind.label())}
            </h2>
            {body}
        </div>
    }
}
