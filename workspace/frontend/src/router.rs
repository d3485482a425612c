use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin::AdminPanel;
use crate::components::layout::layout::Layout;
use crate::components::map::MapView;
use crate::components::reports::{DriftReports, ReportViewer};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Map,
    #[at("/admin")]
    Admin,
    #[at("/drift")]
    Drift,
    #[at("/report/:id")]
    Report { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Navbar entry a route belongs to; a single report sits under Drift
    pub fn section(&self) -> Option<Route> {
        match self {
            Route::Map => Some(Route::Map),
            Route::Admin => Some(Route::Admin),
            Route::Drift | Route::Report { .. } => Some(Route::Drift),
            Route::NotFound => None,
        }
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Map => {
            log::trace!("Rendering map view");
            html! { <Layout><MapView /></Layout> }
        }
        Route::Admin => {
            log::trace!("Rendering admin panel");
            html! { <Layout><AdminPanel /></Layout> }
        }
        Route::Drift => {
            log::trace!("Rendering report list");
            html! { <Layout><DriftReports /></Layout> }
        }
        Route::Report { id } => {
            log::trace!("Rendering report {}", id);
            html! { <Layout><ReportViewer id={id} /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="p-6">
                        <h1 class="text-2xl font-bold">{"404"}</h1>
                        <Link<Route> to={Route::Map} classes="link link-primary">{"Nazaj na zemljevid"}</Link<Route>>
                    </div>
                </Layout>
            }
        }
    }
}
