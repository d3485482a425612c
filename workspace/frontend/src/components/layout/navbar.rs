use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let route = use_route::<Route>();
    let link_class = |target: &Route| {
        let active = route.as_ref().is_some_and(|r| r.section() == target.section());
        if active { "btn btn-ghost btn-active" } else { "btn btn-ghost" }
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0 h-16">
            <div class="flex-1 px-4">
                <Link<Route> to={Route::Map} classes="text-xl font-bold">{"⚡ SmartCharge"}</Link<Route>>
            </div>
            <ul class="menu menu-horizontal flex-none gap-1 px-1">
                <li><Link<Route> to={Route::Map} classes={link_class(&Route::Map)}>{"Mapa"}</Link<Route>></li>
                <li><Link<Route> to={Route::Admin} classes={link_class(&Route::Admin)}>{"Admin"}</Link<Route>></li>
                <li><Link<Route> to={Route::Drift} classes={link_class(&Route::Drift)}>{"Drift"}</Link<Route>></li>
            </ul>
        </div>
    }
}
