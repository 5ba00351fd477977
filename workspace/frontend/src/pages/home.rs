use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_catalog;
use crate::router::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_catalog();
    let asset_count = catalog.catalog().len();

    html! {
        <div class="hero bg-base-100 rounded-box shadow py-12">
            <div class="hero-content text-center flex-col gap-4">
                <h1 class="text-4xl font-bold">{"Digital Asset Manager"}</h1>
                <p class="text-lg">{format!("Browse {} tracked exchanges and their prices.", asset_count)}</p>
                <Link<Route> to={Route::Assets} classes="btn btn-primary">{"View assets"}</Link<Route>>
            </div>
        </div>
    }
}
