use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

const LOGO_PATH: &str = "/images/logo.webp";

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="header-container navbar bg-base-100 shadow-sm sticky top-0">
            <div class="header-wrap flex-1 px-4">
                <div class="header-left-wrap flex items-center gap-6">
                    <Link<Route> to={Route::Home}>
                        <img id="logo" class="h-8" src={LOGO_PATH} alt="Logo" />
                    </Link<Route>>
                    <ul class="menu menu-horizontal gap-2">
                        <li><Link<Route> to={Route::Assets} classes="header-nav-item">{"Assets"}</Link<Route>></li>
                        <li><Link<Route> to={Route::MyPage} classes="header-nav-item">{"My Page"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
