use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::asset_detail::AssetDetailPage;
use crate::pages::assets::AssetsPage;
use crate::pages::home::HomePage;
use crate::pages::my_page::MyPage;
use crate::pages::not_found::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/assets")]
    Assets,
    // `id` is the asset slug; display names are still accepted
    #[at("/assets/:id")]
    AssetDetail { id: String },
    #[at("/mypage")]
    MyPage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Home page");
            html! { <Layout><HomePage /></Layout> }
        }
        Route::Assets => {
            log::trace!("Rendering Assets page");
            html! { <Layout><AssetsPage /></Layout> }
        }
        Route::AssetDetail { id } => {
            log::trace!("Rendering Asset Detail page for: {}", id);
            html! { <Layout><AssetDetailPage {id} /></Layout> }
        }
        Route::MyPage => {
            log::trace!("Rendering My Page");
            html! { <Layout><MyPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><NotFoundPage /></Layout> }
        }
    }
}
