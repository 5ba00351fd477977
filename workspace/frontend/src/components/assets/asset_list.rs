use catalog::Asset;
use yew::prelude::*;
use yew_router::prelude::*;

use super::asset_card::AssetCard;
use crate::hooks::use_catalog;
use crate::router::Route;

/// One card per catalog entry; selecting a card opens its detail page.
#[function_component(AssetList)]
pub fn asset_list() -> Html {
    let catalog = use_catalog();
    let navigator = use_navigator();

    let on_select = Callback::from(move |asset: Asset| {
        let route = Route::AssetDetail { id: asset.slug.clone() };
        match &navigator {
            // The asset rides along as history state so the detail page can skip the lookup
            Some(navigator) => navigator.push_with_state(&route, asset),
            None => log::error!("No router available to open {:?}", route),
        }
    });

    let assets = catalog.catalog().list();
    log::debug!("Rendering {} asset cards", assets.len());

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            { for assets.iter().map(|asset| html! {
                <AssetCard key={asset.slug.clone()} asset={asset.clone()} on_select={on_select.clone()} />
            }) }
        </div>
    }
}
