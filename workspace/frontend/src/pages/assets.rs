use yew::prelude::*;

use crate::components::assets::AssetList;

#[function_component(AssetsPage)]
pub fn assets_page() -> Html {
    html! {
        <div class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold">{"Assets"}</h1>
            <AssetList />
        </div>
    }
}
