use catalog::{Asset, AssetCardModel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub asset: Asset,
    pub on_select: Callback<Asset>,
}

#[function_component(AssetCard)]
pub fn asset_card(props: &Props) -> Html {
    let model = AssetCardModel::from(&props.asset);

    let onclick = {
        let asset = props.asset.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Asset card selected: {}", asset.slug);
            on_select.emit(asset.clone());
        })
    };

    html! {
        <div class="asset-container card card-side bg-base-100 shadow hover:shadow-md transition-shadow cursor-pointer" {onclick}>
            <figure class="p-4">
                <img class="w-16 h-16" src={model.image} alt={model.name.clone()} />
            </figure>
            <div class="asset-info card-body">
                <h4 class="name card-title text-base">{&model.name}</h4>
                <span class="usd text-lg font-bold">{&model.price_label}</span>
            </div>
        </div>
    }
}
