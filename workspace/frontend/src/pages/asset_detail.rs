use catalog::{resolve_detail, Asset, AssetDetailModel};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::not_found::NotFoundNotice;
use crate::hooks::use_catalog;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Route identifier: a slug, or a display name from an older link
    pub id: String,
}

#[function_component(AssetDetailPage)]
pub fn asset_detail_page(props: &Props) -> Html {
    let catalog = use_catalog();
    let location = use_location();

    // Only present right after a card click; a reload or direct link has none
    let forwarded = location.as_ref().and_then(|location| location.state::<Asset>());

    let model = resolve_detail(catalog.catalog(), &props.id, forwarded.as_deref());

    match model {
        AssetDetailModel::Found { asset, price_label, source } => {
            log::debug!("Showing asset '{}' resolved from {:?}", asset.slug, source);
            html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body flex flex-row items-center gap-6">
                        <img class="w-24 h-24" src={asset.image.clone()} alt={asset.name.clone()} />
                        <div class="flex flex-col gap-2">
                            <div class="text-3xl font-bold">{&asset.name}</div>
                            <div class="text-xl">{price_label}</div>
                        </div>
                    </div>
                </div>
            }
        }
        AssetDetailModel::NotFound { identifier } => html! {
            <NotFoundNotice
                title="Asset not found"
                message={format!("There is no asset called '{}'.", identifier)}
            />
        },
    }
}
