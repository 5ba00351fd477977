//! View models for the list and detail pages.
//!
//! The Yew components are thin renderers over these types; everything that
//! decides what a page shows lives here.

use tracing::{debug, warn};

use crate::asset::Asset;
use crate::catalog::AssetCatalog;

/// Summary of one asset as shown on a list card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCardModel {
    /// Stable render key (the slug)
    pub key: String,
    pub name: String,
    pub image: String,
    pub price_label: String,
    /// Detail page the card navigates to
    pub href: String,
}

impl From<&Asset> for AssetCardModel {
    fn from(asset: &Asset) -> Self {
        Self {
            key: asset.slug.clone(),
            name: asset.name.clone(),
            image: asset.image.clone(),
            price_label: asset.price_label(),
            href: asset.detail_path(),
        }
    }
}

/// One card per catalog entry, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetListModel {
    pub cards: Vec<AssetCardModel>,
}

impl AssetListModel {
    pub fn from_catalog<C>(catalog: &C) -> Self
    where
        C: AssetCatalog + ?Sized,
    {
        let cards: Vec<AssetCardModel> = catalog.list().iter().map(AssetCardModel::from).collect();
        debug!("Built list model with {} cards", cards.len());
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Where the detail page got its asset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSource {
    /// State forwarded by the navigation that opened the page
    Transient,
    /// Catalog lookup of the route identifier
    Catalog,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetDetailModel {
    Found {
        asset: Asset,
        price_label: String,
        source: DetailSource,
    },
    NotFound {
        identifier: String,
    },
}

impl AssetDetailModel {
    pub fn asset(&self) -> Option<&Asset> {
        match self {
            Self::Found { asset, .. } => Some(asset),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Decide what the detail page for `identifier` shows.
///
/// Forwarded navigation state is only a shortcut: it is used when it
/// addresses the same asset as the route, otherwise the catalog decides.
/// A missing asset yields [`AssetDetailModel::NotFound`].
pub fn resolve_detail<C>(catalog: &C, identifier: &str, transient: Option<&Asset>) -> AssetDetailModel
where
    C: AssetCatalog + ?Sized,
{
    if let Some(asset) = transient.filter(|asset| asset.is_addressed_by(identifier)) {
        debug!("Using forwarded state for asset '{}'", identifier);
        return AssetDetailModel::Found {
            price_label: asset.price_label(),
            asset: asset.clone(),
            source: DetailSource::Transient,
        };
    }

    match catalog.resolve(identifier) {
        Ok(asset) => AssetDetailModel::Found {
            price_label: asset.price_label(),
            asset: asset.clone(),
            source: DetailSource::Catalog,
        },
        Err(err) => {
            warn!("Detail page cannot resolve asset: {}", err);
            AssetDetailModel::NotFound {
                identifier: identifier.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use rust_decimal::Decimal;

    fn bitget_only() -> StaticCatalog {
        StaticCatalog::new(vec![Asset {
            name: "Bitget".to_string(),
            slug: "bitget".to_string(),
            image: "/images/bitget-circle.png".to_string(),
            usd: Decimal::from(10000),
        }])
        .unwrap()
    }

    #[test]
    fn test_list_has_one_card_per_asset_in_order() {
        let catalog = StaticCatalog::builtin();
        let model = AssetListModel::from_catalog(&catalog);

        assert_eq!(model.len(), catalog.len());
        let keys: Vec<&str> = model.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["bitget", "binance", "upbit"]);
    }

    #[test]
    fn test_empty_catalog_renders_no_cards() {
        let catalog = StaticCatalog::new(Vec::new()).unwrap();
        assert!(AssetListModel::from_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_card_model_fields() {
        let catalog = bitget_only();
        let card = AssetCardModel::from(&catalog.list()[0]);
        assert_eq!(
            card,
            AssetCardModel {
                key: "bitget".to_string(),
                name: "Bitget".to_string(),
                image: "/images/bitget-circle.png".to_string(),
                price_label: "$10,000".to_string(),
                href: "/assets/bitget".to_string(),
            }
        );
    }

    #[test]
    fn test_detail_with_and_without_forwarded_state_agree() {
        let catalog = bitget_only();
        let card = AssetCardModel::from(&catalog.list()[0]);
        let identifier = card.href.trim_start_matches("/assets/");
        let forwarded = catalog.list()[0].clone();

        let via_click = resolve_detail(&catalog, identifier, Some(&forwarded));
        let via_reload = resolve_detail(&catalog, identifier, None);

        assert_eq!(via_click.asset(), via_reload.asset());
        let asset = via_reload.asset().unwrap();
        assert_eq!(asset.name, "Bitget");
        assert_eq!(asset.image, "/images/bitget-circle.png");
        assert!(matches!(via_click, AssetDetailModel::Found { source: DetailSource::Transient, .. }));
        assert!(matches!(via_reload, AssetDetailModel::Found { source: DetailSource::Catalog, .. }));
    }

    #[test]
    fn test_detail_resolves_legacy_name_identifier() {
        let catalog = bitget_only();
        let model = resolve_detail(&catalog, "Bitget", None);
        assert_eq!(model.asset().map(|a| a.slug.as_str()), Some("bitget"));
    }

    #[test]
    fn test_detail_ignores_state_for_another_asset() {
        let catalog = StaticCatalog::builtin();
        let stale = catalog.find_by_slug("binance").unwrap().clone();

        let model = resolve_detail(&catalog, "upbit", Some(&stale));
        assert_eq!(model.asset().map(|a| a.name.as_str()), Some("Upbit"));
    }

    #[test]
    fn test_detail_not_found() {
        let catalog = StaticCatalog::builtin();
        let model = resolve_detail(&catalog, "nonexistent", None);
        assert_eq!(
            model,
            AssetDetailModel::NotFound {
                identifier: "nonexistent".to_string()
            }
        );
        assert!(!model.is_found());
    }

    #[test]
    fn test_detail_price_label() {
        let catalog = StaticCatalog::builtin();
        match resolve_detail(&catalog, "binance", None) {
            AssetDetailModel::Found { price_label, .. } => assert_eq!(price_label, "$10,000"),
            other => panic!("expected asset, got {:?}", other),
        }
    }
}
