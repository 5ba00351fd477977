use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use crate::asset::Asset;
use crate::error::CatalogError;

/// Read-only collection of assets with lookups by identifier.
///
/// Views and handlers receive a catalog through injection and only ever
/// talk to this trait, so the built-in list can be replaced by a loaded one
/// without touching them.
pub trait AssetCatalog {
    /// All assets, in stable insertion order
    fn list(&self) -> &[Asset];

    /// Exact match on the display name
    fn find_by_name(&self, name: &str) -> Result<&Asset, CatalogError> {
        trace!("Looking up asset by name: {}", name);
        self.list()
            .iter()
            .find(|asset| asset.name == name)
            .ok_or_else(|| {
                debug!("No asset named '{}'", name);
                CatalogError::not_found(name)
            })
    }

    /// Exact match on the canonical slug
    fn find_by_slug(&self, slug: &str) -> Result<&Asset, CatalogError> {
        trace!("Looking up asset by slug: {}", slug);
        self.list()
            .iter()
            .find(|asset| asset.slug == slug)
            .ok_or_else(|| {
                debug!("No asset with slug '{}'", slug);
                CatalogError::not_found(slug)
            })
    }

    /// Resolve a route identifier: slug first, then display name.
    fn resolve(&self, identifier: &str) -> Result<&Asset, CatalogError> {
        self.find_by_slug(identifier)
            .or_else(|_| self.find_by_name(identifier))
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Catalog entries compiled into the binary: (name, slug, usd).
const BUILTIN_ASSETS: &[(&str, &str, i64)] = &[
    ("Bitget", "bitget", 10000),
    ("Binance", "binance", 10000),
    ("Upbit", "upbit", 10000),
];

/// Fixed, validated list of assets. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    assets: Vec<Asset>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting data that breaks lookup or rendering.
    pub fn new(assets: Vec<Asset>) -> Result<Self, CatalogError> {
        validate(&assets)?;
        debug!("Catalog built with {} assets", assets.len());
        Ok(Self { assets })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let assets = BUILTIN_ASSETS
            .iter()
            .map(|(name, slug, usd)| Asset::new(*name, *slug, Decimal::from(*usd)))
            .collect();
        Self { assets }
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetCatalog for StaticCatalog {
    fn list(&self) -> &[Asset] {
        &self.assets
    }
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn validate(assets: &[Asset]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    let mut slugs = HashSet::new();

    for asset in assets {
        if !names.insert(asset.name.as_str()) {
            warn!("Rejecting catalog: duplicate name '{}'", asset.name);
            return Err(CatalogError::DuplicateName(asset.name.clone()));
        }
        if !is_url_safe_slug(&asset.slug) {
            warn!("Rejecting catalog: invalid slug '{}'", asset.slug);
            return Err(CatalogError::InvalidSlug(asset.slug.clone()));
        }
        if !slugs.insert(asset.slug.as_str()) {
            warn!("Rejecting catalog: duplicate slug '{}'", asset.slug);
            return Err(CatalogError::DuplicateSlug(asset.slug.clone()));
        }
        if asset.usd.is_sign_negative() && !asset.usd.is_zero() {
            return Err(CatalogError::NegativePrice {
                name: asset.name.clone(),
                usd: asset.usd,
            });
        }
        if asset.image.trim().is_empty() {
            return Err(CatalogError::MissingImage(asset.name.clone()));
        }
    }

    Ok(())
}
