use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_usd;

/// A single catalog entry.
///
/// This is also the shape forwarded from the list page to the detail page
/// as navigation state, so it stays a plain serializable record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Display name, unique within a catalog
    pub name: String,
    /// Canonical URL-safe identifier used in routes
    pub slug: String,
    /// Path of the thumbnail image
    pub image: String,
    /// Price in US dollars
    #[serde(with = "rust_decimal::serde::float")]
    pub usd: Decimal,
}

impl Asset {
    /// Create an asset whose image follows the `/images/<slug>-circle.png` convention.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, usd: Decimal) -> Self {
        let slug = slug.into();
        Self {
            name: name.into(),
            image: image_path_for(&slug),
            slug,
            usd,
        }
    }

    /// Path of the detail page for this asset
    pub fn detail_path(&self) -> String {
        format!("/assets/{}", self.slug)
    }

    pub fn price_label(&self) -> String {
        format_usd(self.usd)
    }

    /// Whether `identifier` addresses this asset, by slug or by display name.
    pub fn is_addressed_by(&self, identifier: &str) -> bool {
        self.slug == identifier || self.name == identifier
    }
}

/// Conventional thumbnail path for a slug.
pub fn image_path_for(slug: &str) -> String {
    format!("/images/{}-circle.png", slug)
}

/// On-disk catalog document: `assets: [ {name, slug, image, usd}, ... ]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub assets: Vec<Asset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_slug_for_image() {
        let asset = Asset::new("Bitget", "bitget", Decimal::from(10000));
        assert_eq!(asset.image, "/images/bitget-circle.png");
        assert_eq!(asset.detail_path(), "/assets/bitget");
        assert_eq!(asset.price_label(), "$10,000");
    }

    #[test]
    fn test_is_addressed_by_slug_or_name() {
        let asset = Asset::new("Bitget", "bitget", Decimal::ONE);
        assert!(asset.is_addressed_by("bitget"));
        assert!(asset.is_addressed_by("Bitget"));
        assert!(!asset.is_addressed_by("BITGET"));
        assert!(!asset.is_addressed_by("binance"));
    }

    #[test]
    fn test_serializes_usd_as_number() {
        let asset = Asset::new("Upbit", "upbit", Decimal::from(10000));
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["usd"], serde_json::json!(10000.0));
        assert_eq!(json["image"], "/images/upbit-circle.png");

        let parsed: Asset = serde_json::from_value(serde_json::json!({
            "name": "Upbit",
            "slug": "upbit",
            "image": "/images/upbit-circle.png",
            "usd": 10000
        }))
        .unwrap();
        assert_eq!(parsed, asset);
    }
}
