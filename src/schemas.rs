use std::fmt;
use std::sync::Arc;

use catalog::{Asset, AssetCatalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only asset catalog
    pub catalog: Arc<dyn AssetCatalog + Send + Sync>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("assets", &self.catalog.len())
            .finish()
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(AssetListEnvelope = ApiResponse<Vec<AssetResponse>>, AssetEnvelope = ApiResponse<AssetResponse>)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of assets in the served catalog
    pub assets: usize,
}

/// Asset as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssetResponse {
    /// Display name
    pub name: String,
    /// Canonical identifier used in routes
    pub slug: String,
    /// Thumbnail image path
    pub image: String,
    /// Price in US dollars
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub usd: Decimal,
    /// Price formatted for display, e.g. "$10,000"
    pub price_label: String,
    /// Viewer page for this asset
    pub href: String,
}

impl From<&Asset> for AssetResponse {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            slug: asset.slug.clone(),
            image: asset.image.clone(),
            usd: asset.usd,
            price_label: asset.price_label(),
            href: asset.detail_path(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::assets::get_assets,
        crate::handlers::assets::get_asset,
    ),
    components(
        schemas(
            AssetListEnvelope,
            AssetEnvelope,
            AssetResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Read-only asset catalog endpoints"),
    ),
    info(
        title = "Asset Viewer API",
        description = "Read-only access to the digital asset catalog served with the viewer",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
