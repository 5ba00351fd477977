use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::Json,
};
use catalog::CatalogError;
use tracing::{debug, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, AssetResponse, ErrorResponse};

/// List every asset in catalog order
#[utoipa::path(
    get,
    path = "/api/v1/assets",
    tag = "assets",
    responses(
        (status = 200, description = "Assets retrieved successfully", body = AssetListEnvelope),
    )
)]
#[instrument]
pub async fn get_assets(State(state): State<AppState>) -> Json<ApiResponse<Vec<AssetResponse>>> {
    trace!("Entering get_assets function");

    let assets: Vec<AssetResponse> = state
        .catalog
        .list()
        .iter()
        .map(AssetResponse::from)
        .collect();

    info!("Successfully retrieved {} assets", assets.len());
    Json(ApiResponse {
        data: assets,
        message: "Assets retrieved successfully".to_string(),
        success: true,
    })
}

/// Get one asset by slug (or by display name)
#[utoipa::path(
    get,
    path = "/api/v1/assets/{identifier}",
    tag = "assets",
    params(
        ("identifier" = String, Path, description = "Asset slug or display name"),
    ),
    responses(
        (status = 200, description = "Asset retrieved successfully", body = AssetEnvelope),
        (status = 404, description = "Asset not found", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_asset(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AssetResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_asset function for identifier: {}", identifier);

    match state.catalog.resolve(&identifier) {
        Ok(asset) => {
            debug!("Resolved '{}' to asset slug '{}'", identifier, asset.slug);
            Ok(Json(ApiResponse {
                data: AssetResponse::from(asset),
                message: "Asset retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(err) => {
            warn!("Asset lookup failed: {}", err);
            Err(not_found_response(&err))
        }
    }
}

/// Unknown paths under `/api` answer with JSON instead of the viewer page
#[instrument]
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No API route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No API route for {}", uri.path()),
            code: "ROUTE_NOT_FOUND".to_string(),
            success: false,
        }),
    )
}

fn not_found_response(err: &CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: err.to_string(),
            code: "ASSET_NOT_FOUND".to_string(),
            success: false,
        }),
    )
}
