#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ApiResponse, AssetResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.assets, 3);
    }

    #[tokio::test]
    async fn test_get_assets_in_catalog_order() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/assets").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<AssetResponse>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Assets retrieved successfully");
        let slugs: Vec<&str> = body.data.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["bitget", "binance", "upbit"]);
        assert!(body.data.iter().all(|a| a.price_label == "$10,000"));
    }

    #[tokio::test]
    async fn test_get_asset_by_slug() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/assets/bitget").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<AssetResponse> = response.json();
        assert!(body.success);
        assert_eq!(body.data.name, "Bitget");
        assert_eq!(body.data.image, "/images/bitget-circle.png");
        assert_eq!(body.data.href, "/assets/bitget");
    }

    #[tokio::test]
    async fn test_get_asset_by_display_name() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/assets/Binance").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<AssetResponse> = response.json();
        assert_eq!(body.data.slug, "binance");
    }

    #[tokio::test]
    async fn test_get_asset_not_found() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/assets/nonexistent").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "ASSET_NOT_FOUND");
        assert_eq!(body.error, "asset 'nonexistent' not found");
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_json_404() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v2/whatever").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "ROUTE_NOT_FOUND");
        assert!(body.error.contains("/api/v2/whatever"));
    }

    #[tokio::test]
    async fn test_deep_link_serves_viewer_index() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        for path in ["/", "/assets", "/assets/bitget", "/mypage", "/unknown/path"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), INDEX_HTML, "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_serves_asset_images() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/images/upbit-circle.png").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "image");
    }

    #[tokio::test]
    async fn test_missing_image_is_404_not_viewer_index() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/images/nope-circle.png").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_ne!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_asset_routes() {
        let (app, _static_dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"]["/api/v1/assets"].is_object());
        assert!(doc["paths"]["/api/v1/assets/{identifier}"].is_object());
        assert!(doc["paths"]["/health"].is_object());
    }
}
