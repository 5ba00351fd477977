#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use catalog::{AssetCatalog, StaticCatalog};
    use std::path::Path;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>asset viewer</body></html>";

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that read or mutate process environment variables
    pub fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        AppState {
            catalog: Arc::new(StaticCatalog::builtin()),
        }
    }

    /// Create a static directory shaped like a built viewer: index.html plus every image.
    pub fn setup_static_dir(catalog: &dyn AssetCatalog) -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");

        let images = catalog
            .list()
            .iter()
            .map(|asset| asset.image.clone())
            .chain(std::iter::once("/images/logo.webp".to_string()));
        for image in images {
            write_file(dir.path(), &image, b"image");
        }
        dir
    }

    fn write_file(root: &Path, site_path: &str, contents: &[u8]) {
        let path = root.join(site_path.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create image dir");
        }
        std::fs::write(path, contents).expect("Failed to write file");
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing.
    ///
    /// The returned `TempDir` owns the static files and must outlive the app.
    pub fn setup_test_app() -> (Router, TempDir) {
        let _guard = init_test_tracing();

        let state = setup_test_app_state();
        let static_dir = setup_static_dir(state.catalog.as_ref());
        let router = create_router(state, static_dir.path());
        (router, static_dir)
    }
}
