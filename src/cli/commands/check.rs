use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use catalog::{Asset, AssetCatalog};
use tracing::{debug, info, warn};

use crate::config::{load_catalog, HostConfig};

/// Site-wide image the header always renders
pub const LOGO_IMAGE: &str = "/images/logo.webp";

/// An image path that does not resolve to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingImage {
    /// Asset name, or `None` for site-wide images
    pub asset: Option<String>,
    pub image: String,
    pub resolved: PathBuf,
}

pub fn check(config: &HostConfig) -> Result<()> {
    // Loading validates names, slugs, prices and image paths
    let catalog = load_catalog(config)?;
    info!("Catalog is valid: {} assets", catalog.len());

    let missing = find_missing_images(catalog.list(), &config.static_dir);
    if missing.is_empty() {
        println!(
            "OK: {} assets, all images present under {}",
            catalog.len(),
            config.static_dir.display()
        );
        return Ok(());
    }

    for item in &missing {
        match &item.asset {
            Some(name) => println!("missing image for {}: {} ({})", name, item.image, item.resolved.display()),
            None => println!("missing site image: {} ({})", item.image, item.resolved.display()),
        }
    }
    bail!("{} image(s) missing under {}", missing.len(), config.static_dir.display())
}

/// Resolve a site-absolute image path (`/images/x.png`) under `static_dir`.
pub fn resolve_image(static_dir: &Path, image: &str) -> PathBuf {
    static_dir.join(image.trim_start_matches('/'))
}

pub fn find_missing_images(assets: &[Asset], static_dir: &Path) -> Vec<MissingImage> {
    let site_images = std::iter::once((None, LOGO_IMAGE));
    let asset_images = assets
        .iter()
        .map(|asset| (Some(asset.name.as_str()), asset.image.as_str()));

    site_images
        .chain(asset_images)
        .filter_map(|(asset, image)| {
            let resolved = resolve_image(static_dir, image);
            if resolved.is_file() {
                debug!("Found image {}", resolved.display());
                None
            } else {
                warn!("Image {} does not exist", resolved.display());
                Some(MissingImage {
                    asset: asset.map(str::to_string),
                    image: image.to_string(),
                    resolved,
                })
            }
        })
        .collect()
}
