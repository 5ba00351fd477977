//! Asset catalog shared between the host and the browser viewer.
//! Holds the asset model, the read-only catalog contract, price formatting
//! and the view models both list and detail pages render from.

mod asset;
mod catalog;
mod error;
mod format;
mod view;

pub use asset::{Asset, CatalogFile, image_path_for};
pub use catalog::{AssetCatalog, StaticCatalog};
pub use error::CatalogError;
pub use format::{format_usd, group_thousands};
pub use view::{AssetCardModel, AssetDetailModel, AssetListModel, DetailSource, resolve_detail};
