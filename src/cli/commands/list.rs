use anyhow::Result;
use catalog::{AssetCatalog, AssetListModel, CatalogFile};
use tracing::debug;

use crate::cli::ListFormat;
use crate::config::{load_catalog, HostConfig};

pub fn list(config: &HostConfig, format: ListFormat) -> Result<()> {
    let catalog = load_catalog(config)?;
    debug!("Listing {} assets as {:?}", catalog.len(), format);

    let output = match format {
        ListFormat::Table => render_table(&AssetListModel::from_catalog(&catalog)),
        // Same document shape a catalog file uses, so the output can be edited and loaded back
        ListFormat::Json => serde_json::to_string_pretty(&CatalogFile {
            assets: catalog.list().to_vec(),
        })?,
    };

    println!("{}", output);
    Ok(())
}

/// Fixed-width table: one row per card, in catalog order.
pub fn render_table(model: &AssetListModel) -> String {
    let name_width = model
        .cards
        .iter()
        .map(|card| card.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();
    let price_width = model
        .cards
        .iter()
        .map(|card| card.price_label.len())
        .chain(std::iter::once("PRICE".len()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(model.len() + 1);
    lines.push(format!(
        "{:<name_width$}  {:>price_width$}  {}",
        "NAME", "PRICE", "PATH"
    ));
    for card in &model.cards {
        lines.push(format!(
            "{:<name_width$}  {:>price_width$}  {}",
            card.name, card.price_label, card.href
        ));
    }
    lines.join("\n")
}
