pub mod asset_card;
pub mod asset_list;

pub use asset_list::AssetList;
