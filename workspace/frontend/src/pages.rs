pub mod asset_detail;
pub mod assets;
pub mod home;
pub mod my_page;
pub mod not_found;
