pub mod assets;
pub mod layout;
