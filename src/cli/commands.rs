pub mod check;
pub mod list;
pub mod serve;

pub use check::check;
pub use list::list;
pub use serve::serve;
