pub mod document;
pub mod pallets;

pub use document::*;
pub use pallets::*;
