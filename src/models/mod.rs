pub mod catalog;
pub mod product;
pub mod warning;

pub use catalog::*;
pub use product::*;
pub use warning::*;
