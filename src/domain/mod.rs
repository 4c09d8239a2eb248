pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod report;
pub mod window;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use expense::*;
pub use report::*;
pub use window::*;
