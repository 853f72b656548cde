pub mod models;
pub mod registry;

pub use models::{Account, AccountView, SortMode};
pub use registry::{AccountError, AccountRegistry};
