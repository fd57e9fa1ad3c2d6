pub mod store;
pub mod tables;
pub mod types;

pub use store::{LocaleError, LocaleStore};
pub use types::{Country, Language};
