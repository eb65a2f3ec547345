mod command;
pub mod export;
pub mod filter;
mod notifier;
mod query;
mod types;

pub use command::*;
pub use export::CsvExport;
pub use filter::{AdminView, StatusFilter};
pub use notifier::*;
pub use query::*;
pub use types::*;
