pub mod calculations;
pub mod models;
pub mod output;
pub mod quote;
pub mod summary;
pub mod wizard;

pub use models::*;
pub use quote::{IncompleteQuote, Quote};
pub use wizard::{QuoteSession, Step};
