mod loader;

pub use loader::{QuoteLoader, QuoteLoaderError, QuoteRequestRecord, QuoteResultRecord};
