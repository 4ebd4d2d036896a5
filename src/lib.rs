// Book Club Catalog - Core Library
// Exposes all modules for use in the demo driver, external drivers, and tests

pub mod catalog;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use catalog::{Catalog, ClubSummary, ReadOutcome, ShelfEntry};
pub use entities::{Book, BookId, BookKind, ReadRecord, User, RATING_MAX, RATING_MIN};
pub use error::{CatalogError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
