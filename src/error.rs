use thiserror::Error;

/// Errors reported by catalog operations.
///
/// Every failure is local: the registry stays usable after any of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A book-to-user assignment referenced an email nobody registered.
    #[error("no user with email {0}")]
    UnknownUser(String),

    /// A rating fell outside the inclusive 0-4 range and was not stored.
    #[error("invalid rating {0}: ratings must be between 0 and 4, inclusive")]
    InvalidRating(f64),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
