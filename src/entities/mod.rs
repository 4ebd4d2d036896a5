// Entity Models
//
// Each entity has:
// - Stable identity (email for users, title+isbn for books)
// - Values that change over its lifetime (ratings, reading records)
// The Catalog registry owns all instances and performs the cross-linking.

pub mod book;
pub mod user;

pub use book::{Book, BookId, BookKind, RATING_MAX, RATING_MIN};
pub use user::{ReadRecord, User};
