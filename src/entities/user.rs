// 👤 User Entity - Name, email, and a personal reading record
//
// The email is the unique key the registry files users under. The reading
// record maps book identity to the rating THIS user gave, independent of the
// book's own global rating list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::book::BookId;

/// One entry in a user's reading record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadRecord {
    pub book: BookId,
    /// `None` means the user read the book without giving an opinion.
    pub rating: Option<f64>,
}

/// A member of the club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    // Keyed by BookId; insertion-ordered so listings are stable.
    books: Vec<ReadRecord>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            books: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the email, returning the previous address so the caller can
    /// report the change as old → new.
    pub fn change_email(&mut self, new_email: impl Into<String>) -> String {
        std::mem::replace(&mut self.email, new_email.into())
    }

    /// Record that this user read a book, with an optional rating.
    ///
    /// Re-reading the same book overwrites the stored rating; the record is
    /// never duplicated. The rating is stored as given: range checking
    /// belongs to the book's global list, not the personal record.
    pub fn read_book(&mut self, book: BookId, rating: Option<f64>) {
        if let Some(record) = self.books.iter_mut().find(|r| r.book == book) {
            record.rating = rating;
        } else {
            self.books.push(ReadRecord { book, rating });
        }
    }

    /// The rating this user gave a book. Outer `None` means the user never
    /// read it; `Some(None)` means read without an opinion.
    pub fn rating_for(&self, book: &BookId) -> Option<Option<f64>> {
        self.books
            .iter()
            .find(|r| r.book == *book)
            .map(|r| r.rating)
    }

    /// Number of books in this user's reading record.
    pub fn books_read(&self) -> usize {
        self.books.len()
    }

    /// This user's reading record, in the order books were first read.
    pub fn records(&self) -> &[ReadRecord] {
        &self.books
    }

    /// Arithmetic mean over this user's present ratings only.
    ///
    /// Returns `None` when the user has rated nothing, so callers can tell
    /// "no opinion yet" apart from an average of zero.
    pub fn average_rating(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for record in &self.books {
            if let Some(rating) = record.rating {
                sum += rating;
                count += 1;
            }
        }
        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }
}

// Duplicate users are ones sharing both name and email.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> - {} book(s) read",
            self.name,
            self.email,
            self.books.len()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookId {
        BookId::new("Dune", "111")
    }

    fn emma() -> BookId {
        BookId::new("Emma", "222")
    }

    #[test]
    fn test_read_book_records_rating() {
        let mut alice = User::new("Alice", "alice@x.com");
        alice.read_book(dune(), Some(4.0));

        assert_eq!(alice.books_read(), 1);
        assert_eq!(alice.rating_for(&dune()), Some(Some(4.0)));
        assert_eq!(alice.rating_for(&emma()), None);
    }

    #[test]
    fn test_reread_overwrites_instead_of_duplicating() {
        let mut alice = User::new("Alice", "alice@x.com");
        alice.read_book(dune(), Some(2.0));
        alice.read_book(dune(), Some(4.0));

        assert_eq!(alice.books_read(), 1);
        assert_eq!(alice.rating_for(&dune()), Some(Some(4.0)));

        // Re-reading can also drop the opinion
        alice.read_book(dune(), None);
        assert_eq!(alice.books_read(), 1);
        assert_eq!(alice.rating_for(&dune()), Some(None));
    }

    #[test]
    fn test_average_excludes_absent_ratings() {
        let mut alice = User::new("Alice", "alice@x.com");
        alice.read_book(dune(), Some(4.0));
        alice.read_book(emma(), None);

        assert_eq!(alice.average_rating(), Some(4.0));
    }

    #[test]
    fn test_average_with_no_present_ratings_is_none() {
        let mut alice = User::new("Alice", "alice@x.com");
        assert_eq!(alice.average_rating(), None);

        alice.read_book(dune(), None);
        assert_eq!(alice.average_rating(), None);
    }

    #[test]
    fn test_change_email_returns_previous_address() {
        let mut alice = User::new("Alice", "alice@x.com");
        let old = alice.change_email("alice@y.com");

        assert_eq!(old, "alice@x.com");
        assert_eq!(alice.email(), "alice@y.com");
    }

    #[test]
    fn test_equality_requires_name_and_email() {
        let a = User::new("Alice", "alice@x.com");
        let same = User::new("Alice", "alice@x.com");
        let other_email = User::new("Alice", "alice@y.com");
        let other_name = User::new("Alicia", "alice@x.com");

        assert_eq!(a, same);
        assert_ne!(a, other_email);
        assert_ne!(a, other_name);
    }

    #[test]
    fn test_display_shows_name_email_and_count() {
        let mut alice = User::new("Alice", "alice@x.com");
        alice.read_book(dune(), None);
        assert_eq!(alice.to_string(), "Alice <alice@x.com> - 1 book(s) read");
    }
}
