// 📚 Book Entity - Shared identity + a closed set of variants
//
// A book's identity is the pair (title, isbn); everything else is a value
// that can change. Fiction and Non-Fiction are variants of the same entity,
// not separate types: the variant set is fixed and small, so dispatch is on
// a tag rather than a trait object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::CatalogError;

/// Inclusive bounds for a valid rating.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 4.0;

// ============================================================================
// BOOK IDENTITY
// ============================================================================

/// Composite identity of a book: title + ISBN.
///
/// This is the key type everywhere a book is referenced without being owned
/// (user reading records, shelf lookups). Variant payloads and ratings never
/// participate in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId {
    pub title: String,
    pub isbn: String,
}

impl BookId {
    pub fn new(title: impl Into<String>, isbn: impl Into<String>) -> Self {
        BookId {
            title: title.into(),
            isbn: isbn.into(),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ISBN {})", self.title, self.isbn)
    }
}

// ============================================================================
// BOOK VARIANTS
// ============================================================================

/// Closed set of book variants with their payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookKind {
    /// Plain catalog entry with no extra payload
    Generic,

    /// Novel with a named author
    Fiction { author: String },

    /// Manual on a subject at a free-form level ("beginner", "advanced", ...)
    NonFiction { subject: String, level: String },
}

impl BookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookKind::Generic => "Generic",
            BookKind::Fiction { .. } => "Fiction",
            BookKind::NonFiction { .. } => "Non-Fiction",
        }
    }
}

// ============================================================================
// BOOK ENTITY
// ============================================================================

/// A book in the club's catalog.
///
/// Holds the identity fields, the variant payload, and the global rating
/// list. An entry in `ratings` may be `None`: someone read the book without
/// giving an opinion, and that still counts as a read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    isbn: String,
    kind: BookKind,
    ratings: Vec<Option<f64>>,
}

impl Book {
    /// Create a generic book.
    pub fn new(title: impl Into<String>, isbn: impl Into<String>) -> Self {
        Book {
            title: title.into(),
            isbn: isbn.into(),
            kind: BookKind::Generic,
            ratings: Vec::new(),
        }
    }

    /// Create a novel (Fiction variant).
    pub fn novel(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            isbn: isbn.into(),
            kind: BookKind::Fiction {
                author: author.into(),
            },
            ratings: Vec::new(),
        }
    }

    /// Create a non-fiction book.
    pub fn non_fiction(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            isbn: isbn.into(),
            kind: BookKind::NonFiction {
                subject: subject.into(),
                level: level.into(),
            },
            ratings: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn kind(&self) -> &BookKind {
        &self.kind
    }

    /// Identity key for this book.
    pub fn id(&self) -> BookId {
        BookId::new(self.title.clone(), self.isbn.clone())
    }

    /// Author, for Fiction books only.
    pub fn author(&self) -> Option<&str> {
        match &self.kind {
            BookKind::Fiction { author } => Some(author),
            _ => None,
        }
    }

    /// Subject, for Non-Fiction books only.
    pub fn subject(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Level, for Non-Fiction books only.
    pub fn level(&self) -> Option<&str> {
        match &self.kind {
            BookKind::NonFiction { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Replace the ISBN, returning the previous one so the caller can
    /// report the change. No uniqueness or format validation.
    pub fn set_isbn(&mut self, new_isbn: impl Into<String>) -> String {
        std::mem::replace(&mut self.isbn, new_isbn.into())
    }

    /// All ratings recorded against this book, in arrival order.
    /// `None` entries are reads without an opinion.
    pub fn ratings(&self) -> &[Option<f64>] {
        &self.ratings
    }

    /// Append a rating to this book's list.
    ///
    /// An absent rating is always recorded (as `None`). A present rating is
    /// recorded only when it lies in [0, 4]; out-of-range values (NaN
    /// included) are dropped and reported as `InvalidRating`. The list is
    /// never left in a partial state.
    pub fn add_rating(&mut self, rating: Option<f64>) -> Result<(), CatalogError> {
        match rating {
            None => {
                self.ratings.push(None);
                Ok(())
            }
            Some(value) if (RATING_MIN..=RATING_MAX).contains(&value) => {
                self.ratings.push(Some(value));
                Ok(())
            }
            Some(value) => Err(CatalogError::InvalidRating(value)),
        }
    }

    /// Arithmetic mean over the present ratings only.
    ///
    /// Returns `None` when no present rating exists. Callers must treat an
    /// absent result as "book unrated", not as zero.
    pub fn average_rating(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for rating in self.ratings.iter().flatten() {
            sum += rating;
            count += 1;
        }
        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }
}

// Identity is (title, isbn); kind and ratings are values.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BookKind::Generic => write!(f, "{} having ISBN {}", self.title, self.isbn),
            BookKind::Fiction { author } => write!(f, "{} by {}", self.title, author),
            BookKind::NonFiction { subject, level } => {
                write!(f, "{}, a {} manual on {}", self.title, level, subject)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rating_appends_and_updates_average() {
        let mut book = Book::new("Dune", "111");
        assert_eq!(book.ratings().len(), 0);

        book.add_rating(Some(4.0)).unwrap();
        assert_eq!(book.ratings().len(), 1);
        assert_eq!(book.average_rating(), Some(4.0));

        book.add_rating(Some(2.0)).unwrap();
        assert_eq!(book.ratings().len(), 2);
        assert_eq!(book.average_rating(), Some(3.0));
    }

    #[test]
    fn test_boundary_ratings_accepted() {
        let mut book = Book::new("Dune", "111");
        book.add_rating(Some(0.0)).unwrap();
        book.add_rating(Some(4.0)).unwrap();
        assert_eq!(book.ratings().len(), 2);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut book = Book::new("Dune", "111");
        book.add_rating(Some(3.0)).unwrap();

        let err = book.add_rating(Some(5.0)).unwrap_err();
        assert_eq!(err, CatalogError::InvalidRating(5.0));
        assert_eq!(book.ratings().len(), 1);

        let err = book.add_rating(Some(-1.0)).unwrap_err();
        assert_eq!(err, CatalogError::InvalidRating(-1.0));
        assert_eq!(book.ratings().len(), 1);
        assert_eq!(book.average_rating(), Some(3.0));
    }

    #[test]
    fn test_nan_rating_rejected() {
        let mut book = Book::new("Dune", "111");
        assert!(book.add_rating(Some(f64::NAN)).is_err());
        assert_eq!(book.ratings().len(), 0);
    }

    #[test]
    fn test_absent_rating_recorded_but_excluded_from_average() {
        let mut book = Book::new("Dune", "111");
        book.add_rating(None).unwrap();
        book.add_rating(Some(4.0)).unwrap();
        book.add_rating(None).unwrap();

        // Three reads recorded, only the present one counts toward the mean
        assert_eq!(book.ratings().len(), 3);
        assert_eq!(book.average_rating(), Some(4.0));
    }

    #[test]
    fn test_average_of_unrated_book_is_none() {
        let book = Book::new("Dune", "111");
        assert_eq!(book.average_rating(), None);

        let mut read_without_opinion = Book::new("Emma", "222");
        read_without_opinion.add_rating(None).unwrap();
        assert_eq!(read_without_opinion.average_rating(), None);
    }

    #[test]
    fn test_equality_ignores_kind_and_ratings() {
        let generic = Book::new("Dune", "111");
        let mut rated = Book::novel("Dune", "Frank Herbert", "111");
        rated.add_rating(Some(4.0)).unwrap();

        assert_eq!(generic, rated);

        let other_isbn = Book::new("Dune", "999");
        assert_ne!(generic, other_isbn);

        let other_title = Book::new("Dune Messiah", "111");
        assert_ne!(generic, other_title);
    }

    #[test]
    fn test_set_isbn_returns_previous_value() {
        let mut book = Book::new("Dune", "111");
        let old = book.set_isbn("222");
        assert_eq!(old, "111");
        assert_eq!(book.isbn(), "222");
        assert_eq!(book.id(), BookId::new("Dune", "222"));
    }

    #[test]
    fn test_variant_accessors() {
        let generic = Book::new("Dune", "111");
        assert_eq!(generic.author(), None);
        assert_eq!(generic.subject(), None);
        assert_eq!(generic.level(), None);

        let novel = Book::novel("Dune", "Frank Herbert", "111");
        assert_eq!(novel.author(), Some("Frank Herbert"));
        assert_eq!(novel.subject(), None);

        let manual = Book::non_fiction("Knots", "rigging", "beginner", "333");
        assert_eq!(manual.subject(), Some("rigging"));
        assert_eq!(manual.level(), Some("beginner"));
        assert_eq!(manual.author(), None);
    }

    #[test]
    fn test_display_per_variant() {
        let generic = Book::new("Dune", "111");
        assert_eq!(generic.to_string(), "Dune having ISBN 111");

        let novel = Book::novel("Dune", "Frank Herbert", "111");
        assert_eq!(novel.to_string(), "Dune by Frank Herbert");

        let manual = Book::non_fiction("Knots", "rigging", "beginner", "333");
        assert_eq!(manual.to_string(), "Knots, a beginner manual on rigging");
    }
}
