// 📖 Catalog Registry - The club's single source of truth
//
// Owns every known user and every book anyone has read, and is the only
// component allowed to cross-link the two: recording a read updates the
// user's personal record AND the book's global rating list / read-count in
// one operation.
//
// Both collections preserve insertion order because the aggregate queries
// break ties by first-encountered entry. Lookups are linear; the dataset is
// small by charter.

use serde::{Deserialize, Serialize};

use crate::entities::{Book, BookId, User};
use crate::error::CatalogError;

// ============================================================================
// SHELF
// ============================================================================

/// A registered book plus its global read-count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelfEntry {
    book: Book,
    read_count: u32,
}

impl ShelfEntry {
    fn new(book: Book) -> Self {
        ShelfEntry {
            book,
            read_count: 0,
        }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Number of times any user recorded reading this book.
    pub fn read_count(&self) -> u32 {
        self.read_count
    }
}

// ============================================================================
// READ OUTCOME
// ============================================================================

/// What happened to the rating when a read was recorded.
///
/// A rejected rating is a warning, not a failure: the read itself (the
/// user's record and the read-count) already happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// The read and its rating (possibly absent) were stored everywhere.
    Recorded,

    /// The read was stored, but the out-of-range rating was dropped from
    /// the book's global list. Carries the offending value.
    RatingRejected(f64),
}

// ============================================================================
// CATALOG REGISTRY
// ============================================================================

/// Registry of all users and all read books.
///
/// The catalog is the sole entry point: it creates entities, files users
/// under their email, and maintains the shelf of books-with-read-counts.
/// Books are deliberately NOT registered at creation time; the shelf only
/// gains an entry the first time someone reads the book.
#[derive(Debug, Default)]
pub struct Catalog {
    // Keyed by email (unique; last write wins), insertion-ordered.
    users: Vec<User>,
    // Keyed by book identity (title, isbn), insertion-ordered.
    books: Vec<ShelfEntry>,
}

impl Catalog {
    /// Create an empty registry.
    pub fn new() -> Self {
        Catalog {
            users: Vec::new(),
            books: Vec::new(),
        }
    }

    // ========================================================================
    // FACTORIES (pure - nothing is registered here)
    // ========================================================================

    /// Create a generic book. Not registered until someone reads it.
    pub fn create_book(title: impl Into<String>, isbn: impl Into<String>) -> Book {
        Book::new(title, isbn)
    }

    /// Create a novel. Not registered until someone reads it.
    pub fn create_novel(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Book {
        Book::novel(title, author, isbn)
    }

    /// Create a non-fiction book. Not registered until someone reads it.
    pub fn create_non_fiction(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Book {
        Book::non_fiction(title, subject, level, isbn)
    }

    // ========================================================================
    // REGISTRATION & CROSS-LINKING
    // ========================================================================

    /// Register a user keyed by email, then record each initial book as
    /// read with no rating.
    ///
    /// A colliding email overwrites the existing user in place (last write
    /// wins, original insertion position kept). No duplicate check beyond
    /// the email key.
    pub fn add_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        initial_books: &[Book],
    ) {
        let user = User::new(name, email);
        let pos = match self.users.iter().position(|u| u.email() == user.email()) {
            Some(i) => {
                self.users[i] = user;
                i
            }
            None => {
                self.users.push(user);
                self.users.len() - 1
            }
        };

        for book in initial_books {
            // The user is known to exist, so rejection is impossible here:
            // an absent rating is always valid.
            self.record_read(pos, book, None);
        }
    }

    /// Record that the user filed under `email` read `book`, with an
    /// optional rating.
    ///
    /// On success this mutates three things at once: the user's personal
    /// record (overwritten on re-read), the book's shelf read-count
    /// (incremented on every read), and the book's global rating list
    /// (appended on every read, subject to the 0-4 range rule).
    ///
    /// An unknown email mutates nothing and is a hard error. An
    /// out-of-range rating is a soft outcome: the read stands, only the
    /// global rating append is dropped.
    pub fn add_book_to_user(
        &mut self,
        book: &Book,
        email: &str,
        rating: Option<f64>,
    ) -> Result<ReadOutcome, CatalogError> {
        let pos = self
            .users
            .iter()
            .position(|u| u.email() == email)
            .ok_or_else(|| CatalogError::UnknownUser(email.to_string()))?;

        Ok(self.record_read(pos, book, rating))
    }

    /// Shared read path for `add_user` and `add_book_to_user`.
    /// `user_pos` must be a valid index into `self.users`.
    fn record_read(&mut self, user_pos: usize, book: &Book, rating: Option<f64>) -> ReadOutcome {
        self.users[user_pos].read_book(book.id(), rating);

        let shelf_pos = match self.books.iter().position(|e| e.book == *book) {
            Some(i) => i,
            None => {
                // First read: the shelf takes its own copy of the book.
                self.books.push(ShelfEntry::new(book.clone()));
                self.books.len() - 1
            }
        };

        let entry = &mut self.books[shelf_pos];
        entry.read_count += 1;
        match entry.book.add_rating(rating) {
            Ok(()) => ReadOutcome::Recorded,
            Err(CatalogError::InvalidRating(value)) => ReadOutcome::RatingRejected(value),
            // add_rating only ever reports InvalidRating
            Err(_) => ReadOutcome::Recorded,
        }
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Find a user by email.
    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email() == email)
    }

    /// All registered users, in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All shelf entries, in first-read order.
    pub fn shelf(&self) -> &[ShelfEntry] {
        &self.books
    }

    /// Read-count for a book, 0 when nobody has read it.
    pub fn read_count(&self, id: &BookId) -> u32 {
        self.books
            .iter()
            .find(|e| e.book.id() == *id)
            .map(|e| e.read_count)
            .unwrap_or(0)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    // ========================================================================
    // AGGREGATE STATISTICS
    // ========================================================================

    /// The book with the strictly highest read-count.
    ///
    /// Ties keep the first-encountered entry in shelf order. `None` when
    /// the shelf is empty.
    pub fn most_read_book(&self) -> Option<&Book> {
        let mut best: Option<&Book> = None;
        let mut max_reads = 0u32;
        for entry in &self.books {
            if entry.read_count > max_reads {
                max_reads = entry.read_count;
                best = Some(&entry.book);
            }
        }
        best
    }

    /// The book with the strictly highest average rating, among books with
    /// at least one present rating.
    ///
    /// Unrated books are skipped entirely; ties keep the first-encountered
    /// entry. The running maximum starts at zero with a strictly-greater
    /// comparison, so a book whose true average is 0.0 is never selected.
    /// That exclusion is retained for compatibility with the legacy
    /// behavior; see DESIGN.md.
    pub fn highest_rated_book(&self) -> Option<&Book> {
        let mut best: Option<&Book> = None;
        let mut max_average = 0.0;
        for entry in &self.books {
            if let Some(average) = entry.book.average_rating() {
                if average > max_average {
                    max_average = average;
                    best = Some(&entry.book);
                }
            }
        }
        best
    }

    /// The user with the strictly highest average rating, among users who
    /// have rated at least one book.
    ///
    /// Same zero-start comparison as `highest_rated_book`: a user whose
    /// true average is 0.0 is never selected.
    pub fn most_positive_user(&self) -> Option<&User> {
        let mut best: Option<&User> = None;
        let mut max_average = 0.0;
        for user in &self.users {
            if let Some(average) = user.average_rating() {
                if average > max_average {
                    max_average = average;
                    best = Some(user);
                }
            }
        }
        best
    }

    /// Build the serializable aggregate report.
    pub fn summary(&self) -> ClubSummary {
        ClubSummary {
            total_users: self.users.len(),
            total_books: self.books.len(),
            total_reads: self.books.iter().map(|e| e.read_count as u64).sum(),
            most_read_book: self.most_read_book().map(|b| b.to_string()),
            highest_rated_book: self.highest_rated_book().map(|b| b.to_string()),
            most_positive_user: self.most_positive_user().map(|u| u.to_string()),
        }
    }

    // ========================================================================
    // LISTINGS (advisory output)
    // ========================================================================

    /// Print every registered book, in first-read order.
    pub fn print_catalog(&self) {
        for entry in &self.books {
            println!("{}", entry.book);
        }
    }

    /// Print every registered user, in registration order.
    pub fn print_users(&self) {
        for user in &self.users {
            println!("{}", user);
        }
    }
}

// ============================================================================
// SUMMARY REPORT
// ============================================================================

/// Aggregate snapshot of the whole club, ready for JSON rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSummary {
    pub total_users: usize,
    pub total_books: usize,
    pub total_reads: u64,
    pub most_read_book: Option<String>,
    pub highest_rated_book: Option<String>,
    pub most_positive_user: Option<String>,
}

impl ClubSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} user(s), {} book(s), {} read(s); most read: {}; highest rated: {}; most positive: {}",
            self.total_users,
            self.total_books,
            self.total_reads,
            self.most_read_book.as_deref().unwrap_or("n/a"),
            self.highest_rated_book.as_deref().unwrap_or("n/a"),
            self.most_positive_user.as_deref().unwrap_or("n/a"),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
