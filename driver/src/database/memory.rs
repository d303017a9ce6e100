use kernel::prelude::entity::{BookKey, TrackedBook, User, UserEmail};

use self::table::Table;

mod book;
mod table;
mod user;

/// Catalog state kept for the lifetime of the process.
///
/// Users are keyed by email and books by title and isbn, both in insertion order.
/// Two databases are equal when they hold the same users and the same tracked books,
/// regardless of order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InMemoryDatabase {
    users: Table<UserEmail, User>,
    books: Table<BookKey, TrackedBook>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
