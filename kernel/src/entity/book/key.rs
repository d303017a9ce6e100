use vodca::References;

use crate::entity::{BookTitle, Isbn};

/// Identity of a book: two books are the same book when title and isbn match.
#[derive(Debug, Clone, Eq, PartialEq, Hash, References)]
pub struct BookKey {
    title: BookTitle,
    isbn: Isbn,
}

impl BookKey {
    pub fn new(title: BookTitle, isbn: Isbn) -> Self {
        Self { title, isbn }
    }
}
