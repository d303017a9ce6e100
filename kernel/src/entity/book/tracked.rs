use destructure::Destructure;
use vodca::References;

use crate::entity::{Book, BookKey, Isbn, Rating, ReadCount};

/// A book the catalog knows about, with how often it has been read.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct TrackedBook {
    book: Book,
    read_count: ReadCount,
}

impl TrackedBook {
    pub fn new(book: Book, read_count: ReadCount) -> Self {
        Self { book, read_count }
    }

    pub fn key(&self) -> BookKey {
        self.book.key()
    }

    pub fn mark_read(&mut self) -> ReadCount {
        self.read_count.increment();
        self.read_count
    }

    pub fn rate(&mut self, rating: Rating) {
        self.book.rate(rating);
    }

    pub fn change_isbn(&mut self, isbn: Isbn) -> BookKey {
        self.book.set_isbn(isbn);
        self.book.key()
    }
}
