use crate::entity::{Book, BookKey, Isbn, Rating, ReadCount};
use crate::KernelError;

pub trait BookModifier: 'static {
    /// Starts tracking the book at a count of one, or bumps the count of the tracked copy.
    fn record_read(&mut self, book: &Book) -> error_stack::Result<ReadCount, KernelError>;
    fn add_rating(&mut self, key: &BookKey, rating: Rating)
        -> error_stack::Result<(), KernelError>;
    /// Rekeys a tracked book in place and returns its new key.
    fn change_isbn(
        &mut self,
        key: &BookKey,
        isbn: Isbn,
    ) -> error_stack::Result<BookKey, KernelError>;
}

pub trait DependOnBookModifier: 'static {
    type BookModifier: BookModifier;
    fn book_modifier(&mut self) -> &mut Self::BookModifier;
}

impl<T> DependOnBookModifier for T
where
    T: BookModifier,
{
    type BookModifier = T;
    fn book_modifier(&mut self) -> &mut Self::BookModifier {
        self
    }
}
