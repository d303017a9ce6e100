use crate::entity::{BookKey, Isbn, TrackedBook};
use crate::KernelError;

pub trait BookQuery: 'static {
    fn find_by_key(&self, key: &BookKey) -> error_stack::Result<Option<TrackedBook>, KernelError>;
    fn find_by_isbn(&self, isbn: &Isbn) -> error_stack::Result<Option<TrackedBook>, KernelError>;
    /// Every tracked book in the order it was first read.
    fn find_all(&self) -> error_stack::Result<Vec<TrackedBook>, KernelError>;
}

pub trait DependOnBookQuery: 'static {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}

impl<T> DependOnBookQuery for T
where
    T: BookQuery,
{
    type BookQuery = T;
    fn book_query(&self) -> &Self::BookQuery {
        self
    }
}
