use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookKey, Isbn, Rating, ReadCount, TrackedBook};
use kernel::KernelError;

use crate::database::InMemoryDatabase;

impl BookQuery for InMemoryDatabase {
    fn find_by_key(&self, key: &BookKey) -> error_stack::Result<Option<TrackedBook>, KernelError> {
        Ok(self.books.get(key).cloned())
    }

    fn find_by_isbn(&self, isbn: &Isbn) -> error_stack::Result<Option<TrackedBook>, KernelError> {
        Ok(self
            .books
            .values()
            .find(|tracked| tracked.book().isbn() == isbn)
            .cloned())
    }

    fn find_all(&self) -> error_stack::Result<Vec<TrackedBook>, KernelError> {
        Ok(self.books.values().cloned().collect())
    }
}

impl BookModifier for InMemoryDatabase {
    fn record_read(&mut self, book: &Book) -> error_stack::Result<ReadCount, KernelError> {
        let key = book.key();
        if let Some(tracked) = self.books.get_mut(&key) {
            let count = tracked.mark_read();
            tracing::trace!(isbn = ?key.isbn(), ?count, "read count bumped");
            return Ok(count);
        }
        let count = ReadCount::first();
        self.books
            .insert(key.clone(), TrackedBook::new(book.clone(), count));
        tracing::trace!(isbn = ?key.isbn(), "book tracked");
        Ok(count)
    }

    fn add_rating(
        &mut self,
        key: &BookKey,
        rating: Rating,
    ) -> error_stack::Result<(), KernelError> {
        let tracked = self.books.get_mut(key).ok_or_else(|| book_not_found(key))?;
        tracked.rate(rating);
        Ok(())
    }

    fn change_isbn(
        &mut self,
        key: &BookKey,
        isbn: Isbn,
    ) -> error_stack::Result<BookKey, KernelError> {
        let renamed = BookKey::new(key.title().clone(), isbn.clone());
        if self.books.contains(&renamed) && &renamed != key {
            return Err(Report::new(KernelError::DuplicateIsbn)
                .attach_printable(format!("{renamed:?} is already tracked")));
        }
        let tracked = self.books.get_mut(key).ok_or_else(|| book_not_found(key))?;
        let renamed = tracked.change_isbn(isbn);
        if !self.books.rekey(key, renamed.clone()) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("failed to rekey {key:?} to {renamed:?}")));
        }
        Ok(renamed)
    }
}

fn book_not_found(key: &BookKey) -> Report<KernelError> {
    Report::new(KernelError::BookNotFound).attach_printable(format!(
        "No book with title {:?} and isbn {:?} is tracked",
        key.title(),
        key.isbn()
    ))
}
