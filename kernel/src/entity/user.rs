mod email;
mod name;

use std::fmt::{Display, Formatter};

pub use self::{email::*, name::*};
use crate::entity::{Book, BookKey, Rating};
use crate::KernelError;
use destructure::Destructure;
use vodca::References;

/// One entry of a user's reading list.
#[derive(Debug, Clone, PartialEq, References)]
pub struct ReadingRecord {
    book: BookKey,
    rating: Option<Rating>,
}

impl ReadingRecord {
    pub fn new(book: BookKey, rating: Option<Rating>) -> Self {
        Self { book, rating }
    }
}

#[derive(Debug, Clone, Destructure, References)]
pub struct User {
    name: UserName,
    email: UserEmail,
    books: Vec<ReadingRecord>,
}

impl User {
    pub fn new(name: UserName, email: UserEmail) -> Self {
        Self {
            name,
            email,
            books: Vec::new(),
        }
    }

    /// Adds the book to the reading list, overwriting the rating if it was read before.
    pub fn read_book(&mut self, book: &Book, rating: Option<Rating>) {
        let key = book.key();
        match self.books.iter_mut().find(|record| record.book == key) {
            Some(record) => record.rating = rating,
            None => self.books.push(ReadingRecord::new(key, rating)),
        }
    }

    pub fn has_read(&self, book: &BookKey) -> bool {
        self.books.iter().any(|record| &record.book == book)
    }

    pub fn replace_book_key(&mut self, from: &BookKey, to: &BookKey) {
        self.books
            .iter_mut()
            .filter(|record| &record.book == from)
            .for_each(|record| record.book = to.clone());
    }

    /// Mean over rated books only. `None` when nothing has been rated.
    pub fn average_rating(&self) -> Option<f64> {
        Rating::mean(self.books.iter().filter_map(|record| record.rating.as_ref()))
    }

    pub fn books_read(&self) -> usize {
        self.books.len()
    }

    /// Validates and swaps in a new address, returning the previous one.
    pub fn change_email(
        &mut self,
        address: impl Into<String>,
    ) -> error_stack::Result<UserEmail, KernelError> {
        let email = UserEmail::new(address)?;
        Ok(std::mem::replace(&mut self.email, email))
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for User {}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name: &String = self.name.as_ref();
        let email: &String = self.email.as_ref();
        let count = self.books_read();
        let average = self
            .average_rating()
            .map_or_else(|| "none".to_string(), |average| average.to_string());
        write!(
            f,
            "User {name} with email {email} has read {count} book(s) with an average rating of {average}"
        )
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::entity::{
        Book, BookPrice, BookTitle, Isbn, Rating, User, UserEmail, UserName,
    };
    use crate::KernelError;

    fn alice() -> User {
        User::new(
            UserName::new("Alice"),
            UserEmail::new("alice@example.com").unwrap(),
        )
    }

    fn book(title: &str, isbn: &str) -> Book {
        Book::general(
            BookTitle::new(title),
            Isbn::new(isbn),
            BookPrice::new(10).unwrap(),
        )
    }

    #[test]
    fn rereading_overwrites_rating() {
        let mut user = alice();
        let dune = book("Dune", "000");
        user.read_book(&dune, Some(Rating::new(1).unwrap()));
        user.read_book(&dune, Some(Rating::new(3).unwrap()));

        assert_eq!(user.books_read(), 1);
        assert_eq!(user.average_rating(), Some(3.0));
    }

    #[test]
    fn unrated_books_count_but_do_not_average() {
        let mut user = alice();
        user.read_book(&book("Dune", "000"), None);
        assert_eq!(user.books_read(), 1);
        assert_eq!(user.average_rating(), None);

        user.read_book(&book("Emma", "001"), Some(Rating::new(0).unwrap()));
        assert_eq!(user.books_read(), 2);
        assert_eq!(user.average_rating(), Some(0.0));
    }

    #[test]
    fn equality_is_name_and_email() {
        let mut reader = alice();
        reader.read_book(&book("Dune", "000"), None);
        assert_eq!(reader, alice());

        let other = User::new(
            UserName::new("Alicia"),
            UserEmail::new("alice@example.com").unwrap(),
        );
        assert_ne!(other, alice());
    }

    #[test]
    fn change_email_validates() {
        let mut user = alice();
        let report = user.change_email("alice@example").unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidEmail);
        assert_eq!(user.email(), &UserEmail::new("alice@example.com").unwrap());

        let previous = user.change_email("alice@school.edu").unwrap();
        assert_eq!(previous, UserEmail::new("alice@example.com").unwrap());
        assert_eq!(user.email(), &UserEmail::new("alice@school.edu").unwrap());
    }

    #[test]
    fn display_mentions_reading_stats() {
        let mut user = alice();
        assert_eq!(
            user.to_string(),
            "User Alice with email alice@example.com has read 0 book(s) with an average rating of none"
        );
        user.read_book(&book("Dune", "000"), Some(Rating::new(4).unwrap()));
        assert_eq!(
            user.to_string(),
            "User Alice with email alice@example.com has read 1 book(s) with an average rating of 4"
        );
    }
}
