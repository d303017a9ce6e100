use serde::Serialize;

use kernel::prelude::entity::{Book, DestructUser, ReadingRecord, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingDto {
    pub title: String,
    pub isbn: String,
    pub rating: Option<f64>,
}

impl From<ReadingRecord> for ReadingDto {
    fn from(value: ReadingRecord) -> Self {
        Self {
            title: value.book().title().clone().into(),
            isbn: value.book().isbn().clone().into(),
            rating: value.rating().map(f64::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDto {
    pub name: String,
    pub email: String,
    pub books: Vec<ReadingDto>,
    pub books_read: usize,
    pub average_rating: Option<f64>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let average_rating = value.average_rating();
        let books_read = value.books_read();
        let DestructUser { name, email, books } = value.into_destruct();
        Self {
            name: name.into(),
            email: email.into(),
            books: books.into_iter().map(ReadingDto::from).collect(),
            books_read,
            average_rating,
        }
    }
}

pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub books: Vec<Book>,
}

pub struct ReadBookDto {
    pub book: Book,
    pub email: String,
    pub rating: Option<f64>,
}

pub struct ChangeEmailDto {
    pub email: String,
    pub new_email: String,
}
