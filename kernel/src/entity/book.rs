mod isbn;
mod key;
mod kind;
mod price;
mod title;
mod tracked;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

pub use self::{isbn::*, key::*, kind::*, price::*, title::*, tracked::*};
use crate::entity::Rating;
use crate::KernelError;
use destructure::Destructure;
use vodca::References;

/// A book of any kind. Equality and hashing only look at title and isbn.
#[derive(Debug, Clone, References, Destructure)]
pub struct Book {
    title: BookTitle,
    isbn: Isbn,
    price: BookPrice,
    ratings: Vec<Rating>,
    kind: BookKind,
}

impl Book {
    pub fn new(title: BookTitle, isbn: Isbn, price: BookPrice, kind: BookKind) -> Self {
        Self {
            title,
            isbn,
            price,
            ratings: Vec::new(),
            kind,
        }
    }

    pub fn general(title: BookTitle, isbn: Isbn, price: BookPrice) -> Self {
        Self::new(title, isbn, price, BookKind::General)
    }

    pub fn fiction(title: BookTitle, isbn: Isbn, author: BookAuthor, price: BookPrice) -> Self {
        Self::new(title, isbn, price, BookKind::Fiction { author })
    }

    pub fn non_fiction(
        title: BookTitle,
        isbn: Isbn,
        level: BookLevel,
        subject: BookSubject,
        price: BookPrice,
    ) -> Self {
        Self::new(title, isbn, price, BookKind::NonFiction { level, subject })
    }

    pub fn key(&self) -> BookKey {
        BookKey::new(self.title.clone(), self.isbn.clone())
    }

    pub fn author(&self) -> Option<&BookAuthor> {
        match &self.kind {
            BookKind::Fiction { author } => Some(author),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<&BookLevel> {
        match &self.kind {
            BookKind::NonFiction { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn subject(&self) -> Option<&BookSubject> {
        match &self.kind {
            BookKind::NonFiction { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Records a raw rating. Absent or out of range values leave the ratings untouched.
    pub fn add_rating(&mut self, value: Option<f64>) -> error_stack::Result<(), KernelError> {
        let rating = Rating::parse(value)?;
        self.rate(rating);
        Ok(())
    }

    pub fn rate(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    pub fn average_rating(&self) -> Option<f64> {
        Rating::mean(&self.ratings)
    }

    /// Replaces the isbn and hands back the previous one.
    ///
    /// Uniqueness is not checked here; books already tracked by a catalog are rekeyed through it.
    pub fn set_isbn(&mut self, isbn: Isbn) -> Isbn {
        std::mem::replace(&mut self.isbn, isbn)
    }
}

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

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let title: &String = self.title.as_ref();
        let price: &f64 = self.price.as_ref();
        match &self.kind {
            BookKind::General => {
                let isbn: &String = self.isbn.as_ref();
                write!(f, "{title} ({isbn}) for ${price}")
            }
            BookKind::Fiction { author } => {
                let author: &String = author.as_ref();
                write!(f, "{title} by {author} for ${price}")
            }
            BookKind::NonFiction { level, subject } => {
                let level: &String = level.as_ref();
                let subject: &String = subject.as_ref();
                write!(f, "{title}, a {level} manual on {subject} for ${price}")
            }
        }
    }
}
