use serde::Serialize;

use kernel::prelude::entity::{BookKind, DestructBook, DestructTrackedBook, TrackedBook};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BookKindDto {
    General,
    Fiction { author: String },
    NonFiction { level: String, subject: String },
}

impl From<BookKind> for BookKindDto {
    fn from(value: BookKind) -> Self {
        match value {
            BookKind::General => Self::General,
            BookKind::Fiction { author } => Self::Fiction {
                author: author.into(),
            },
            BookKind::NonFiction { level, subject } => Self::NonFiction {
                level: level.into(),
                subject: subject.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDto {
    pub title: String,
    pub isbn: String,
    pub price: f64,
    pub kind: BookKindDto,
    pub ratings: Vec<f64>,
    pub average_rating: Option<f64>,
    pub read_count: u64,
}

impl From<TrackedBook> for BookDto {
    fn from(value: TrackedBook) -> Self {
        let DestructTrackedBook { book, read_count } = value.into_destruct();
        let average_rating = book.average_rating();
        let DestructBook {
            title,
            isbn,
            price,
            ratings,
            kind,
        } = book.into_destruct();
        Self {
            title: title.into(),
            isbn: isbn.into(),
            price: price.into(),
            kind: kind.into(),
            ratings: ratings.into_iter().map(f64::from).collect(),
            average_rating,
            read_count: read_count.into(),
        }
    }
}

pub struct CreateBookDto {
    pub title: String,
    pub isbn: String,
    pub price: f64,
}

pub struct CreateNovelDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
}

pub struct CreateNonFictionDto {
    pub title: String,
    pub level: String,
    pub subject: String,
    pub isbn: String,
    pub price: f64,
}

pub struct ChangeIsbnDto {
    pub title: String,
    pub isbn: String,
    pub new_isbn: String,
}
