use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::transfer::{BookDto, UserDto};

/// Overview of a catalog: population sizes and the current leaders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummaryDto {
    pub books: usize,
    pub users: usize,
    pub most_read: Option<BookDto>,
    pub highest_rated: Option<BookDto>,
    pub most_positive: Option<UserDto>,
}

impl Display for CatalogSummaryDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let most_read = self.most_read.as_ref().map_or("nothing", |b| b.title.as_str());
        let highest_rated = self.highest_rated.as_ref().map_or("nothing", |b| b.title.as_str());
        let most_positive = self.most_positive.as_ref().map_or("nobody", |u| u.name.as_str());
        writeln!(
            f,
            "This catalog has {} book(s) and {} user(s).",
            self.books, self.users
        )?;
        writeln!(
            f,
            "With {most_read} being read the most, {highest_rated} having the highest average rating,"
        )?;
        write!(f, "and {most_positive} giving the most positive reviews.")
    }
}
