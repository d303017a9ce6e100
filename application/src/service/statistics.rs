use std::cmp::Ordering;

use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnUserQuery, UserQuery};
use kernel::prelude::entity::{TrackedBook, User, UserEmail};
use kernel::KernelError;

use crate::service::diagnostic::Diagnose;
use crate::service::user::registered_user;
use crate::transfer::{BookDto, CatalogSummaryDto, UserDto};

/// First item holding the strictly greatest metric. Items without a metric are skipped,
/// so a leader at zero still wins over nothing.
fn first_max_by<T, M, F>(items: Vec<T>, metric: F) -> Option<T>
where
    M: PartialOrd,
    F: Fn(&T) -> Option<M>,
{
    let mut leader: Option<(T, M)> = None;
    for item in items {
        let Some(value) = metric(&item) else {
            continue;
        };
        let ahead = match &leader {
            Some((_, best)) => value > *best,
            None => true,
        };
        if ahead {
            leader = Some((item, value));
        }
    }
    leader.map(|(item, _)| item)
}

/// Stable descending sort, truncated to `n`.
fn top_n_by<T, F>(mut items: Vec<T>, n: usize, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    items.sort_by(|a, b| compare(b, a));
    items.truncate(n);
    items
}

fn read_count(tracked: &TrackedBook) -> u64 {
    (*tracked.read_count()).into()
}

fn price(tracked: &TrackedBook) -> f64 {
    (*tracked.book().price()).into()
}

/// Aggregate queries over the whole catalog. Ties go to whoever was tracked first.
pub trait StatisticsService: 'static + DependOnBookQuery + DependOnUserQuery {
    fn most_read_book(&self) -> error_stack::Result<Option<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        let leader = first_max_by(books, |tracked| Some(read_count(tracked)));
        Ok(leader.map(BookDto::from))
    }

    fn highest_rated_book(&self) -> error_stack::Result<Option<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        let leader = first_max_by(books, |tracked| tracked.book().average_rating());
        Ok(leader.map(BookDto::from))
    }

    fn most_positive_user(&self) -> error_stack::Result<Option<UserDto>, KernelError> {
        let users = self.user_query().find_all()?;
        let leader = first_max_by(users, User::average_rating);
        Ok(leader.map(UserDto::from))
    }

    fn get_n_most_read_books(&self, n: usize) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        let top = top_n_by(books, n, |a, b| read_count(a).cmp(&read_count(b)));
        Ok(top.into_iter().map(BookDto::from).collect())
    }

    fn get_n_most_expensive_books(
        &self,
        n: usize,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        let top = top_n_by(books, n, |a, b| price(a).total_cmp(&price(b)));
        Ok(top.into_iter().map(BookDto::from).collect())
    }

    fn get_n_most_prolific_readers(
        &self,
        n: usize,
    ) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let users = self.user_query().find_all()?;
        let top = top_n_by(users, n, |a, b| a.books_read().cmp(&b.books_read()));
        Ok(top.into_iter().map(UserDto::from).collect())
    }

    /// Total price of every book the user has read.
    fn get_worth_of_user(&self, email: &str) -> error_stack::Result<f64, KernelError> {
        let worth = || -> error_stack::Result<f64, KernelError> {
            let email = UserEmail::new(email)?;
            let user = registered_user(self.user_query(), &email)?;
            let mut total = 0.0;
            for record in user.books() {
                let tracked = self.book_query().find_by_key(record.book())?.ok_or_else(|| {
                    Report::new(KernelError::Internal).attach_printable(format!(
                        "{:?} is on a reading list but not tracked",
                        record.book()
                    ))
                })?;
                total += price(&tracked);
            }
            Ok(total)
        };
        worth().diagnose("get_worth_of_user")
    }

    fn catalog_summary(&self) -> error_stack::Result<CatalogSummaryDto, KernelError> {
        Ok(CatalogSummaryDto {
            books: self.book_query().find_all()?.len(),
            users: self.user_query().find_all()?.len(),
            most_read: self.most_read_book()?,
            highest_rated: self.highest_rated_book()?,
            most_positive: self.most_positive_user()?,
        })
    }
}

impl<T> StatisticsService for T where T: DependOnBookQuery + DependOnUserQuery {}
