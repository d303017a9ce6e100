use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{Book, BookKey, Rating, ReadCount, User, UserEmail, UserName};
use kernel::KernelError;

use crate::service::diagnostic::Diagnose;
use crate::transfer::{ChangeEmailDto, CreateUserDto, ReadBookDto, UserDto};

pub(crate) fn registered_user<Q: UserQuery>(
    query: &Q,
    email: &UserEmail,
) -> error_stack::Result<User, KernelError> {
    query.find_by_email(email)?.ok_or_else(|| {
        let address: &String = email.as_ref();
        Report::new(KernelError::UserNotFound)
            .attach_printable(format!("No user with email {address}!"))
    })
}

/// Refuses books whose isbn is held by a different tracked book, or by another book in the same batch.
pub(crate) fn ensure_linkable<Q: BookQuery>(
    query: &Q,
    books: &[Book],
) -> error_stack::Result<(), KernelError> {
    let mut batch: Vec<BookKey> = Vec::with_capacity(books.len());
    for book in books {
        let key = book.key();
        let tracked = query.find_by_isbn(book.isbn())?.map(|tracked| tracked.key());
        let clash = tracked
            .into_iter()
            .chain(batch.iter().filter(|other| other.isbn() == key.isbn()).cloned())
            .find(|other| other != &key);
        if let Some(other) = clash {
            let isbn: &String = key.isbn().as_ref();
            let owner: &String = other.title().as_ref();
            return Err(Report::new(KernelError::DuplicateIsbn).attach_printable(format!(
                "The isbn {isbn} already belongs to {owner}. Please give a unique isbn."
            )));
        }
        batch.push(key);
    }
    Ok(())
}

/// Read-linking: a user reads a book, optionally rating it.
pub trait ReadBookService:
    'static + DependOnUserQuery + DependOnBookQuery + DependOnBookModifier + DependOnUserModifier
{
    /// Records the read on the user, bumps the catalog count and, when rated,
    /// adds the rating to the tracked book. An out-of-range rating is logged and
    /// dropped, the book is still linked unrated. Nothing is touched on any other failure.
    fn add_book_to_user(&mut self, dto: ReadBookDto) -> error_stack::Result<ReadCount, KernelError> {
        let link = || -> error_stack::Result<ReadCount, KernelError> {
            let ReadBookDto {
                book,
                email,
                rating,
            } = dto;
            let email = UserEmail::new(email)?;
            let mut user = registered_user(self.user_query(), &email)?;
            let rating = rating
                .and_then(|value| Rating::new(value).diagnose("add_book_to_user").ok());
            ensure_linkable(self.book_query(), std::slice::from_ref(&book))?;

            user.read_book(&book, rating);
            let count = self.book_modifier().record_read(&book)?;
            if let Some(rating) = rating {
                self.book_modifier().add_rating(&book.key(), rating)?;
            }
            self.user_modifier().update(&email, &user)?;

            tracing::debug!(email = ?email, book = %book, ?count, ?rating, "book read");
            Ok(count)
        };
        link().diagnose("add_book_to_user")
    }
}

impl<T> ReadBookService for T where
    T: DependOnUserQuery + DependOnBookQuery + DependOnBookModifier + DependOnUserModifier
{
}

pub trait CreateUserService: 'static + ReadBookService {
    /// Registers a user and links the initial books to them, unrated.
    fn add_user(&mut self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let register = || -> error_stack::Result<UserDto, KernelError> {
            let CreateUserDto { name, email, books } = dto;
            let email = UserEmail::new(email)?;
            if let Some(existing) = self.user_query().find_by_email(&email)? {
                let existing: &String = existing.name().as_ref();
                let address: &String = email.as_ref();
                return Err(Report::new(KernelError::DuplicateEmail).attach_printable(format!(
                    "User {existing} currently exists with email {address}. Please use a different email."
                )));
            }
            ensure_linkable(self.book_query(), &books)?;

            let user = User::new(UserName::new(name), email.clone());
            self.user_modifier().create(&user)?;
            tracing::debug!(email = ?email, initial_books = books.len(), "user added");

            let address: String = email.clone().into();
            for book in books {
                self.add_book_to_user(ReadBookDto {
                    book,
                    email: address.clone(),
                    rating: None,
                })?;
            }
            let user = registered_user(self.user_query(), &email)?;
            Ok(UserDto::from(user))
        };
        register().diagnose("add_user")
    }
}

impl<T> CreateUserService for T where T: ReadBookService {}

pub trait GetUserService: 'static + DependOnUserQuery {
    fn find_user(&self, email: &str) -> error_stack::Result<Option<UserDto>, KernelError> {
        let email = UserEmail::new(email).diagnose("find_user")?;
        let user = self.user_query().find_by_email(&email)?;
        Ok(user.map(UserDto::from))
    }

    /// Every user in registration order.
    fn list_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let users = self.user_query().find_all()?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

pub trait UpdateUserService: 'static + DependOnUserQuery + DependOnUserModifier {
    /// Moves a registered user to a new address; the catalog key follows.
    fn change_user_email(&mut self, dto: ChangeEmailDto) -> error_stack::Result<UserDto, KernelError> {
        let change = || -> error_stack::Result<UserDto, KernelError> {
            let current = UserEmail::new(dto.email)?;
            let mut user = registered_user(self.user_query(), &current)?;
            let previous = user.change_email(dto.new_email)?;
            if user.email() != &previous && self.user_query().find_by_email(user.email())?.is_some() {
                let address: &String = user.email().as_ref();
                return Err(Report::new(KernelError::DuplicateEmail).attach_printable(format!(
                    "The email {address} is already used by another user."
                )));
            }
            self.user_modifier().update(&current, &user)?;
            tracing::debug!(from = ?previous, to = ?user.email(), "email changed");
            Ok(UserDto::from(user))
        };
        change().diagnose("change_user_email")
    }
}

impl<T> UpdateUserService for T where T: DependOnUserQuery + DependOnUserModifier {}
