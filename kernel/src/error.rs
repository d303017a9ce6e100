use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    InvalidEmail,
    InvalidRating,
    InvalidPrice,
    DuplicateIsbn,
    DuplicateEmail,
    UserNotFound,
    BookNotFound,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidEmail => write!(f, "Invalid email address"),
            KernelError::InvalidRating => write!(f, "Invalid rating"),
            KernelError::InvalidPrice => write!(f, "Invalid price"),
            KernelError::DuplicateIsbn => write!(f, "Isbn is already taken"),
            KernelError::DuplicateEmail => write!(f, "Email is already registered"),
            KernelError::UserNotFound => write!(f, "User not found"),
            KernelError::BookNotFound => write!(f, "Book not found"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
