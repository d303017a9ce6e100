use crate::entity::{BookKey, User, UserEmail};
use crate::KernelError;

pub trait UserModifier: 'static {
    fn create(&mut self, user: &User) -> error_stack::Result<(), KernelError>;
    /// Replaces the user registered under `email`. The stored key follows the user's own email.
    fn update(&mut self, email: &UserEmail, user: &User) -> error_stack::Result<(), KernelError>;
    /// Points every reading record of `from` at `to`.
    fn replace_book_key(&mut self, from: &BookKey, to: &BookKey)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier: 'static {
    type UserModifier: UserModifier;
    fn user_modifier(&mut self) -> &mut Self::UserModifier;
}

impl<T> DependOnUserModifier for T
where
    T: UserModifier,
{
    type UserModifier = T;
    fn user_modifier(&mut self) -> &mut Self::UserModifier {
        self
    }
}
