use crate::entity::{User, UserEmail};
use crate::KernelError;

pub trait UserQuery: 'static {
    fn find_by_email(&self, email: &UserEmail) -> error_stack::Result<Option<User>, KernelError>;
    /// Every user in registration order.
    fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError>;
}

pub trait DependOnUserQuery: 'static {
    type UserQuery: UserQuery;
    fn user_query(&self) -> &Self::UserQuery;
}

impl<T> DependOnUserQuery for T
where
    T: UserQuery,
{
    type UserQuery = T;
    fn user_query(&self) -> &Self::UserQuery {
        self
    }
}
