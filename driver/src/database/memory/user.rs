use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{BookKey, User, UserEmail};
use kernel::KernelError;

use crate::database::InMemoryDatabase;

impl UserQuery for InMemoryDatabase {
    fn find_by_email(&self, email: &UserEmail) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self.users.get(email).cloned())
    }

    fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(self.users.values().cloned().collect())
    }
}

impl UserModifier for InMemoryDatabase {
    fn create(&mut self, user: &User) -> error_stack::Result<(), KernelError> {
        if !self.users.insert(user.email().clone(), user.clone()) {
            return Err(Report::new(KernelError::DuplicateEmail)
                .attach_printable(format!("{:?} is already registered", user.email())));
        }
        tracing::trace!(email = ?user.email(), "user registered");
        Ok(())
    }

    fn update(&mut self, email: &UserEmail, user: &User) -> error_stack::Result<(), KernelError> {
        if !self.users.contains(email) {
            return Err(Report::new(KernelError::UserNotFound)
                .attach_printable(format!("No user with email {email:?}")));
        }
        if email != user.email() && !self.users.rekey(email, user.email().clone()) {
            return Err(Report::new(KernelError::DuplicateEmail)
                .attach_printable(format!("{:?} is already registered", user.email())));
        }
        if let Some(stored) = self.users.get_mut(user.email()) {
            *stored = user.clone();
        }
        Ok(())
    }

    fn replace_book_key(
        &mut self,
        from: &BookKey,
        to: &BookKey,
    ) -> error_stack::Result<(), KernelError> {
        self.users
            .values_mut()
            .filter(|user| user.has_read(from))
            .for_each(|user| user.replace_book_key(from, to));
        Ok(())
    }
}
