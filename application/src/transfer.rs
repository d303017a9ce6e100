mod book;
mod summary;
mod user;

pub use self::{book::*, summary::*, user::*};
