mod book;
mod user;

pub use self::{book::*, user::*};
