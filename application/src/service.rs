mod book;
mod diagnostic;
mod statistics;
mod user;

pub use self::{book::*, statistics::*, user::*};
