mod rating;
mod read_count;

pub use self::{rating::*, read_count::*};
