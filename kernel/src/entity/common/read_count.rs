use vodca::{AsRefln, Fromln};

/// How many times the catalog has seen a book being read.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Fromln, AsRefln)]
pub struct ReadCount(u64);

impl ReadCount {
    pub fn new(count: impl Into<u64>) -> Self {
        Self(count.into())
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }
}
