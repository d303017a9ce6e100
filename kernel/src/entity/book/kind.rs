use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookLevel(String);

impl BookLevel {
    pub fn new(level: impl Into<String>) -> Self {
        Self(level.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct BookSubject(String);

impl BookSubject {
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }
}

/// Variant specific payload of a [`Book`](crate::entity::Book).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookKind {
    General,
    Fiction {
        author: BookAuthor,
    },
    NonFiction {
        level: BookLevel,
        subject: BookSubject,
    },
}
