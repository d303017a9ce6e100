use application::service::{
    CreateBookService, CreateUserService, ReadBookService,
};
use application::transfer::{
    CreateBookDto, CreateNonFictionDto, CreateNovelDto, CreateUserDto, ReadBookDto,
};
use driver::database::InMemoryDatabase;
use kernel::KernelError;
use vodca::References;

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl Handler {
    /// Builds a catalog with a handful of readers and books.
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let mut database = InMemoryDatabase::new();

        let dune = database.create_novel(CreateNovelDto {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            isbn: "9780441013593".into(),
            price: 15.0,
        })?;
        let emma = database.create_novel(CreateNovelDto {
            title: "Emma".into(),
            author: "Jane Austen".into(),
            isbn: "9780141439587".into(),
            price: 9.5,
        })?;
        let sicp = database.create_non_fiction(CreateNonFictionDto {
            title: "Structure and Interpretation of Computer Programs".into(),
            level: "advanced".into(),
            subject: "programming".into(),
            isbn: "9780262510875".into(),
            price: 55.0,
        })?;
        let atlas = database.create_book(CreateBookDto {
            title: "World Atlas".into(),
            isbn: "9781465491848".into(),
            price: 30.0,
        })?;

        database.add_user(CreateUserDto {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            books: vec![atlas.clone()],
        })?;
        database.add_user(CreateUserDto {
            name: "Bob".into(),
            email: "bob@school.edu".into(),
            books: Vec::new(),
        })?;
        database.add_user(CreateUserDto {
            name: "Carol".into(),
            email: "carol@library.org".into(),
            books: vec![dune.clone(), emma.clone()],
        })?;

        for (book, email, rating) in [
            (&dune, "alice@example.com", Some(4.0)),
            (&sicp, "alice@example.com", Some(3.5)),
            (&dune, "bob@school.edu", Some(3.0)),
            (&emma, "bob@school.edu", None),
            (&sicp, "carol@library.org", Some(2.0)),
        ] {
            database.add_book_to_user(ReadBookDto {
                book: book.clone(),
                email: email.into(),
                rating,
            })?;
        }

        Ok(Self { database })
    }
}
