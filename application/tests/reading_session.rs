use pretty_assertions::assert_eq;

use application::service::{
    CreateBookService, CreateUserService, GetBookService, GetUserService, ReadBookService,
    StatisticsService,
};
use application::transfer::{
    BookKindDto, CreateBookDto, CreateNonFictionDto, CreateNovelDto, CreateUserDto, ReadBookDto,
};
use driver::database::InMemoryDatabase;
use kernel::KernelError;

#[test]
fn alice_reads_dune() -> error_stack::Result<(), KernelError> {
    let mut catalog = InMemoryDatabase::new();
    catalog.add_user(CreateUserDto {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        books: Vec::new(),
    })?;
    let dune = catalog.create_novel(CreateNovelDto {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "000".to_string(),
        price: 15.0,
    })?;

    catalog.add_book_to_user(ReadBookDto {
        book: dune.clone(),
        email: "alice@example.com".to_string(),
        rating: Some(4.0),
    })?;

    let alice = catalog.find_user("alice@example.com")?.unwrap();
    assert_eq!(alice.average_rating, Some(4.0));
    assert_eq!(alice.books_read, 1);

    let tracked = catalog.find_book(&dune.key())?.unwrap();
    assert_eq!(tracked.read_count, 1);
    assert_eq!(tracked.average_rating, Some(4.0));
    assert_eq!(
        tracked.kind,
        BookKindDto::Fiction {
            author: "Herbert".to_string()
        }
    );
    Ok(())
}

#[test]
fn mixed_catalog_statistics() -> error_stack::Result<(), KernelError> {
    let mut catalog = InMemoryDatabase::new();
    let atlas = catalog.create_book(CreateBookDto {
        title: "Atlas".to_string(),
        isbn: "100".to_string(),
        price: 10.0,
    })?;
    let dune = catalog.create_novel(CreateNovelDto {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "200".to_string(),
        price: 20.0,
    })?;
    let manual = catalog.create_non_fiction(CreateNonFictionDto {
        title: "Rust".to_string(),
        level: "beginner".to_string(),
        subject: "programming".to_string(),
        isbn: "300".to_string(),
        price: 5.0,
    })?;

    catalog.add_user(CreateUserDto {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        books: vec![atlas.clone(), dune.clone(), manual.clone()],
    })?;
    catalog.add_user(CreateUserDto {
        name: "Bob".to_string(),
        email: "bob@school.edu".to_string(),
        books: Vec::new(),
    })?;
    catalog.add_book_to_user(ReadBookDto {
        book: dune.clone(),
        email: "bob@school.edu".to_string(),
        rating: Some(3.0),
    })?;

    assert_eq!(catalog.get_worth_of_user("alice@example.com")?, 35.0);
    assert_eq!(catalog.get_worth_of_user("bob@school.edu")?, 20.0);

    let most_read = catalog.most_read_book()?.unwrap();
    assert_eq!(most_read.title, "Dune");
    assert_eq!(most_read.read_count, 2);

    let expensive = catalog
        .get_n_most_expensive_books(3)?
        .into_iter()
        .map(|book| book.title)
        .collect::<Vec<_>>();
    assert_eq!(expensive, vec!["Dune", "Atlas", "Rust"]);

    let prolific = catalog.get_n_most_prolific_readers(1)?;
    assert_eq!(prolific[0].name, "Alice");

    assert_eq!(catalog.most_positive_user()?.unwrap().name, "Bob");
    assert_eq!(catalog.list_books()?.len(), 3);
    assert_eq!(catalog.list_users()?.len(), 2);
    Ok(())
}
