use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{
    Book, BookAuthor, BookKey, BookLevel, BookPrice, BookSubject, BookTitle, Isbn,
};
use kernel::KernelError;

use crate::service::diagnostic::Diagnose;
use crate::transfer::{
    BookDto, ChangeIsbnDto, CreateBookDto, CreateNonFictionDto, CreateNovelDto,
};

/// Checks the isbn is not used by any tracked book.
pub(crate) fn vacant_isbn<Q: BookQuery>(
    query: &Q,
    isbn: String,
) -> error_stack::Result<Isbn, KernelError> {
    let candidate = Isbn::new(isbn.clone());
    if query.find_by_isbn(&candidate)?.is_some() {
        return Err(Report::new(KernelError::DuplicateIsbn).attach_printable(format!(
            "The isbn {isbn} already exists for another book. Please give a unique isbn."
        )));
    }
    Ok(candidate)
}

/// Factories for new books. A created book is only tracked once somebody reads it.
pub trait CreateBookService: 'static + DependOnBookQuery {
    fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<Book, KernelError> {
        let build = || -> error_stack::Result<Book, KernelError> {
            let isbn = vacant_isbn(self.book_query(), dto.isbn)?;
            let price = BookPrice::new(dto.price)?;
            Ok(Book::general(BookTitle::new(dto.title), isbn, price))
        };
        build().diagnose("create_book")
    }

    fn create_novel(&self, dto: CreateNovelDto) -> error_stack::Result<Book, KernelError> {
        let build = || -> error_stack::Result<Book, KernelError> {
            let isbn = vacant_isbn(self.book_query(), dto.isbn)?;
            let price = BookPrice::new(dto.price)?;
            Ok(Book::fiction(
                BookTitle::new(dto.title),
                isbn,
                BookAuthor::new(dto.author),
                price,
            ))
        };
        build().diagnose("create_novel")
    }

    fn create_non_fiction(
        &self,
        dto: CreateNonFictionDto,
    ) -> error_stack::Result<Book, KernelError> {
        let build = || -> error_stack::Result<Book, KernelError> {
            let isbn = vacant_isbn(self.book_query(), dto.isbn)?;
            let price = BookPrice::new(dto.price)?;
            Ok(Book::non_fiction(
                BookTitle::new(dto.title),
                isbn,
                BookLevel::new(dto.level),
                BookSubject::new(dto.subject),
                price,
            ))
        };
        build().diagnose("create_non_fiction")
    }
}

impl<T> CreateBookService for T where T: DependOnBookQuery {}

pub trait GetBookService: 'static + DependOnBookQuery {
    fn find_book(&self, key: &BookKey) -> error_stack::Result<Option<BookDto>, KernelError> {
        let book = self.book_query().find_by_key(key)?;
        Ok(book.map(BookDto::from))
    }

    /// Every tracked book with its read count, in the order books were first read.
    fn list_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all()?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

pub trait UpdateBookService:
    'static + DependOnBookQuery + DependOnBookModifier + DependOnUserModifier
{
    /// Moves a tracked book to a new isbn, keeping every reader's record pointing at it.
    fn change_isbn(&mut self, dto: ChangeIsbnDto) -> error_stack::Result<BookKey, KernelError> {
        let key = BookKey::new(BookTitle::new(dto.title), Isbn::new(dto.isbn));
        let change = || -> error_stack::Result<BookKey, KernelError> {
            let tracked = self.book_query().find_by_key(&key)?.ok_or_else(|| {
                Report::new(KernelError::BookNotFound)
                    .attach_printable(format!("No tracked book matches {key:?}"))
            })?;
            let isbn = Isbn::new(dto.new_isbn);
            if tracked.book().isbn() == &isbn {
                return Ok(key.clone());
            }
            let isbn = vacant_isbn(self.book_query(), isbn.into())?;
            let renamed = self.book_modifier().change_isbn(&key, isbn)?;
            self.user_modifier().replace_book_key(&key, &renamed)?;
            tracing::debug!(from = ?key, to = ?renamed, "isbn changed");
            Ok(renamed)
        };
        change().diagnose("change_isbn")
    }
}

impl<T> UpdateBookService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnUserModifier
{
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use driver::database::InMemoryDatabase;
    use kernel::prelude::entity::{BookKey, BookTitle, Isbn};
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, CreateUserService, GetBookService, GetUserService, ReadBookService,
        UpdateBookService,
    };
    use crate::transfer::{
        BookKindDto, ChangeIsbnDto, CreateBookDto, CreateNonFictionDto, CreateNovelDto,
        CreateUserDto, ReadBookDto,
    };

    fn novel(title: &str, isbn: &str) -> CreateNovelDto {
        CreateNovelDto {
            title: title.to_string(),
            author: "Herbert".to_string(),
            isbn: isbn.to_string(),
            price: 15.0,
        }
    }

    fn catalog_with_reader() -> error_stack::Result<InMemoryDatabase, KernelError> {
        let mut db = InMemoryDatabase::new();
        db.add_user(CreateUserDto {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            books: Vec::new(),
        })?;
        Ok(db)
    }

    #[test]
    fn factories_build_each_kind() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let general = db.create_book(CreateBookDto {
            title: "Atlas".to_string(),
            isbn: "1".to_string(),
            price: 3.0,
        })?;
        let fiction = db.create_novel(novel("Dune", "2"))?;
        let manual = db.create_non_fiction(CreateNonFictionDto {
            title: "Rust".to_string(),
            level: "advanced".to_string(),
            subject: "systems".to_string(),
            isbn: "3".to_string(),
            price: 40.0,
        })?;

        assert_eq!(general.to_string(), "Atlas (1) for $3");
        assert_eq!(fiction.to_string(), "Dune by Herbert for $15");
        assert_eq!(manual.to_string(), "Rust, a advanced manual on systems for $40");
        // created books are not tracked yet
        assert_eq!(db.book_count(), 0);
        Ok(())
    }

    #[test]
    fn duplicate_isbn_is_refused_once_tracked() -> error_stack::Result<(), KernelError> {
        let mut db = catalog_with_reader()?;
        let dune = db.create_novel(novel("Dune", "000"))?;

        // untracked books do not reserve their isbn
        db.create_novel(novel("Dune Messiah", "000"))?;

        db.add_book_to_user(ReadBookDto {
            book: dune,
            email: "alice@example.com".to_string(),
            rating: None,
        })?;
        let before = db.list_books()?;

        let report = db.create_novel(novel("Dune Messiah", "000")).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::DuplicateIsbn);
        assert_eq!(db.list_books()?, before);
        Ok(())
    }

    #[test]
    fn negative_price_is_refused() {
        let db = InMemoryDatabase::new();
        let report = db
            .create_book(CreateBookDto {
                title: "Atlas".to_string(),
                isbn: "1".to_string(),
                price: -3.0,
            })
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::InvalidPrice);
    }

    #[test]
    fn change_isbn_rekeys_catalog_and_readers() -> error_stack::Result<(), KernelError> {
        let mut db = catalog_with_reader()?;
        let dune = db.create_novel(novel("Dune", "000"))?;
        let emma = db.create_novel(novel("Emma", "001"))?;
        for book in [dune, emma] {
            db.add_book_to_user(ReadBookDto {
                book,
                email: "alice@example.com".to_string(),
                rating: Some(2.0),
            })?;
        }

        let clash = db
            .change_isbn(ChangeIsbnDto {
                title: "Dune".to_string(),
                isbn: "000".to_string(),
                new_isbn: "001".to_string(),
            })
            .unwrap_err();
        assert_eq!(clash.current_context(), &KernelError::DuplicateIsbn);

        let renamed = db.change_isbn(ChangeIsbnDto {
            title: "Dune".to_string(),
            isbn: "000".to_string(),
            new_isbn: "999".to_string(),
        })?;
        assert_eq!(
            renamed,
            BookKey::new(BookTitle::new("Dune"), Isbn::new("999"))
        );

        let dune = db.find_book(&renamed)?.unwrap();
        assert_eq!(dune.read_count, 1);
        assert_eq!(dune.average_rating, Some(2.0));
        assert!(matches!(dune.kind, BookKindDto::Fiction { .. }));

        let alice = db.find_user("alice@example.com")?.unwrap();
        let isbns = alice
            .books
            .iter()
            .map(|reading| reading.isbn.as_str())
            .collect::<Vec<_>>();
        assert_eq!(isbns, vec!["999", "001"]);
        Ok(())
    }

    #[test]
    fn change_isbn_of_unknown_book_fails() -> error_stack::Result<(), KernelError> {
        let mut db = catalog_with_reader()?;
        let report = db
            .change_isbn(ChangeIsbnDto {
                title: "Nothing".to_string(),
                isbn: "0".to_string(),
                new_isbn: "1".to_string(),
            })
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::BookNotFound);
        Ok(())
    }
}
