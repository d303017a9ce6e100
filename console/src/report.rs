use application::service::{GetBookService, GetUserService, StatisticsService};
use error_stack::ResultExt;
use kernel::KernelError;

use crate::handler::Handler;

const TOP: usize = 3;

/// Logs the state of the catalog and its leaderboards.
pub fn report(handler: &Handler) -> error_stack::Result<(), KernelError> {
    let catalog = handler.database();

    tracing::info!("\n{}", catalog.catalog_summary()?);

    for book in catalog.list_books()? {
        tracing::info!(read_count = book.read_count, "{} ({})", book.title, book.isbn);
    }
    for user in catalog.list_users()? {
        let worth = catalog.get_worth_of_user(&user.email)?;
        tracing::info!(books_read = user.books_read, worth, "{} <{}>", user.name, user.email);
    }

    let most_read = catalog.get_n_most_read_books(TOP)?;
    let most_expensive = catalog.get_n_most_expensive_books(TOP)?;
    let prolific = catalog.get_n_most_prolific_readers(TOP)?;
    tracing::info!(
        most_read = ?most_read.iter().map(|book| &book.title).collect::<Vec<_>>(),
        most_expensive = ?most_expensive.iter().map(|book| &book.title).collect::<Vec<_>>(),
        prolific = ?prolific.iter().map(|user| &user.name).collect::<Vec<_>>(),
        "leaderboards"
    );

    let snapshot = serde_json::to_string_pretty(&catalog.list_books()?)
        .change_context(KernelError::Internal)
        .attach_printable("Failed to serialize the catalog")?;
    tracing::debug!("catalog snapshot\n{snapshot}");
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::handler::Handler;
    use crate::report::report;

    #[test]
    fn seeded_catalog_reports() {
        let handler = Handler::init().unwrap();
        assert_eq!(handler.database().book_count(), 4);
        assert_eq!(handler.database().user_count(), 3);
        report(&handler).unwrap();
    }
}
