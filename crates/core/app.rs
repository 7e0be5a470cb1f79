use booksearch::{Book, Error, SearchField, SearchRequest};
use eyre::{eyre, Context};
use log::{info, trace, warn};

use crate::{
    display::render_results,
    interact::{user_menu_choice, user_search_terms, user_sort_key, wait_for_enter, MenuChoice},
};

/// Runs the interactive menu until the user quits.
pub fn run() -> eyre::Result<()> {
    loop {
        let field = match user_menu_choice()? {
            MenuChoice::Search(field) => field,
            MenuChoice::Quit => {
                trace!("Quit selected");
                return Ok(());
            }
        };

        let request = read_request(field)?;

        match search_or_retry(&request)? {
            Some(books) => println!("{}", render_results(&books)),
            None => println!(
                "Network error: the search could not reach Open Library. Please try again."
            ),
        }

        wait_for_enter()?;
    }
}

fn read_request(field: SearchField) -> eyre::Result<SearchRequest> {
    let terms = user_search_terms(field)?;
    let sort_key = user_sort_key()?;
    Ok(SearchRequest::new(terms, field, sort_key))
}

/// Network failures are logged and reported as `Ok(None)` so the menu can be used again.
fn search_or_retry(request: &SearchRequest) -> eyre::Result<Option<Vec<Book>>> {
    retryable(booksearch::search(request))
        .wrap_err_with(|| eyre!("Search for '{}' failed", request.url()))
        .map(|books| {
            if let Some(books) = &books {
                info!("Displaying {} results", books.len());
            }
            books
        })
}

fn retryable<T>(res: Result<T, Error>) -> Result<Option<T>, Error> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_retryable() => {
            warn!("{err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksearch::ErrorKind;

    #[test]
    fn network_errors_are_recoverable() {
        let res: Result<(), Error> = Err(Error::new(ErrorKind::Network, "connection refused"));
        assert!(matches!(retryable(res), Ok(None)));
    }

    #[test]
    fn other_errors_are_passed_on() {
        let res: Result<(), Error> = Err(Error::new(ErrorKind::Deserialize, "expected `docs`"));
        let err = retryable(res).unwrap_err();
        assert_eq!(ErrorKind::Deserialize, err.kind());
    }

    #[test]
    fn values_are_kept() {
        assert_eq!(Some(3), retryable(Ok::<_, Error>(3)).unwrap());
    }
}
