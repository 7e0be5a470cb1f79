#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

//! # booksearch
//!
//! booksearch is a library which searches the Open Library catalogue by title or author
//! and orders the returned [`Book`]s by a [`SortKey`].
//!
//! Search urls are built in [`query`], results are ordered in [`rank`] and language codes on
//! results can be turned into readable names with [`language`].

mod api;
mod book;
mod error;
pub mod language;
pub mod query;
pub mod rank;
mod request;

pub use book::Book;
pub use error::{Error, ErrorKind};
pub use query::{SearchField, SearchTerms};
pub use rank::SortKey;
pub use request::SearchRequest;

use log::trace;

type Client = reqwest::blocking::Client;

/// Search Open Library for the `request` and return the results ordered by its [`SortKey`].
///
/// # Errors
///
/// An [`Err`] is returned when the request cannot be sent or the API answers with an error
/// status, see [`Error::is_retryable`].
/// An [`Err`] is returned when the response cannot be parsed as a list of search results.
#[inline]
pub fn search(request: &SearchRequest) -> Result<Vec<Book>, Error> {
    trace!("Search books with {request:?}");
    api::open_library::search_books::<Client>(request)
}
