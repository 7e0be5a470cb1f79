//! Construction of Open Library search URLs.

use std::fmt;

use log::trace;

use crate::{Error, ErrorKind};

/// Base of every search request, the query string is appended directly.
pub const SEARCH_URL: &str = "https://openlibrary.org/search.json?";

/// The field of a book that the search terms are matched against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchField {
    /// Match against book titles.
    Title,
    /// Match against author names.
    Author,
}

impl SearchField {
    /// Name of the query parameter used by the search API.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

/// A validated, non-empty sequence of lowercase search tokens.
///
/// Only [`SearchTerms::parse`] can create a value, so holding one means the
/// tokens contain no digits and there is at least one of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    /// Lowercases `input` and splits it into whitespace separated tokens.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when `input` contains a digit or has no tokens.
    pub fn parse(input: &str) -> Result<Self, Error> {
        if input.chars().any(char::is_numeric) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("'{input}' contains a digit"),
            ));
        }

        let tokens = input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>();

        if tokens.is_empty() {
            Err(Error::new(ErrorKind::InvalidInput, "No search terms given"))
        } else {
            Ok(Self(tokens))
        }
    }

    /// The tokens in the order they were entered.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

/// Joins `terms` with `+` behind the parameter name for `field`.
///
/// ```
/// use booksearch::query::{query_string, SearchField};
///
/// assert_eq!("title=dune+messiah", query_string(&["dune", "messiah"], SearchField::Title));
/// ```
#[must_use]
pub fn query_string<S: AsRef<str>>(terms: &[S], field: SearchField) -> String {
    let value = terms
        .iter()
        .map(|t| urlencoding::encode(t.as_ref()))
        .collect::<Vec<_>>()
        .join("+");

    format!("{}={value}", field.param())
}

/// Full search url for `terms` matched against `field`.
#[must_use]
pub fn build<S: AsRef<str>>(terms: &[S], field: SearchField) -> String {
    let mut url = SEARCH_URL.to_owned();
    url.push_str(&query_string(terms, field));
    trace!("Built search url '{url}'");
    url
}
