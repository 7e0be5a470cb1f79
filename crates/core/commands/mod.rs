use booksearch::{SearchField, SearchRequest, SearchTerms, SortKey};

use clap::{AppSettings, ArgEnum, Subcommand};
use eyre::{eyre, Context};
use log::trace;

use crate::display::render_results;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search for books by title
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Title {
        /// The words of the title
        #[clap(required = true)]
        terms: Vec<String>,

        /// How the results are ordered
        #[clap(short, long, arg_enum, default_value = "title")]
        sort: SortArg,
    },
    /// Search for books by author
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Author {
        /// The words of the author's name
        #[clap(required = true)]
        terms: Vec<String>,

        /// How the results are ordered
        #[clap(short, long, arg_enum, default_value = "title")]
        sort: SortArg,
    },
}

#[derive(ArgEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortArg {
    /// First author, ascending
    Author,
    /// Title, ascending
    Title,
    /// First publish year, descending
    ReleaseDate,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Author => Self::Author,
            SortArg::Title => Self::Title,
            SortArg::ReleaseDate => Self::ReleaseDate,
        }
    }
}

impl Commands {
    pub fn execute(self) -> eyre::Result<String> {
        let request = self.into_request()?;
        trace!("{request:?}");

        let books = booksearch::search(&request)
            .wrap_err_with(|| eyre!("Search for '{}' failed", request.url()))?;

        Ok(render_results(&books))
    }

    fn into_request(self) -> eyre::Result<SearchRequest> {
        let (field, terms, sort) = match self {
            Commands::Title { terms, sort } => (SearchField::Title, terms, sort),
            Commands::Author { terms, sort } => (SearchField::Author, terms, sort),
        };

        let terms = SearchTerms::parse(&terms.join(" "))
            .wrap_err_with(|| eyre!("Invalid book {field}"))?;

        Ok(SearchRequest::new(terms, field, sort.into()))
    }
}
