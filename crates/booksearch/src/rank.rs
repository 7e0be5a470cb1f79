//! Ordering of search results.

use std::cmp::Reverse;

use log::trace;

use crate::Book;

/// Stands in for a missing text key, sorts after every real value.
pub const MISSING_TEXT: &str = "\u{10FFFF}";

/// Stands in for a missing or unreadable release year.
pub const MISSING_YEAR: i64 = 0;

/// The field search results are ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// First author name, ascending.
    Author,
    /// Title, ascending.
    Title,
    /// First publish year, descending.
    ReleaseDate,
}

/// First author name of `book`, or [`MISSING_TEXT`] when there is none or it is empty.
#[must_use]
pub fn author_key(book: &Book) -> &str {
    book.authors()
        .and_then(<[String]>::first)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(MISSING_TEXT)
}

/// Whole title of `book`, or [`MISSING_TEXT`] when there is none or it is empty.
#[must_use]
pub fn title_key(book: &Book) -> &str {
    book.title()
        .filter(|title| !title.is_empty())
        .unwrap_or(MISSING_TEXT)
}

/// Year `book` was first published, or [`MISSING_YEAR`].
#[must_use]
pub fn release_year_key(book: &Book) -> i64 {
    book.first_publish_year().unwrap_or(MISSING_YEAR)
}

/// Orders `books` by `key`.
///
/// Text keys are ascending and books without the key come last. Release dates
/// are descending, except that books without a year come first. The sort is
/// stable for every key, books with equal keys keep the order they were given in.
#[must_use]
pub fn rank(mut books: Vec<Book>, key: SortKey) -> Vec<Book> {
    trace!("Ranking {} books by {:?}", books.len(), key);
    match key {
        SortKey::Author => books.sort_by(|a, b| author_key(a).cmp(author_key(b))),
        SortKey::Title => books.sort_by(|a, b| title_key(a).cmp(title_key(b))),
        SortKey::ReleaseDate => books.sort_by_key(|b| {
            let year = release_year_key(b);
            (year != MISSING_YEAR, Reverse(year))
        }),
    }
    books
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(title_key).collect()
    }

    #[test]
    fn release_date_descending_with_undated_first() {
        let books = vec![
            Book::new("B").with_first_publish_year(1999),
            Book::new("A").with_first_publish_year(2001),
            Book::new("C"),
        ];

        let ranked = rank(books, SortKey::ReleaseDate);

        assert_eq!(vec!["C", "A", "B"], titles(&ranked));
    }

    #[test]
    fn title_ascending_with_untitled_last() {
        let books = vec![
            Book::default().with_first_publish_year(1),
            Book::new("b"),
            Book::new("Z"),
            Book::new("a"),
        ];

        let ranked = rank(books, SortKey::Title);

        assert_eq!(vec!["Z", "a", "b", MISSING_TEXT], titles(&ranked));
    }

    #[test]
    fn titles_are_compared_in_full() {
        let books = vec![Book::new("Ab"), Book::new("Aa"), Book::new("B")];

        let ranked = rank(books, SortKey::Title);

        assert_eq!(vec!["Aa", "Ab", "B"], titles(&ranked));
    }

    #[test]
    fn empty_text_keys_sort_last() {
        let books = vec![
            Book::new(""),
            Book::new("Ab"),
            Book::default(),
            Book::new("Aa"),
        ];

        let ranked = rank(books, SortKey::Title);
        let ranked_titles = ranked.iter().map(Book::title).collect::<Vec<_>>();

        assert_eq!(vec![Some("Aa"), Some("Ab"), Some(""), None], ranked_titles);

        let books = vec![
            Book::new("blank").with_authors([""]),
            Book::new("named").with_authors(["Atwood"]),
            Book::new("none"),
        ];

        let ranked = rank(books, SortKey::Author);

        assert_eq!(vec!["named", "blank", "none"], titles(&ranked));
        assert_eq!(MISSING_TEXT, author_key(&Book::new("x").with_authors([""])));
        assert_eq!(MISSING_TEXT, title_key(&Book::new("")));
    }

    #[test]
    fn author_ascending_uses_first_author() {
        let books = vec![
            Book::new("one").with_authors(["Pratchett", "Gaiman"]),
            Book::new("two").with_authors(["Austen"]),
            Book::new("three"),
            Book::new("four").with_authors(Vec::<String>::new()),
            Book::new("five").with_authors(["Gaiman", "Pratchett"]),
        ];

        let ranked = rank(books, SortKey::Author);

        assert_eq!(vec!["two", "five", "one", "three", "four"], titles(&ranked));
    }

    #[test]
    fn equal_authors_keep_input_order() {
        let books = vec![
            Book::new("first").with_authors(["Le Guin"]),
            Book::new("middle").with_authors(["Banks"]),
            Book::new("second").with_authors(["Le Guin"]),
        ];

        let ranked = rank(books, SortKey::Author);

        assert_eq!(vec!["middle", "first", "second"], titles(&ranked));
    }

    #[test]
    fn equal_years_keep_input_order() {
        let books = vec![
            Book::new("x").with_first_publish_year(1965),
            Book::new("undated one"),
            Book::new("y").with_first_publish_year(1965),
            Book::new("undated two"),
        ];

        let ranked = rank(books, SortKey::ReleaseDate);

        assert_eq!(vec!["undated one", "undated two", "x", "y"], titles(&ranked));
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let books = vec![
            Book::new("Neuromancer").with_authors(["Gibson"]).with_first_publish_year(1984),
            Book::new("Dune").with_authors(["Herbert"]).with_first_publish_year(1965),
            Book::new("Hyperion").with_authors(["Simmons"]).with_first_publish_year(1989),
            Book::new("Untitled draft"),
        ];

        for key in [SortKey::Author, SortKey::Title, SortKey::ReleaseDate] {
            let expected = rank(books.clone(), key);
            let mut reversed = books.clone();
            reversed.reverse();
            let mut rotated = books.clone();
            rotated.rotate_left(2);

            assert_eq!(expected, rank(reversed, key), "{key:?}");
            assert_eq!(expected, rank(rotated, key), "{key:?}");
        }
    }

    #[test]
    fn missing_keys_use_sentinels() {
        let book = Book::default();
        assert_eq!(MISSING_TEXT, author_key(&book));
        assert_eq!(MISSING_TEXT, title_key(&book));
        assert_eq!(MISSING_YEAR, release_year_key(&book));
    }

    #[test]
    fn empty_input() {
        assert!(rank(vec![], SortKey::ReleaseDate).is_empty());
    }
}
