use booksearch::{language, Book};

const NOT_AVAILABLE: &str = "N/A";
const SEPARATOR: &str = "-----------------------------------------------";

/// Renders `books` in the given order, numbered from `books.len()` down to 1.
pub fn render_results(books: &[Book]) -> String {
    let mut out = format!("Search results ({}):\n", books.len());

    for (index, book) in books.iter().enumerate() {
        out.push_str(&render_entry(books.len() - index, book));
    }

    out
}

fn render_entry(ordinal: usize, book: &Book) -> String {
    format!(
        "\n{SEPARATOR}\n{ordinal}:\n    Title: {}\n    Author(s): {}\n\n    Release Date: {}\n    Language(s): {}\n",
        book.title().unwrap_or(NOT_AVAILABLE),
        authors(book),
        release_date(book),
        languages(book),
    )
}

fn authors(book: &Book) -> String {
    book.authors()
        .filter(|a| !a.is_empty())
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |a| a.join(", "))
}

fn release_date(book: &Book) -> String {
    book.first_publish_year()
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |y| y.to_string())
}

fn languages(book: &Book) -> String {
    book.languages()
        .filter(|l| !l.is_empty())
        .map_or_else(|| NOT_AVAILABLE.to_owned(), language::display_names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_numbering() {
        let books = vec![Book::new("first"), Book::new("second"), Book::new("third")];
        let out = render_results(&books);

        let first = out.find("3:\n    Title: first").unwrap();
        let second = out.find("2:\n    Title: second").unwrap();
        let third = out.find("1:\n    Title: third").unwrap();
        assert!(out.starts_with("Search results (3):\n"));
        assert!(first < second && second < third);
    }

    #[test]
    fn complete_book() {
        let book = Book::new("Good Omens")
            .with_authors(["Terry Pratchett", "Neil Gaiman"])
            .with_first_publish_year(1990)
            .with_languages(["eng", "fre"]);

        let out = render_results(&[book]);

        assert!(out.contains("Title: Good Omens\n"));
        assert!(out.contains("Author(s): Terry Pratchett, Neil Gaiman\n"));
        assert!(out.contains("Release Date: 1990\n"));
        assert!(out.contains("Language(s): English, French\n"));
    }

    #[test]
    fn missing_values_are_not_available() {
        let out = render_results(&[Book::default()]);

        assert!(out.contains("Title: N/A\n"));
        assert!(out.contains("Author(s): N/A\n"));
        assert!(out.contains("Release Date: N/A\n"));
        assert!(out.contains("Language(s): N/A\n"));
    }

    #[test]
    fn single_entry_layout() {
        let book = Book::new("Dune").with_first_publish_year(1965);

        assert_eq!(
            format!(
                "\n{SEPARATOR}\n7:\n    Title: Dune\n    Author(s): N/A\n\n    Release Date: 1965\n    Language(s): N/A\n"
            ),
            render_entry(7, &book)
        );
    }

    #[test]
    fn no_results() {
        assert_eq!("Search results (0):\n", render_results(&[]));
    }
}
