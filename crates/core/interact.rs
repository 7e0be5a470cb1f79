use booksearch::{SearchField, SearchTerms, SortKey};
use dialoguer::Input;
use eyre::{eyre, Context, Result};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Choices offered by the main menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Search(SearchField),
    Quit,
}

/// Prompts until the user enters a number between 1 and `options`.
pub fn user_choice(options: usize) -> Result<usize> {
    let input = Input::<String>::new()
        .with_prompt("Enter your choice")
        .validate_with(|input: &String| parse_choice(input, options).map(|_| ()))
        .interact_text()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    parse_choice(&input, options).map_err(|e| eyre!(e))
}

pub fn user_menu_choice() -> Result<MenuChoice> {
    println!(
        "
Welcome to BookSearcher!

Options:
    1. Search by Title
    2. Search by Author
    3. Quit
"
    );

    user_choice(3).map(menu_choice)
}

pub fn user_sort_key() -> Result<SortKey> {
    println!(
        "
Select sort type:
    1. By Author (ascending)
    2. By Title (ascending)
    3. By Release Date (descending)
"
    );

    user_choice(3).map(sort_key_choice)
}

/// Prompts until the user enters search terms without any digits.
pub fn user_search_terms(field: SearchField) -> Result<SearchTerms> {
    let input = Input::<String>::new()
        .with_prompt(format!("Enter book {field}"))
        .validate_with(|input: &String| {
            SearchTerms::parse(input)
                .map(|_| ())
                .map_err(|_| format!("Invalid book {field}. Please try again."))
        })
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))?;

    SearchTerms::parse(&input).wrap_err_with(|| eyre!("Invalid book {field}"))
}

pub fn wait_for_enter() -> Result<()> {
    Input::<String>::new()
        .with_prompt("Enter to return to menu")
        .allow_empty(true)
        .interact_text()
        .map(|_| ())
        .wrap_err_with(|| eyre!("User input cancelled"))
}

fn parse_choice(input: &str, options: usize) -> std::result::Result<usize, &'static str> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Ok(n),
        _ => Err(INVALID_CHOICE),
    }
}

const fn menu_choice(n: usize) -> MenuChoice {
    match n {
        1 => MenuChoice::Search(SearchField::Title),
        2 => MenuChoice::Search(SearchField::Author),
        _ => MenuChoice::Quit,
    }
}

const fn sort_key_choice(n: usize) -> SortKey {
    match n {
        1 => SortKey::Author,
        2 => SortKey::Title,
        _ => SortKey::ReleaseDate,
    }
}
