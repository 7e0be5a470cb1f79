use assert_cmd::prelude::*;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
// Calling help does not require any application logic so if this tests fails then we know it
// is to do with the clap cli setup code.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("booksearch")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn check_search_subcommand_help() -> Result<(), Box<dyn std::error::Error>> {
    for subcommand in ["title", "author"] {
        let mut cmd = Command::cargo_bin("booksearch")?;

        cmd.args([subcommand, "--help"]);
        cmd.assert().success();
    }

    Ok(())
}

#[test]
fn search_terms_with_digits_fail_without_a_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("booksearch")?;

    cmd.args(["title", "catch", "22"]);
    cmd.assert().failure().code(2);

    Ok(())
}

#[test]
fn unknown_sort_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("booksearch")?;

    cmd.args(["author", "tolkien", "--sort", "pages"]);
    cmd.assert().failure();

    Ok(())
}
