use log::{debug, info, trace};
use serde::Deserialize;

use crate::{rank, Book, SearchRequest};

use super::{Client, Error};

pub(crate) fn search_books<C: Client>(request: &SearchRequest) -> Result<Vec<Book>, Error> {
    let url = request.url();
    info!(
        "Searching Open Library by {} for '{}'",
        request.field(),
        request.terms().tokens().join(" ")
    );

    let client = C::default();
    let SearchModel { docs, num_found } = client.get_json(&url)?;

    trace!("Request was successful");
    match num_found {
        Some(n) => info!("{n} books found, {} returned", docs.len()),
        None => info!("{} books returned", docs.len()),
    }
    if let Some(first) = docs.first() {
        debug!("First document: {first:?}");
    }

    Ok(rank::rank(docs, request.sort_key()))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    docs: Vec<Book>,
    #[serde(default, rename = "numFound")]
    num_found: Option<u64>,
}


#[test]
fn search_model_can_be_derived_from_json() {
    let json = include_str!("../../../../tests/data/open_library_search.json");
    let model: SearchModel = serde_json::from_str(json).unwrap();

    assert_eq!(Some(5), model.num_found);
    assert_eq!(5, model.docs.len());
    assert_eq!(Some("Dune"), model.docs[0].title());
    assert_eq!(Some(1965), model.docs[0].first_publish_year());
}
