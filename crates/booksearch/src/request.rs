use crate::{
    query::{self, SearchField, SearchTerms},
    rank::SortKey,
};

/// Everything needed to perform a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    terms: SearchTerms,
    field: SearchField,
    sort_key: SortKey,
}

impl SearchRequest {
    /// Creates a request for `terms` matched against `field` with results ordered by `sort_key`.
    #[must_use]
    pub const fn new(terms: SearchTerms, field: SearchField, sort_key: SortKey) -> Self {
        Self {
            terms,
            field,
            sort_key,
        }
    }

    /// The search terms.
    #[must_use]
    pub const fn terms(&self) -> &SearchTerms {
        &self.terms
    }

    /// The field the terms are matched against.
    #[must_use]
    pub const fn field(&self) -> SearchField {
        self.field
    }

    /// The key results are ordered by.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The url this request is sent to.
    #[must_use]
    pub fn url(&self) -> String {
        query::build(self.terms.tokens(), self.field)
    }
}
