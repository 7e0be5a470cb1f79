use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// A single document from the search API.
///
/// The API does not guarantee any field of a document, and some documents carry
/// fields with unexpected types. Every field here is optional and a field that
/// cannot be read is treated the same as a missing one, so one odd document
/// never fails the whole response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Book {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    author_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_year")]
    first_publish_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    language: Option<Vec<String>>,
}

impl Book {
    /// Creates a [`Book`] with only a title, see the `with_*` methods for the other fields.
    #[must_use]
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the author names.
    #[must_use]
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_name = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the year of first publication.
    #[must_use]
    pub fn with_first_publish_year(mut self, year: i64) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    /// Sets the language codes.
    #[must_use]
    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// The title of the book.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Author names in the order the API lists them.
    #[must_use]
    pub fn authors(&self) -> Option<&[String]> {
        self.author_name.as_deref()
    }

    /// Year the work was first published.
    #[must_use]
    pub const fn first_publish_year(&self) -> Option<i64> {
        self.first_publish_year
    }

    /// Language codes of the available editions.
    #[must_use]
    pub fn languages(&self) -> Option<&[String]> {
        self.language.as_deref()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

// Years have been seen as both numbers and numeric strings.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(year)
}
