//! Query parameters for endpoint calls.

use std::collections::BTreeMap;

use url::Url;

/// A set of query parameters.
///
/// The nExt API takes every argument as a query parameter, including on
/// `POST`, `PUT`, and `DELETE` calls. Keys are kept sorted, so a given
/// parameter set always serializes to the same query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts a parameter and returns the set, for chained construction.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the parameters to the given URL and returns the result.
    /// An empty set leaves the URL untouched.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.0.is_empty() {
            return url;
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.0 {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
