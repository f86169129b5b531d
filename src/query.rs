use std::fmt::Display;

use url::form_urlencoded;

/// Ordered collection of URL query parameters.
///
/// Keys are emitted in insertion order and values are percent-encoded on
/// [`build`](QueryString::build). Absent values are skipped entirely, so a
/// filter with no fields set produces no query string at all.
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when the value is present; `None` is a no-op.
    pub fn append<V: Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`, preserving insertion
    /// order.
    pub fn build(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Join onto `path`, adding `?` only when at least one parameter is set.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.build())
        }
    }
}

/// Conversion of a filter object into query parameters.
///
/// Implemented by every filter type; list endpoints feed the result through
/// [`QueryString::append_to`] so that unset fields never appear on the wire.
pub trait ToQuery {
    /// Append this filter's parameters to `query` in declaration order.
    fn encode(&self, query: &mut QueryString);

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        self.encode(&mut query);
        query
    }
}

/// Resolve a list endpoint path against an optional filter.
pub(crate) fn filtered_path<F: ToQuery>(path: &str, filters: Option<&F>) -> String {
    match filters {
        Some(filters) => filters.to_query().append_to(path),
        None => path.to_string(),
    }
}

/// Resolve a search endpoint path: the query term always comes first, then
/// any remaining filter parameters.
pub(crate) fn search_path<F: ToQuery>(path: &str, term: &str, filters: Option<&F>) -> String {
    let mut query = QueryString::new();
    query.append("search", Some(term));
    if let Some(filters) = filters {
        filters.encode(&mut query);
    }
    query.append_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_values() {
        let mut query = QueryString::new();
        query.append("page", Some(2));
        query.append("limit", None::<u32>);
        query.append("search", Some("wifi"));
        assert_eq!(query.build(), "page=2&search=wifi");
    }

    #[test]
    fn preserves_insertion_order() {
        let mut query = QueryString::new();
        query.append("b", Some("2"));
        query.append("a", Some("1"));
        query.append("c", Some("3"));
        assert_eq!(query.build(), "b=2&a=1&c=3");
    }

    #[test]
    fn percent_encodes_values() {
        let mut query = QueryString::new();
        query.append("search", Some("café & wifi"));
        assert_eq!(query.build(), "search=caf%C3%A9+%26+wifi");
    }

    #[test]
    fn stringifies_booleans_and_numbers_naturally() {
        let mut query = QueryString::new();
        query.append("isAnonymous", Some(true));
        query.append("maxCost", Some(50));
        assert_eq!(query.build(), "isAnonymous=true&maxCost=50");
    }

    #[test]
    fn append_to_omits_question_mark_when_empty() {
        let query = QueryString::new();
        assert_eq!(query.append_to("/feedbacks"), "/feedbacks");

        let mut query = QueryString::new();
        query.append("page", Some(1));
        assert_eq!(query.append_to("/feedbacks"), "/feedbacks?page=1");
    }

    #[test]
    fn search_path_puts_the_term_first() {
        struct Paging;
        impl ToQuery for Paging {
            fn encode(&self, query: &mut QueryString) {
                query.append("page", Some(3));
            }
        }
        assert_eq!(
            search_path("/groups/search", "engineering", Some(&Paging)),
            "/groups/search?search=engineering&page=3"
        );
        assert_eq!(
            search_path("/groups/search", "engineering", None::<&Paging>),
            "/groups/search?search=engineering"
        );
    }
}
