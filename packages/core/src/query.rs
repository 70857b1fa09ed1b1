//! Query-string helpers.
//!
//! Pure string computation. Keys and values are percent-encoded with
//! [`urlencoding::encode`]; pair order is preserved.

use urlencoding::encode;

/// Encode flat key/value pairs as `k1=v1&k2=v2`.
pub fn query_string<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k.as_ref()), encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// `path?query`, or `path` unchanged when there are no params.
///
/// If `path` already carries a query, the new pairs are appended with `&`.
pub fn with_query<K, V>(path: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return path.to_string();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{}", query_string(params))
}

/// Link to the project gallery filtered by a search term.
///
/// Returns `None` for a blank query.
pub fn search_link(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(format!("projects.html?search={}", encode(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_param_on_products() {
        assert_eq!(with_query("/products", &[("search", "blue")]), "/products?search=blue");
    }

    #[test]
    fn no_params_no_question_mark() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(with_query("/products", &empty), "/products");
    }

    #[test]
    fn pairs_keep_order_and_are_encoded() {
        let q = query_string(&[("category", "satin & gloss"), ("page", "2")]);
        assert_eq!(q, "category=satin%20%26%20gloss&page=2");
    }

    #[test]
    fn appends_to_existing_query() {
        assert_eq!(with_query("/a?x=1", &[("y", "2")]), "/a?x=1&y=2");
    }

    #[test]
    fn search_link_trims_and_encodes() {
        assert_eq!(
            search_link("  sky blue ").as_deref(),
            Some("projects.html?search=sky%20blue")
        );
        assert_eq!(search_link("   "), None);
    }
}
