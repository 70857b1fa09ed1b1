//! Query parameters for list endpoints.

/// Filters and paging for `GET /products` and the admin list endpoints.
///
/// All fields are optional; absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Free-text search.
    pub search: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// Order/review status filter (admin lists).
    pub status: Option<String>,
    /// Sort key, e.g. `price_asc`, `newest`.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// A query with only `search` set.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// The set fields as `(key, value)` pairs, in declaration order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.search {
            pairs.push(("search", v.clone()));
        }
        if let Some(v) = &self.category {
            pairs.push(("category", v.clone()));
        }
        if let Some(v) = &self.status {
            pairs.push(("status", v.clone()));
        }
        if let Some(v) = &self.sort {
            pairs.push(("sort", v.clone()));
        }
        if let Some(v) = self.page {
            pairs.push(("page", v.to_string()));
        }
        if let Some(v) = self.per_page {
            pairs.push(("per_page", v.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_has_no_pairs() {
        assert!(ListQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn pairs_skip_unset_fields() {
        let q = ListQuery {
            category: Some("satin".into()),
            page: Some(2),
            ..ListQuery::default()
        };
        assert_eq!(
            q.to_pairs(),
            vec![("category", "satin".to_string()), ("page", "2".to_string())]
        );
    }
}
