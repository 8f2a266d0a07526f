//! Query keys. 查询键。

use std::fmt::{Display, Formatter};

pub const NOTES_NAMESPACE: &str = "notes";

/// Cache identity of a list fetch: namespace, page and debounced search term.
///
/// Two fetches with equal keys are the same fetch and share a cached result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    namespace: &'static str,
    page: u32,
    search: String,
}

impl QueryKey {
    pub fn notes(page: u32, search: impl Into<String>) -> Self {
        Self {
            namespace: NOTES_NAMESPACE,
            page,
            search: search.into(),
        }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {:?}]", self.namespace, self.page, self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_components_give_equal_keys() {
        assert_eq!(QueryKey::notes(2, "work"), QueryKey::notes(2, "work".to_string()));
        assert_ne!(QueryKey::notes(2, "work"), QueryKey::notes(3, "work"));
        assert_ne!(QueryKey::notes(2, "work"), QueryKey::notes(2, ""));
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(QueryKey::notes(1, "a b").to_string(), r#"[notes, 1, "a b"]"#);
    }
}
