use std::fmt;

/// A GitHub code search query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Query for non-archived, non-fork JSON files mentioning `dependency`,
    /// restricted to `org` when one is given.
    pub fn for_dependency(org: Option<&str>, dependency: &str) -> Self {
        let mut terms = Vec::with_capacity(5);
        if let Some(org) = org.filter(|o| !o.is_empty()) {
            terms.push(format!("org:{}", org));
        }
        terms.push(dependency.to_string());
        terms.push("-is:archived".to_string());
        terms.push("-is:fork".to_string());
        terms.push("language:json".to_string());
        SearchQuery(terms.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, ready to drop into a `q=` parameter.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
