use serde::Deserialize;

/// One page of a `GET /search/code` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeSearchPage {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<CodeSearchItem>,
}

/// A single matched file. Only the fields this tool reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeSearchItem {
    pub name: Option<String>,
    pub path: Option<String>,
    pub html_url: Option<String>,
    pub repository: Option<RepositoryRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    pub full_name: Option<String>,
}

impl CodeSearchItem {
    /// `repository.full_name`, if the item carries one.
    pub fn repo_full_name(&self) -> Option<&str> {
        self.repository.as_ref()?.full_name.as_deref()
    }
}
