use tracing::{debug, info};

use crate::error::SearchError;
use crate::models::CodeSearchItem;
use crate::query::SearchQuery;
use crate::{Config, GitHubSearcher};

/// Search for every file in the configured organization that mentions the
/// dependency, returning the raw search items across all pages.
pub async fn find_repository_leads(
    searcher: &GitHubSearcher,
    config: &Config,
) -> Result<Vec<CodeSearchItem>, SearchError> {
    let query = SearchQuery::for_dependency(config.org.as_deref(), &config.dependency);
    info!(query = %query, "Searching for repository leads");
    if let Some(semver) = &config.semver {
        debug!(semver = %semver, "Semver filter accepted but not applied");
    }

    let items = searcher.search_code(&query).await?;
    info!(count = items.len(), "Collected search results");
    Ok(items)
}
