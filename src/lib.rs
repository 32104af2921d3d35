//! # Dependents Finder
//!
//! Finds repositories in a GitHub organization whose npm manifests
//! (`package.json`, `package-lock.json`) mention a dependency, using the
//! GitHub code search API.
//!
//! ## Main Components
//!
//! - [`Args`] / [`Config`]: command line options and their validated form
//! - [`GitHubSearcher`]: walks every page of a code search
//! - [`find_repository_leads`]: builds the query and collects raw hits
//! - [`filter_dependents`]: narrows hits to [`DependentLead`]s
//!
//! ## Example
//!
//! ```no_run
//! use clap::Parser;
//! use dependents_finder_lib::{Args, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dependents_finder_lib::Error> {
//!     let args = Args::parse();
//!     let config = Config::from_args(&args)?;
//!
//!     for lead in dependents_finder_lib::run(&config).await? {
//!         println!("{}", lead);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod args;
mod config;
mod dependents;
mod error;
mod github_searcher;
mod leads;
mod models;
mod query;

pub use crate::args::{Args, DEFAULT_API_URL};
pub use crate::config::{is_valid_dependency_name, Config, TOKEN_ENV_VAR};
pub use crate::dependents::{filter_dependents, is_manifest_file, DependentLead};
pub use crate::error::{ConfigError, Error, SearchError};
pub use crate::github_searcher::GitHubSearcher;
pub use crate::leads::find_repository_leads;
pub use crate::models::{CodeSearchItem, CodeSearchPage, RepositoryRef};
pub use crate::query::SearchQuery;

/// Search for the configured dependency and return the manifest hits.
pub async fn run(config: &Config) -> Result<Vec<DependentLead>, Error> {
    let searcher = GitHubSearcher::new(config)?;
    let items = find_repository_leads(&searcher, config).await?;
    Ok(filter_dependents(&items))
}
