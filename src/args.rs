use clap::Parser;

/// Default base URL of the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Find repositories in a GitHub organization whose npm manifests
/// reference a given dependency.
#[derive(Parser, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Searches GitHub code for a dependency name and reports every package.json or package-lock.json hit, one repository/file pair per line."
)]
pub struct Args {
    /// The GitHub organization to scan.
    #[clap(long, value_name = "ORGANIZATION")]
    pub org: Option<String>,

    /// The GitHub token to use for authentication. By default, $GITHUB_TOKEN is used.
    // No clap `env` here: the value would show up in --help.
    #[clap(long)]
    pub token: Option<String>,

    /// The name of the dependency to look for.
    #[clap(short, long, value_name = "DEPENDENCY_NAME", required = true)]
    pub dependency: String,

    /// The npm-compatible semantic version to look for.
    #[clap(short, long)]
    pub semver: Option<String>,

    /// Maximum number of result pages to retrieve.
    /// Each page contains up to 100 results.
    #[clap(short = 'p', long, value_name = "NUM")]
    pub max_pages: Option<u32>,

    /// Base URL of the GitHub REST API.
    #[clap(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}
