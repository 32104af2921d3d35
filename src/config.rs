use std::env;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::ConfigError;
use crate::Args;

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

static DEPENDENCY_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.@-]+$").expect("dependency name pattern is valid")
});

/// Resolved, validated run configuration.
#[derive(Clone)]
pub struct Config {
    pub org: Option<String>,
    pub dependency: String,
    /// Accepted on the command line; not used to narrow results yet.
    pub semver: Option<String>,
    pub token: String,
    pub api_url: String,
    pub max_pages: Option<u32>,
}

impl Config {
    /// Resolve the configuration from parsed arguments, falling back to
    /// `GITHUB_TOKEN` for the credential.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        Self::resolve(args, env::var(TOKEN_ENV_VAR).ok())
    }

    /// Validate `args`, using `env_token` when no token flag was passed.
    pub fn resolve(args: &Args, env_token: Option<String>) -> Result<Self, ConfigError> {
        info!(
            org = ?args.org,
            dependency = %args.dependency,
            semver = ?args.semver,
            token_flag = args.token.is_some(),
            max_pages = ?args.max_pages,
            api_url = %args.api_url,
            "Parsed options"
        );

        if !is_valid_dependency_name(&args.dependency) {
            return Err(ConfigError::InvalidDependency(args.dependency.clone()));
        }

        let token = non_blank(args.token.clone())
            .or_else(|| non_blank(env_token))
            .ok_or(ConfigError::MissingToken)?;

        Ok(Config {
            org: args.org.clone(),
            dependency: args.dependency.clone(),
            semver: args.semver.clone(),
            token,
            api_url: args.api_url.clone(),
            max_pages: args.max_pages,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("org", &self.org)
            .field("dependency", &self.dependency)
            .field("semver", &self.semver)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

/// Whether `name` only uses characters allowed in an npm package name.
pub fn is_valid_dependency_name(name: &str) -> bool {
    DEPENDENCY_NAME.is_match(name)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
