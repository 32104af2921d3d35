use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CodeSearchItem, RepositoryRef};

static MANIFEST_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)package(-lock)?\.json$").expect("manifest pattern is valid"));

/// A repository/file pair suspected of depending on the target package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentLead {
    pub repo_name: String,
    pub file_name: String,
}

impl DependentLead {
    /// Reshape the lead into the search item it was derived from.
    pub fn to_item(&self) -> CodeSearchItem {
        CodeSearchItem {
            name: Some(self.file_name.clone()),
            repository: Some(RepositoryRef {
                full_name: Some(self.repo_name.clone()),
            }),
            ..Default::default()
        }
    }
}

impl fmt::Display for DependentLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.repo_name, self.file_name)
    }
}

/// Whether `file_name` is an npm manifest or lock file, ignoring case.
pub fn is_manifest_file(file_name: &str) -> bool {
    MANIFEST_FILE.is_match(file_name)
}

/// Keep items that are manifest files in a known repository, in input order.
pub fn filter_dependents(items: &[CodeSearchItem]) -> Vec<DependentLead> {
    items
        .iter()
        .filter_map(|item| {
            let repo_name = item.repo_full_name().filter(|name| !name.is_empty())?;
            let file_name = item.name.as_deref().filter(|name| is_manifest_file(name))?;
            Some(DependentLead {
                repo_name: repo_name.to_string(),
                file_name: file_name.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: Option<&str>, repo: Option<&str>) -> CodeSearchItem {
        CodeSearchItem {
            name: name.map(str::to_string),
            repository: repo.map(|r| RepositoryRef {
                full_name: Some(r.to_string()),
            }),
            ..Default::default()
        }
    }

    fn lead(repo: &str, file: &str) -> DependentLead {
        DependentLead {
            repo_name: repo.to_string(),
            file_name: file.to_string(),
        }
    }

    #[test]
    fn keeps_manifests_with_known_repositories_in_order() {
        let items = vec![
            item(Some("package.json"), Some("org/a")),
            item(Some("README.md"), Some("org/a")),
            item(Some("package-lock.json"), Some("org/b")),
            item(Some("package.json"), None),
        ];

        assert_eq!(
            filter_dependents(&items),
            vec![lead("org/a", "package.json"), lead("org/b", "package-lock.json")]
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_manifest_file("PACKAGE.JSON"));
        assert!(is_manifest_file("Package-Lock.JSON"));

        let items = vec![
            item(Some("PACKAGE.JSON"), Some("org/a")),
            item(Some("Package-Lock.JSON"), Some("org/b")),
        ];
        assert_eq!(filter_dependents(&items).len(), 2);
    }

    #[test]
    fn rejects_other_json_files() {
        for name in ["tsconfig.json", "package.json5", "package.jsonc", "package-lock.yaml", "yarn.lock"] {
            assert!(!is_manifest_file(name), "{name} should not match");
        }
        // Anchored at the end only, as the search returns bare file names.
        assert!(is_manifest_file("my-package.json"));
    }

    #[test]
    fn drops_items_without_name_or_repository_name() {
        let items = vec![
            item(None, Some("org/a")),
            item(Some("package.json"), Some("")),
            CodeSearchItem {
                name: Some("package.json".to_string()),
                repository: Some(RepositoryRef { full_name: None }),
                ..Default::default()
            },
        ];
        assert!(filter_dependents(&items).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = vec![
            item(Some("package.json"), Some("org/a")),
            item(Some("index.js"), Some("org/a")),
            item(Some("package-lock.json"), Some("org/b")),
        ];
        let first = filter_dependents(&items);
        let reshaped: Vec<CodeSearchItem> = first.iter().map(DependentLead::to_item).collect();

        assert_eq!(filter_dependents(&reshaped), first);
    }

    #[test]
    fn displays_repo_then_file() {
        assert_eq!(lead("org/a", "package.json").to_string(), "org/a package.json");
    }
}
