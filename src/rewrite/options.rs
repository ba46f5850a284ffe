use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "lib";
pub const DEFAULT_SUFFIX: &str = ".dart";
pub const OLD_IMPORT: &str = "bexly/core/database/pockaw_database";
pub const NEW_IMPORT: &str = "bexly/core/database/app_database";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// File name suffix a file must end with to be visited. Empty matches all files.
    pub suffix: String,
    pub from: String,
    pub to: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            suffix: DEFAULT_SUFFIX.to_string(),
            from: OLD_IMPORT.to_string(),
            to: NEW_IMPORT.to_string(),
        }
    }
}

impl RewriteOptions {
    pub fn matches_name(&self, name: &str) -> bool {
        name.ends_with(&self.suffix)
    }
}
