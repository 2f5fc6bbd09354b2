use std::fmt;

use serde::Serialize;

// runtime classification derived from the build version
// dev builds carry a "dev" marker somewhere in the version string (e.g. 0.21.0-dev)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    // plain substring containment, case-sensitive
    // this is not a semver pre-release check
    pub fn resolve(build_version: &str) -> Self {
        if build_version.contains("dev") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
