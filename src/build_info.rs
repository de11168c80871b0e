//! Build metadata injected at compile time.

use std::fmt;

/// Immutable description of the running binary.
///
/// Values come from `REPARTEE_*` variables set when the binary is built,
/// so a deployed job can report exactly which source produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub app_name: &'static str,
    pub project: &'static str,
    pub version: &'static str,
    pub git_commit: &'static str,
    pub date: &'static str,
}

impl BuildInfo {
    /// Collect the values baked into this build.
    pub fn from_build_env() -> Self {
        Self {
            app_name: option_env!("REPARTEE_APP_NAME").unwrap_or("repartee"),
            project: option_env!("REPARTEE_PROJECT").unwrap_or("unknown"),
            version: option_env!("REPARTEE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
            git_commit: option_env!("REPARTEE_GIT_COMMIT").unwrap_or("?"),
            date: option_env!("REPARTEE_BUILD_DATE").unwrap_or(""),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) on {}",
            self.app_name, self.project, self.version, self.git_commit, self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_version_format() {
        let info = BuildInfo {
            app_name: "repartee",
            project: "roster-jobs",
            version: "v1.2.3",
            git_commit: "92e9ce6",
            date: "2024-02-14T07:00:26Z",
        };
        assert_eq!(
            info.to_string(),
            "repartee roster-jobs v1.2.3 (92e9ce6) on 2024-02-14T07:00:26Z"
        );
    }
}
