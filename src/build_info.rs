//! Build metadata injected by `build.rs`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_COMMIT: &str = env!("THEMEKIT_BUILD_GIT_HASH");

/// UTC build time (`unix:<secs>` when `date` is unavailable).
pub const BUILD_TIMESTAMP: &str = env!("THEMEKIT_BUILD_TIMESTAMP");

/// Appended to `themekit --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build:\n  commit: ",
    env!("THEMEKIT_BUILD_GIT_HASH"),
    "\n  built:  ",
    env!("THEMEKIT_BUILD_TIMESTAMP")
);

/// `themekit --version` body; clap prefixes the binary name.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("THEMEKIT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("THEMEKIT_BUILD_TIMESTAMP")
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_lists_version_commit_and_build_time() {
        let lines: Vec<&str> = LONG_VERSION.lines().collect();
        assert_eq!(
            lines,
            [
                VERSION.to_string(),
                format!("commit: {GIT_COMMIT}"),
                format!("built: {BUILD_TIMESTAMP}"),
            ]
        );
    }

    #[test]
    fn help_trailer_carries_the_same_metadata() {
        assert!(HELP_BUILD_METADATA.contains(GIT_COMMIT));
        assert!(HELP_BUILD_METADATA.contains(BUILD_TIMESTAMP));
    }
}
