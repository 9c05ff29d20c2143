use git_version::git_version;

// -modified marks builds from a dirty tree
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

/// Where this build sits relative to the latest release tag.
fn release_channel() -> String {
    let tag = option_env!("RELEASE_VERSION").filter(|t| !t.is_empty());
    let latest = option_env!("LATEST_TAG").filter(|t| !t.is_empty());
    let ahead = option_env!("COMMITS_AHEAD").filter(|n| !n.is_empty());
    match (tag, latest, ahead) {
        (Some(tag), _, _) => format!("release {tag}"),
        (None, Some(latest), Some(ahead)) => {
            format!("development branch {ahead} commits ahead of {latest}")
        }
        (None, Some(latest), None) => format!("development branch ahead of {latest}"),
        (None, None, _) => "development".to_string(),
    }
}

/// Build and model details shown by `/info`.
pub fn get_system_info(model: &str, endpoint: &str) -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };

    [
        format!("{} - {}", env!("CARGO_PKG_NAME"), release_channel()),
        format!("Commit: {COMMIT}"),
        format!("{profile} build"),
        format!("Model: {model} at {endpoint}"),
    ]
    .join("\n")
}
