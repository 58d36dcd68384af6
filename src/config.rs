use serde::Deserialize;
use std::path::PathBuf;

/// Default base URL for the GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// User agent sent with every API request
pub const USER_AGENT: &str = "github-release-resource";

/// Timeout for a single HTTP request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Number of releases requested per page when listing releases
pub const RELEASES_PER_PAGE: u32 = 100;

/// Upper bound on pages followed when listing releases
pub const MAX_RELEASE_PAGES: usize = 50;

const APP_NAME: &str = "github-release-resource";

/// Resource source configuration, as supplied by the pipeline
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Source {
    /// Owner of the repository
    pub user: String,
    pub repository: String,
    #[serde(default)]
    pub access_token: Option<String>,
    /// Overrides [`DEFAULT_API_URL`], e.g. for GitHub Enterprise
    #[serde(default)]
    pub github_api_url: Option<String>,
    /// Track draft releases instead of published ones
    #[serde(default)]
    pub drafts: bool,
}

impl Source {
    /// Access token, if one was configured and is not blank
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// API base URL without a trailing slash
    pub fn api_url(&self) -> &str {
        self.github_api_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
    }
}

/// Returns the path to the data directory.
/// Uses $XDG_DATA_HOME/github-release-resource if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/github-release-resource,
/// or ./github-release-resource if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_NAME)
}
