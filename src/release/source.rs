//! Release source trait for fetching releases of a repository

#[cfg(test)]
use mockall::automock;

use crate::release::error::SourceError;
use crate::release::types::Release;

/// Trait for fetching releases from a hosting service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every release of the configured repository
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - All releases in the order the service reports them;
    ///   an empty list is a valid result
    /// * `Err(SourceError)` - If the service could not be reached or rejected the request
    async fn list_releases(&self) -> Result<Vec<Release>, SourceError>;

    /// Fetches the release carrying the given tag
    async fn get_release_by_tag(&self, tag: &str) -> Result<Release, SourceError>;

    /// Fetches a release by its numeric identifier (works for untagged drafts)
    async fn get_release(&self, id: u64) -> Result<Release, SourceError>;
}
