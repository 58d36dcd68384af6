//! Fetching a single version for the `in` operation

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::release::error::SourceError;
use crate::release::semver::normalize_tag;
use crate::release::source::ReleaseSource;
use crate::release::types::{Release, ReleaseView};
use crate::resource::error::FetchError;
use crate::resource::metadata::metadata_from_release;
use crate::resource::request::{InRequest, InResponse};
use crate::resource::version::{Version, VersionCursor};

/// File holding the raw tag of the fetched release
pub const TAG_FILE: &str = "tag";

/// File holding the tag without its leading prefix
pub const VERSION_FILE: &str = "version";

/// Runs `in` against a release source
pub struct InCommand {
    source: Arc<dyn ReleaseSource>,
}

impl InCommand {
    pub fn new(source: Arc<dyn ReleaseSource>) -> Self {
        Self { source }
    }

    /// Look up the requested release and write its tag files into `destination`.
    ///
    /// Untagged drafts produce no files.
    pub async fn run(
        &self,
        destination: &Path,
        request: &InRequest,
    ) -> Result<InResponse, FetchError> {
        let release = self.find_release(&request.version).await?;

        std::fs::create_dir_all(destination)?;

        if let Some(tag) = release.tag() {
            std::fs::write(destination.join(TAG_FILE), tag)?;
            std::fs::write(destination.join(VERSION_FILE), normalize_tag(tag))?;
        }

        info!(
            "Fetched release {} ({}) into {:?}",
            release.id,
            release.tag().unwrap_or("untagged"),
            destination
        );

        Ok(InResponse {
            version: Version::from_release(&release),
            metadata: metadata_from_release(&release),
        })
    }

    async fn find_release(&self, version: &Version) -> Result<Release, FetchError> {
        let result = match VersionCursor::from(version) {
            VersionCursor::Empty => return Err(FetchError::MissingVersion),
            VersionCursor::Tag(tag) => self.source.get_release_by_tag(&tag).await,
            VersionCursor::Draft { id, .. } => {
                let numeric = id
                    .parse::<u64>()
                    .map_err(|_| FetchError::InvalidId(id.clone()))?;
                self.source.get_release(numeric).await
            }
        };

        result.map_err(|e| match e {
            SourceError::NotFound(_) => FetchError::ReleaseNotFound(describe(version)),
            e => FetchError::Source(e),
        })
    }
}

fn describe(version: &Version) -> String {
    if version.id.is_empty() {
        format!("tag {}", version.tag)
    } else {
        format!("id {}", version.id)
    }
}
