//! New-version discovery for the `check` operation

use std::sync::Arc;

use tracing::{debug, info};

use crate::release::error::SourceError;
use crate::release::source::ReleaseSource;
use crate::release::types::ReleaseView;
use crate::resource::filter::OrderedCandidateSet;
use crate::resource::request::CheckRequest;
use crate::resource::version::{Version, VersionCursor};

/// Versions newer than `cursor`, ascending.
///
/// - Empty candidate set: nothing to report.
/// - Empty cursor: only the latest version, to seed the pipeline.
/// - Cursor at the latest version (by tag, or by id for drafts): nothing new.
/// - Cursor found: every candidate after it.
/// - Cursor not found (deleted or retagged): reset to the latest version.
pub fn resolve_new_versions<R: ReleaseView>(
    candidates: &OrderedCandidateSet<'_, R>,
    cursor: &VersionCursor,
) -> Vec<Version> {
    let Some(latest) = candidates.latest() else {
        return vec![];
    };

    if cursor.is_empty() {
        return vec![Version::from_release(latest)];
    }

    if cursor.matches(latest) {
        return vec![];
    }

    let mut found = false;
    let mut newer = Vec::new();
    for release in candidates.iter() {
        if found {
            newer.push(Version::from_release(release));
        } else {
            found = cursor.matches(release);
        }
    }

    if !found {
        info!(
            "Version {:?} is no longer among the candidates; starting over from the latest",
            cursor
        );
        return vec![Version::from_release(latest)];
    }

    newer
}

/// Runs `check` against a release source
pub struct CheckCommand {
    source: Arc<dyn ReleaseSource>,
}

impl CheckCommand {
    pub fn new(source: Arc<dyn ReleaseSource>) -> Self {
        Self { source }
    }

    /// Fetch releases once and report versions newer than the request's cursor.
    ///
    /// Only a failing fetch is an error; a repository without releases yields `[]`.
    pub async fn run(&self, request: &CheckRequest) -> Result<Vec<Version>, SourceError> {
        let releases = self.source.list_releases().await?;

        let candidates = OrderedCandidateSet::build(&releases, request.source.drafts);
        let cursor = request.cursor();
        let versions = resolve_new_versions(&candidates, &cursor);

        debug!(
            "Found {} new versions since {:?} among {} releases",
            versions.len(),
            cursor,
            releases.len()
        );

        Ok(versions)
    }
}
