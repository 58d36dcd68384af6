//! Release source test utilities

use async_trait::async_trait;

use github_release_resource::config::Source;
use github_release_resource::release::error::SourceError;
use github_release_resource::release::source::ReleaseSource;
use github_release_resource::release::types::{Release, ReleaseView};
use github_release_resource::resource::request::CheckRequest;
use github_release_resource::resource::version::Version;

/// In-memory release source for testing
#[derive(Default)]
pub struct FakeSource {
    releases: Vec<Release>,
    fail: bool,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_published(mut self, tags: &[&str]) -> Self {
        let next_id = self.releases.len() as u64 + 1;
        self.releases.extend(
            tags.iter()
                .enumerate()
                .map(|(i, tag)| Release::published(next_id + i as u64, tag)),
        );
        self
    }

    pub fn with_release(mut self, release: Release) -> Self {
        self.releases.push(release);
        self
    }

    pub fn failing() -> Self {
        Self {
            releases: vec![],
            fail: true,
        }
    }
}

#[async_trait]
impl ReleaseSource for FakeSource {
    async fn list_releases(&self) -> Result<Vec<Release>, SourceError> {
        if self.fail {
            return Err(SourceError::Unauthorized);
        }
        Ok(self.releases.clone())
    }

    async fn get_release_by_tag(&self, tag: &str) -> Result<Release, SourceError> {
        self.releases
            .iter()
            .find(|r| r.tag() == Some(tag))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(tag.to_string()))
    }

    async fn get_release(&self, id: u64) -> Result<Release, SourceError> {
        self.releases
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}

/// Check request for a test repository
pub fn check_request(drafts: bool, version: Option<Version>) -> CheckRequest {
    CheckRequest {
        source: Source {
            user: "concourse".to_string(),
            repository: "concourse".to_string(),
            drafts,
            ..Source::default()
        },
        version,
    }
}

pub fn tags(tags: &[&str]) -> Vec<Version> {
    tags.iter().map(|t| Version::from_tag(t)).collect()
}
