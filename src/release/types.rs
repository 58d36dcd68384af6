//! Release records

use serde::Deserialize;

/// The fields of a release that version ordering depends on.
///
/// Filtering, ordering and delta computation only see releases through this
/// trait, so they can run against synthetic fixtures as well as API records.
pub trait ReleaseView {
    fn id(&self) -> u64;

    /// Tag name; `None` for drafts that were never tagged
    fn tag(&self) -> Option<&str>;

    fn is_draft(&self) -> bool;
}

/// A release as returned by the GitHub Releases API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    pub id: u64,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Release {
    /// A published release with the given tag
    pub fn published(id: u64, tag: &str) -> Self {
        Self {
            id,
            tag_name: Some(tag.to_string()),
            ..Self::default()
        }
    }

    /// A draft release, optionally tagged
    pub fn draft(id: u64, tag: Option<&str>) -> Self {
        Self {
            id,
            tag_name: tag.map(str::to_string),
            draft: true,
            ..Self::default()
        }
    }
}

impl ReleaseView for Release {
    fn id(&self) -> u64 {
        self.id
    }

    // The API reports untagged drafts with an empty tag_name
    fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|t| !t.is_empty())
    }

    fn is_draft(&self) -> bool {
        self.draft
    }
}
