//! Version identities exchanged with the pipeline

use serde::{Deserialize, Serialize};

use crate::release::semver::normalize_tag;
use crate::release::types::ReleaseView;

/// Wire form of a version, both as the cursor the pipeline sends and as the
/// tokens `check` and `in` report back.
///
/// Published releases are identified by `tag`; drafts also carry their
/// numeric `id`, since a draft may have no tag at all. Empty fields are
/// treated as absent and omitted on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl Version {
    pub fn from_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: String::new(),
        }
    }

    /// Token identifying `release`; drafts carry their id alongside any tag
    pub fn from_release<R: ReleaseView + ?Sized>(release: &R) -> Self {
        Self {
            tag: release.tag().unwrap_or_default().to_string(),
            id: if release.is_draft() {
                release.id().to_string()
            } else {
                String::new()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.id.is_empty()
    }
}

/// The last version the pipeline observed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionCursor {
    /// No prior observation
    #[default]
    Empty,
    /// A published release, identified by tag
    Tag(String),
    /// A draft release, identified by id and possibly tagged
    Draft { id: String, tag: Option<String> },
}

impl VersionCursor {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Tag(tag) => Some(tag.as_str()),
            Self::Draft { tag, .. } => tag.as_deref(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Draft { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the cursor's tag names `tag`, ignoring a leading `v`-style prefix
    pub fn tag_matches(&self, tag: Option<&str>) -> bool {
        match (self.tag(), tag) {
            (Some(ours), Some(theirs)) => normalize_tag(ours) == normalize_tag(theirs),
            _ => false,
        }
    }

    /// Whether `release` is the release this cursor points at.
    ///
    /// Drafts match on id, published releases on their tag.
    pub fn matches<R: ReleaseView + ?Sized>(&self, release: &R) -> bool {
        if release.is_draft() {
            let id = release.id().to_string();
            self.id() == Some(id.as_str())
        } else {
            self.tag_matches(release.tag())
        }
    }
}

impl From<&Version> for VersionCursor {
    fn from(version: &Version) -> Self {
        let tag = (!version.tag.is_empty()).then(|| version.tag.clone());
        match (version.id.is_empty(), tag) {
            (false, tag) => Self::Draft {
                id: version.id.clone(),
                tag,
            },
            (true, Some(tag)) => Self::Tag(tag),
            (true, None) => Self::Empty,
        }
    }
}

impl From<Option<&Version>> for VersionCursor {
    fn from(version: Option<&Version>) -> Self {
        version.map(Self::from).unwrap_or_default()
    }
}
