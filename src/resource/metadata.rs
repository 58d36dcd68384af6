//! Release metadata shown alongside a fetched version

use serde::Serialize;

use crate::release::types::{Release, ReleaseView};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataPair {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub markdown: bool,
}

impl MetadataPair {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            ..Self::default()
        }
    }
}

/// Metadata for `release`, one pair per field that is present
pub fn metadata_from_release(release: &Release) -> Vec<MetadataPair> {
    let mut metadata = Vec::new();

    if let Some(name) = &release.name {
        metadata.push(MetadataPair {
            url: release.html_url.clone().unwrap_or_default(),
            ..MetadataPair::new("name", name)
        });
    }

    if let Some(url) = &release.html_url {
        metadata.push(MetadataPair::new("url", url));
    }

    if let Some(body) = &release.body {
        metadata.push(MetadataPair {
            markdown: true,
            ..MetadataPair::new("body", body)
        });
    }

    if let Some(tag) = release.tag() {
        metadata.push(MetadataPair::new("tag", tag));
    }

    if release.draft {
        metadata.push(MetadataPair::new("draft", "true"));
    }

    if release.prerelease {
        metadata.push(MetadataPair::new("pre-release", "true"));
    }

    metadata
}
