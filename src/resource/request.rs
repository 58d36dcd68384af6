//! Request and response payloads exchanged over stdin/stdout

use serde::{Deserialize, Serialize};

use crate::config::Source;
use crate::resource::metadata::MetadataPair;
use crate::resource::version::{Version, VersionCursor};

/// Payload for `check`; `version` is null on the first run
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub source: Source,
    #[serde(default)]
    pub version: Option<Version>,
}

impl CheckRequest {
    pub fn cursor(&self) -> VersionCursor {
        VersionCursor::from(self.version.as_ref())
    }
}

/// Payload for `in`
#[derive(Debug, Clone, Deserialize)]
pub struct InRequest {
    pub source: Source,
    pub version: Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InResponse {
    pub version: Version,
    pub metadata: Vec<MetadataPair>,
}
