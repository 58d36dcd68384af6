//! Pipeline resource operations
//!
//! # Modules
//!
//! - [`check`]: discovers versions newer than the pipeline's cursor
//! - [`fetch`]: fetches one version for `in`
//! - [`filter`]: selects and orders candidate releases
//! - [`version`]: version wire form and the cursor sum type
//! - [`metadata`]: release metadata pairs
//! - [`request`]: stdin/stdout payloads
//! - [`error`]: errors raised by `in`

pub mod check;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod metadata;
pub mod request;
pub mod version;
