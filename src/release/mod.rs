//! Release source layer
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ ReleaseSource│◀────│ GitHubClient │
//! │   (trait)    │     │   (reqwest)  │
//! └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │   Release    │────▶│    semver    │
//! │ (ReleaseView)│     │ (tag order)  │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! - [`source`]: `ReleaseSource` trait for listing and looking up releases
//! - [`github`]: GitHub Releases API implementation
//! - [`types`]: release record and the `ReleaseView` capability trait
//! - [`semver`]: tag normalization and semantic version ordering
//! - [`error`]: errors raised by release sources

pub mod error;
pub mod github;
pub mod semver;
pub mod source;
pub mod types;
