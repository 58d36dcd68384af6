//! Release-tracking resource for CI pipelines
//!
//! - [`release`]: GitHub release records, the release source seam and its HTTP client
//! - [`resource`]: `check` and `in` operations built on top of a release source
//! - [`config`]: source configuration and filesystem locations
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod release;
pub mod resource;
