use std::cmp::Ordering;

use semver::{BuildMetadata, Version};

/// Strip a single leading non-digit character from a tag (typically `v`).
///
/// Only the parsed form is affected; callers keep the raw tag for output.
///
/// Examples:
/// - "v1.2.3" -> "1.2.3"
/// - "1.2.3" -> "1.2.3"
/// - "vv1.2.3" -> "v1.2.3"
pub fn normalize_tag(tag: &str) -> &str {
    match tag.chars().next() {
        Some(first) if !first.is_ascii_digit() => &tag[first.len_utf8()..],
        _ => tag,
    }
}

/// Parse a tag into a semantic version after normalization.
///
/// Partial versions such as "1.2" are rejected.
pub fn parse_tag(tag: &str) -> Option<Version> {
    Version::parse(normalize_tag(tag)).ok()
}

/// Order two tags by semantic version precedence.
///
/// A tag that is missing or fails to parse sorts below any valid one;
/// two such tags compare equal. Build metadata does not affect the order.
pub fn compare_tags(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_precedence), b.and_then(parse_precedence)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn parse_precedence(tag: &str) -> Option<Version> {
    parse_tag(tag).map(|mut version| {
        version.build = BuildMetadata::EMPTY;
        version
    })
}
