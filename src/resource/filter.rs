//! Candidate selection and ordering

use tracing::debug;

use crate::release::semver::{compare_tags, parse_tag};
use crate::release::types::ReleaseView;

/// Whether `release` takes part in version comparisons for this run.
///
/// The resource tracks either drafts or published releases, never both,
/// and only releases whose tag parses as a semantic version.
pub fn is_candidate<R: ReleaseView + ?Sized>(release: &R, include_drafts: bool) -> bool {
    if release.is_draft() != include_drafts {
        return false;
    }

    release.tag().and_then(parse_tag).is_some()
}

/// Releases eligible this run, ascending by semantic version
#[derive(Debug)]
pub struct OrderedCandidateSet<'a, R> {
    releases: Vec<&'a R>,
}

impl<'a, R: ReleaseView> OrderedCandidateSet<'a, R> {
    /// Filter `releases` down to candidates and sort them
    pub fn build(releases: &'a [R], include_drafts: bool) -> Self {
        let mut candidates: Vec<&R> = releases
            .iter()
            .filter(|release| is_candidate(*release, include_drafts))
            .collect();

        candidates.sort_by(|a, b| compare_tags(a.tag(), b.tag()));

        debug!(
            "{} of {} releases are candidates (drafts: {})",
            candidates.len(),
            releases.len(),
            include_drafts
        );

        Self {
            releases: candidates,
        }
    }

    /// Highest version in the set
    pub fn latest(&self) -> Option<&'a R> {
        self.releases.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.releases.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::types::Release;
    use rstest::rstest;

    fn tags<R: ReleaseView>(set: &OrderedCandidateSet<'_, R>) -> Vec<String> {
        set.iter()
            .map(|r| r.tag().unwrap_or_default().to_string())
            .collect()
    }

    #[rstest]
    #[case(Release::published(1, "v1.0.0"), false, true)]
    #[case(Release::published(1, "v1.0.0"), true, false)]
    #[case(Release::draft(1, Some("v1.0.0")), true, true)]
    #[case(Release::draft(1, Some("v1.0.0")), false, false)]
    #[case(Release::draft(1, None), true, false)]
    #[case(Release::published(1, "nightly"), false, false)]
    #[case(Release::published(1, "v1.0"), false, false)]
    fn is_candidate_applies_draft_tag_and_semver_rules(
        #[case] release: Release,
        #[case] include_drafts: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(is_candidate(&release, include_drafts), expected);
    }

    #[test]
    fn build_sorts_by_semantic_version_not_string_order() {
        let releases = vec![
            Release::published(1, "v0.1.4"),
            Release::published(2, "0.4.0"),
            Release::published(3, "v0.1.3"),
            Release::published(4, "0.1.2"),
            Release::published(5, "v0.10.0"),
        ];

        let set = OrderedCandidateSet::build(&releases, false);

        assert_eq!(
            tags(&set),
            vec!["0.1.2", "v0.1.3", "v0.1.4", "0.4.0", "v0.10.0"]
        );
        assert_eq!(set.latest().map(|r| r.id), Some(5));
    }

    #[test]
    fn build_orders_prereleases_before_their_release() {
        let releases = vec![
            Release::published(1, "v1.0.0"),
            Release::published(2, "v1.0.0-rc.2"),
            Release::published(3, "v1.0.0-rc.10"),
            Release::published(4, "v1.0.0-beta"),
        ];

        let set = OrderedCandidateSet::build(&releases, false);

        assert_eq!(
            tags(&set),
            vec!["v1.0.0-beta", "v1.0.0-rc.2", "v1.0.0-rc.10", "v1.0.0"]
        );
    }

    #[test]
    fn build_order_is_independent_of_input_order() {
        let ascending = vec![
            Release::published(1, "1.0.0"),
            Release::published(2, "1.1.0"),
            Release::published(3, "2.0.0"),
        ];
        let mut shuffled = ascending.clone();
        shuffled.swap(0, 2);
        shuffled.swap(1, 2);

        assert_eq!(
            tags(&OrderedCandidateSet::build(&ascending, false)),
            tags(&OrderedCandidateSet::build(&shuffled, false))
        );
    }

    #[test]
    fn build_excludes_drafts_malformed_and_untagged_releases() {
        let releases = vec![
            Release::published(1, "v2.0.0"),
            Release::draft(2, Some("v3.0.0")),
            Release::draft(3, None),
            Release::published(4, "not-a-version"),
            Release::published(5, "v1.0.0"),
        ];

        let set = OrderedCandidateSet::build(&releases, false);

        assert_eq!(tags(&set), vec!["v1.0.0", "v2.0.0"]);
    }

    #[test]
    fn build_with_drafts_keeps_only_tagged_drafts() {
        let releases = vec![
            Release::published(1, "v2.0.0"),
            Release::draft(2, Some("v3.0.0")),
            Release::draft(3, None),
            Release::draft(4, Some("v2.5.0")),
        ];

        let set = OrderedCandidateSet::build(&releases, true);

        assert_eq!(tags(&set), vec!["v2.5.0", "v3.0.0"]);
    }

    #[test]
    fn build_yields_empty_set_when_nothing_qualifies() {
        let releases = vec![Release::published(1, "latest"), Release::draft(2, None)];

        let set = OrderedCandidateSet::build(&releases, false);

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.latest(), None);
    }
}
