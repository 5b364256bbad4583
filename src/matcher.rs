use crate::error::MatchError;
use crate::group::Group;
use crate::notify::{LogNotifier, Notifier};
use regex::Regex;

/// Filters AWS groups by display name, reporting each excluded group to a
/// [`Notifier`].
#[derive(Debug, Default, Clone)]
pub struct GroupMatcher<N = LogNotifier> {
    notifier: N,
}

impl<N: Notifier> GroupMatcher<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Keeps the groups whose display name contains a match for `pattern`,
    /// in their original order.
    ///
    /// Fails with [`MatchError::NoGroupsSupplied`] on empty input before the
    /// pattern is compiled. Filtering everything out is not an error.
    pub fn match_groups(&self, groups: Vec<Group>, pattern: &str) -> Result<Vec<Group>, MatchError> {
        if groups.is_empty() {
            return Err(MatchError::NoGroupsSupplied);
        }

        let regex = Regex::new(pattern).map_err(|e| MatchError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(groups
            .into_iter()
            .filter(|group| {
                let keep = regex.is_match(&group.display_name);
                if !keep {
                    self.notifier.notify(&format!(
                        "AWS group {} will not be included in sync",
                        group.display_name
                    ));
                }
                keep
            })
            .collect())
    }
}

/// [`GroupMatcher::match_groups`] with exclusions sent to the `log` facade.
pub fn match_aws_groups(groups: Vec<Group>, pattern: &str) -> Result<Vec<Group>, MatchError> {
    GroupMatcher::new(LogNotifier).match_groups(groups, pattern)
}
