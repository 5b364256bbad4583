/// Matches every group name.
pub const DEFAULT_AWS_GROUP_MATCH: &str = ".*";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Regex selecting which AWS groups take part in the sync.
    pub aws_group_match: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws_group_match: DEFAULT_AWS_GROUP_MATCH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
