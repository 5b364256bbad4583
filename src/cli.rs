use crate::config::{Config, DEFAULT_AWS_GROUP_MATCH, DEFAULT_LOG_LEVEL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "awsgroup-match",
    about = "Select the AWS SSO groups that take part in a directory sync",
    version
)]
pub struct Cli {
    /// JSON group listing: an array of groups or a SCIM ListResponse ("-" reads stdin)
    #[arg(default_value = "-")]
    pub groups: PathBuf,

    /// Regex matched against each group's display name
    #[arg(short = 'm', long, env = "SSOSYNC_AWS_GROUP_MATCH", default_value = DEFAULT_AWS_GROUP_MATCH)]
    pub aws_group_match: String,

    /// Log filter (e.g. "info" or "awsgroup_match=debug")
    #[arg(long, env = "SSOSYNC_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print matched groups as a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            aws_group_match: self.aws_group_match.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["awsgroup-match"]).unwrap();
        assert_eq!(cli.groups, PathBuf::from("-"));
        assert!(!cli.json);
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "awsgroup-match",
            "groups.json",
            "-m",
            "aws-group-.*",
            "--log-level",
            "debug",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.groups, PathBuf::from("groups.json"));
        assert!(cli.json);
        assert_eq!(cli.config().aws_group_match, "aws-group-.*");
        assert_eq!(cli.config().log_level, "debug");
    }
}
