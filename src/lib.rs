pub mod cli;
pub mod config;
pub mod error;
pub mod group;
pub mod logger;
pub mod matcher;
pub mod notify;

pub use error::{Error, MatchError, Result};
pub use group::Group;
pub use matcher::{match_aws_groups, GroupMatcher};
pub use notify::{LogNotifier, Notifier, NullNotifier};
