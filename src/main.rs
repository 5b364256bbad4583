use anyhow::Context;
use awsgroup_match::cli::Cli;
use awsgroup_match::group::read_groups;
use awsgroup_match::logger;
use awsgroup_match::matcher::GroupMatcher;
use awsgroup_match::notify::LogNotifier;
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    logger::init(&config.log_level);

    let groups = read_groups(&cli.groups)?;
    log::debug!("loaded {} AWS groups from {}", groups.len(), cli.groups.display());

    let matched = GroupMatcher::new(LogNotifier)
        .match_groups(groups, &config.aws_group_match)
        .with_context(|| format!("filtering AWS groups by '{}'", config.aws_group_match))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &matched)?;
        writeln!(out)?;
    } else {
        for group in &matched {
            writeln!(out, "{}", group.display_name)?;
        }
    }

    Ok(())
}
