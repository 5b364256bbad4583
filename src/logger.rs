//! Logger initialization for the binary

use logforth::{append::Stderr, filter::EnvFilter};
use std::{str::FromStr, sync::Once};

static INIT: Once = Once::new();

/// Installs a stderr logger. The filter is a string like "info" or
/// "awsgroup_match=debug"; an unparsable filter falls back to "info".
pub fn init(log_filter: &str) {
    let log_filter = log_filter.to_owned();
    INIT.call_once(move || {
        logforth::builder()
            .dispatch(move |d| {
                let filter = EnvFilter::from_str(&log_filter)
                    .unwrap_or_else(|_| EnvFilter::from_str("info").expect("default filter should be valid"));

                d.filter(filter).append(Stderr::default())
            })
            .apply();
    });
}
