use clap::ArgMatches;
use log::LevelFilter;

/// options of a single walkthrough run
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughConfig {
    pub log_level: LevelFilter,
    /// wait for Enter after the last chapter
    pub pause: bool,
}

impl WalkthroughConfig {
    pub fn from_matches(matches: &ArgMatches) -> WalkthroughConfig {
        WalkthroughConfig {
            log_level: log_level(matches.occurrences_of("verbose")),
            pause: matches.is_present("pause"),
        }
    }
}

pub fn log_level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
