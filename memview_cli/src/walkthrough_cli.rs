use clap::ArgMatches;
use log::error;
use std::io::{self, BufRead};
use std::process;
use crate::config::WalkthroughConfig;
use crate::walkthrough::Walkthrough;

pub fn walkthrough_main(matches: ArgMatches) {
    let config = WalkthroughConfig::from_matches(&matches);

    env_logger::builder().filter_level(config.log_level).init();

    let stdout = io::stdout();
    let mut walkthrough = Walkthrough::new(stdout.lock());
    if let Err(e) = walkthrough.run() {
        error!("walkthrough failed: {}", e);
        process::exit(1);
    }
    drop(walkthrough);

    if config.pause {
        println!("Press Enter to exit...");
        wait_for_enter();
    }
}

fn wait_for_enter() {
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
