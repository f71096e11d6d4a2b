#[macro_use]
extern crate enum_display_derive;

mod chapter;
mod config;
mod walkthrough;
mod walkthrough_cli;

use clap::{Arg, App};
use crate::walkthrough_cli::walkthrough_main;

fn main() {
    let matches = App::new("ByteView Walkthrough")
        .version("1.0")
        .about("Demonstrates aliasing, emptiness and pinning of byte views")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .arg(
            Arg::with_name("pause")
                .short("p")
                .long("pause")
                .help("Wait for Enter before exiting")
                .takes_value(false)
        )
        .get_matches();

    walkthrough_main(matches);
}
