use std::process;

use clap::Parser;

use jira_impact::{app, cli::Args, ui};

fn main() {
    let args = Args::parse();
    ui::init_logging(args.verbose);

    if let Err(err) = app::run(args) {
        ui::print_error(&err);
        process::exit(1);
    }
}
