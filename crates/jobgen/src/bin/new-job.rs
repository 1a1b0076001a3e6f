use std::io::IsTerminal;

use clap::{CommandFactory, FromArgMatches};
use colored::Colorize;

use jobgen::client::commands::create::command_create;
use jobgen::common::cli::{ColorPolicy, RootOptions};
use jobgen::common::env::Environment;
use jobgen::common::setup::setup_logging;

fn setup_colors(policy: ColorPolicy) {
    match policy {
        ColorPolicy::Always => colored::control::set_override(true),
        ColorPolicy::Never => colored::control::set_override(false),
        ColorPolicy::Auto => {
            if !std::io::stderr().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}

fn print_error(error: anyhow::Error) {
    eprintln!("{} {:?}", "error:".red().bold(), error);
}

fn main() {
    let matches = RootOptions::command().get_matches();
    let top_opts = match RootOptions::from_arg_matches(&matches) {
        Ok(opts) => opts,
        Err(error) => error.exit(),
    };

    setup_logging(top_opts.common.debug);
    setup_colors(top_opts.common.colors);

    let environment = Environment::capture();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = command_create(
        top_opts.job,
        &environment,
        &mut stdin.lock(),
        &mut stdout.lock(),
    );

    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
}
