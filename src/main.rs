use clap::Parser;
use colored::*;
use repo_bootstrap::{app, cli, error, paths};

fn main() {
    paths::load_env_file();
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = app::App::run(&cli) {
        eprintln!("{}", error::format_error_chain(&err).red());
        std::process::exit(error::exit_code(&err));
    }
}
