//! Logoswap CLI - Replace the inline SVG logo across HTML pages

mod cli;
mod report;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::LogoswapApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
