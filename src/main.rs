mod domain;
mod environment;
mod error;
mod output;
mod pyinstaller;

use clap::Parser;

use domain::BundleConfig;
use environment::SystemEnvironment;
use output::*;

/// Packages the DOIO Layout Viewer into a single distributable
/// executable. Takes no arguments; the build configuration is fixed.
#[derive(Parser, Debug)]
#[command(name = "doio-bundler", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    print_header();

    let env = SystemEnvironment::new();
    let config = BundleConfig::layout_viewer();

    match pyinstaller::run(&env, &config) {
        Ok(artifact) => print_success(&artifact),
        Err(e) => {
            print_failure(&e);
            std::process::exit(1);
        }
    }
}
