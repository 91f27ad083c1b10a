//! Binary entrypoint for typocrit-cli

fn main() {
    if let Err(err) = typocrit_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
