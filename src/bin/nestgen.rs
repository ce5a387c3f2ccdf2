use nestgen::cli::run_cli;
use nestgen::logging::{init_logging_with_config, LogConfig};

fn main() {
    if let Err(e) = init_logging_with_config(&LogConfig::from_env()) {
        eprintln!("failed to initialize logging: {e}");
    }
    if let Err(e) = run_cli() {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
