//! Rill interpreter CLI.
//!
//! Runs a read-eval-print session over stdin/stdout until end of input.

use std::fs::File;
use std::io::{self, BufReader};

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None => run_stdin(),
        Some("-h" | "--help") => {
            print_usage();
            Ok(())
        }
        Some("--version") => {
            println!("rill {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(flag) if flag.starts_with('-') => {
            eprintln!("error: unknown option `{flag}'");
            print_usage();
            std::process::exit(1);
        }
        Some(path) => run_file(path),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run_stdin() -> io::Result<()> {
    let stdin = io::stdin();
    rillc::repl::run_session(stdin.lock(), io::stdout().lock(), io::stderr().lock())
}

fn run_file(path: &str) -> io::Result<()> {
    let file = File::open(path)?;
    rillc::repl::run_session(
        BufReader::new(file),
        io::stdout().lock(),
        io::stderr().lock(),
    )
}

fn print_usage() {
    eprintln!("Usage: rill [file]");
    eprintln!();
    eprintln!("Starts an interactive session when no file is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help    Show this help");
    eprintln!("  --version     Show the version");
}
