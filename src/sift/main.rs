//! The `sift` binary only invokes `cli::run()` and handles process
//! termination. Everything user-facing lives in `cli/`; everything else lives
//! in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
