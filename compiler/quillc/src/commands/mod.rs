//! Command implementations for the `quill` binary.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{repl_loop, run_repl, ConsoleCommand};
pub use run::run_file;

/// Read a source file, or report why it can't be read and exit with status 1.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("File Error: {err}");
            std::process::exit(1);
        }
    }
}
