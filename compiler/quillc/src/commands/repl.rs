//! The `repl` command: a line-oriented console over one persistent session.
//!
//! Source is collected line by line into a chunk; an empty line submits the
//! chunk. Every chunk runs against the same globals, so definitions from
//! earlier chunks stay visible. Lines starting with `:` at the start of a
//! chunk are console commands.

use std::io::BufRead;

use quill_diagnostic::{stderr_emitter, DiagnosticQueue};

use crate::{RunConfig, Session};

const PROMPT: &str = "quill> ";
const CONTINUATION: &str = "  ...> ";

/// A console command, typed on its own line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `:quit` leaves the console.
    Quit,
    /// `:clear` forgets every global binding.
    Clear,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":quit" | ":q" => Some(ConsoleCommand::Quit),
            ":clear" => Some(ConsoleCommand::Clear),
            _ => None,
        }
    }
}

/// Run the console on stdin with interactive `input`.
pub fn run_repl() {
    let config = RunConfig::new().with_interactive_input(true);
    let print = config.print.clone();
    let mut session = Session::new(config);
    let mut diagnostics = DiagnosticQueue::new(stderr_emitter());

    println!("Quill {} console", env!("CARGO_PKG_VERSION"));
    println!("End a chunk with an empty line. :clear resets globals, :quit exits.");

    repl_loop(
        |prompt| {
            print.print(prompt);
            read_stdin_line()
        },
        &mut session,
        &mut diagnostics,
    );
}

/// Drive the console from `next_line` until it runs dry or `:quit`.
///
/// `next_line` receives the prompt to show and returns the next line, or
/// `None` at end of input. A pending chunk is run at end of input.
pub fn repl_loop<F>(mut next_line: F, session: &mut Session, diagnostics: &mut DiagnosticQueue)
where
    F: FnMut(&str) -> Option<String>,
{
    let mut chunk = String::new();

    loop {
        let prompt = if chunk.is_empty() { PROMPT } else { CONTINUATION };
        let Some(line) = next_line(prompt) else {
            break;
        };
        let line = line.trim_end();

        if chunk.is_empty() {
            match ConsoleCommand::parse(line) {
                Some(ConsoleCommand::Quit) => return,
                Some(ConsoleCommand::Clear) => {
                    session.reset();
                    continue;
                }
                None => {}
            }
        }

        if line.trim().is_empty() {
            if !chunk.is_empty() {
                run_chunk(&chunk, session, diagnostics);
                chunk.clear();
            }
            continue;
        }

        chunk.push_str(line);
        chunk.push('\n');
    }

    if !chunk.is_empty() {
        run_chunk(&chunk, session, diagnostics);
    }
}

fn run_chunk(chunk: &str, session: &mut Session, diagnostics: &mut DiagnosticQueue) {
    let report = session.run(chunk, diagnostics);
    tracing::debug!(?report, "console chunk finished");
    diagnostics.clear();
}

/// One line from stdin. The lock is released before returning so `input`
/// can read stdin while the chunk runs.
fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            tracing::warn!(%err, "failed to read from stdin");
            None
        }
    }
}
