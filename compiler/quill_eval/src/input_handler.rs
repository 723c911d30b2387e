//! Where `input(prompt)` reads from.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::PrintHandlerImpl;

/// Source of lines for `input`.
#[derive(Debug, Default)]
pub enum InputHandler {
    /// Non-interactive: the prompt is not shown and every read is empty.
    #[default]
    Empty,
    /// Shows the prompt and reads a line from stdin.
    Interactive,
    /// Shows the prompt and replays queued lines, then empty text.
    Scripted(VecDeque<String>),
}

impl InputHandler {
    /// A scripted handler replaying `lines` in order.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputHandler::Scripted(lines.into_iter().map(Into::into).collect())
    }

    /// Read one line for `input(prompt)`, without its line terminator.
    ///
    /// End of input and read failures yield empty text.
    pub fn read_line(&mut self, prompt: &str, out: &PrintHandlerImpl) -> String {
        match self {
            InputHandler::Empty => String::new(),
            InputHandler::Interactive => {
                out.print(prompt);
                let mut line = String::new();
                match std::io::stdin().lock().read_line(&mut line) {
                    Ok(_) => trim_line_end(line),
                    Err(err) => {
                        tracing::warn!(%err, "failed to read from stdin");
                        String::new()
                    }
                }
            }
            InputHandler::Scripted(lines) => {
                out.print(prompt);
                lines.pop_front().map(trim_line_end).unwrap_or_default()
            }
        }
    }
}

fn trim_line_end(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests;
