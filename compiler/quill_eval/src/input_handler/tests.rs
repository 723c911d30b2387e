use super::*;
use crate::buffer_handler;
use pretty_assertions::assert_eq;

#[test]
fn empty_handler_is_silent() {
    let out = buffer_handler();
    let mut input = InputHandler::default();
    assert_eq!(input.read_line("Name? ", &out), "");
    assert_eq!(out.get_output(), "");
}

#[test]
fn scripted_replays_then_runs_dry() {
    let out = buffer_handler();
    let mut input = InputHandler::scripted(["Ada\n", "Grace\r\n"]);
    assert_eq!(input.read_line("1? ", &out), "Ada");
    assert_eq!(input.read_line("2? ", &out), "Grace");
    assert_eq!(input.read_line("3? ", &out), "");
    assert_eq!(out.get_output(), "1? 2? 3? ");
}

#[test]
fn trim_only_line_terminator() {
    assert_eq!(trim_line_end("  spaced  \n".to_owned()), "  spaced  ");
    assert_eq!(trim_line_end("no newline".to_owned()), "no newline");
}
