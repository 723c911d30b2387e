//! Debug commands: `lex` and `parse` for inspecting the front end.
//!
//! Both print problems with their `line:column` position, since the point
//! of these commands is to find where the input went wrong.

use quill_diagnostic::Diagnostic;
use quill_eval::PrintHandlerImpl;
use quill_ir::StringInterner;
use quill_lexer::LexOutput;

use super::read_file;
use crate::session::dump_tokens;

/// Lex a file and print one token per line, then any lexer errors.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();

    let lexed = quill_lexer::lex(&content, &interner);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    dump_tokens(&lexed.tokens, &PrintHandlerImpl::Stdout);
    print_lex_errors(&lexed, &content);
}

/// Parse a file and print the statement tree, or the parse error.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();

    let lexed = quill_lexer::lex(&content, &interner);
    print_lex_errors(&lexed, &content);

    let program = match quill_parse::parse(&lexed.tokens, &interner) {
        Ok(program) => program,
        Err(err) => {
            let diagnostic = Diagnostic::parse(err.message, err.span);
            eprintln!("{}", diagnostic.render_with_source(&content));
            std::process::exit(1);
        }
    };

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.len());
    println!("  Lexer errors: {}", lexed.errors.len());
    println!();
    for stmt in &program {
        println!("{stmt:#?}");
    }
}

fn print_lex_errors(lexed: &LexOutput, source: &str) {
    let lines = lex_error_lines(lexed, source);
    if lines.is_empty() {
        return;
    }
    println!();
    println!("Errors:");
    for line in lines {
        println!("  {line}");
    }
}

/// `Lexer Error: <message> (at line:column)` for each skipped input.
fn lex_error_lines(lexed: &LexOutput, source: &str) -> Vec<String> {
    lexed
        .errors
        .iter()
        .map(|err| Diagnostic::lexer(err.to_string(), err.span).render_with_source(source))
        .collect()
}
