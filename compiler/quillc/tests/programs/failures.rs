use pretty_assertions::assert_eq;
use quill_diagnostic::DiagnosticKind;

use crate::common::run;

#[test]
fn execution_error_skips_only_its_statement() {
    let run = run("print 1 print 1 + true print 3");
    assert_eq!(run.output, "1\n3\n");
    assert_eq!(
        run.diagnostics,
        "Execution Error: operator `+` expects numbers or text, got number and boolean\n"
    );
    assert_eq!(run.report.failed, 1);
    assert_eq!(run.report.exit_code(), 1);
}

#[test]
fn error_in_function_unwinds_the_whole_statement() {
    let source = r#"
        fun bad() {
            print "in"
            x = 1 - "one"
            print "never"
        }
        bad()
        print "next"
    "#;
    let run = run(source);
    assert_eq!(run.output, "in\nnext\n");
    assert_eq!(
        run.diagnostics,
        "Execution Error: operator `-` expects numbers, got number and text\n"
    );
}

#[test]
fn error_in_loop_stops_the_loop() {
    let source = r"
        i = 0
        while (i < 10) {
            print i
            if (i == 2) { print missing }
            i = i + 1
        }
        print i
    ";
    let run = run(source);
    assert_eq!(run.output, "0\n1\n2\n2\n");
    assert_eq!(run.count(DiagnosticKind::Execution), 1);
}

#[test]
fn parse_error_runs_nothing() {
    let run = run(r#"print "first" print (1 + 2 }"#);
    assert_eq!(run.output, "");
    assert_eq!(
        run.diagnostics,
        "Parse Error: Expect ')' after expression. Found: }\n"
    );
    assert!(run.report.parse_failed);
    assert_eq!(run.report.exit_code(), 1);
}

#[test]
fn builtin_arity_is_a_parse_error() {
    let run = run("a = [] append(a)");
    assert_eq!(
        run.diagnostics,
        "Parse Error: append expects exactly 2 arguments.\n"
    );
    assert_eq!(run.report.statements, 0);
}

#[test]
fn unclosed_call_reports_end_of_input() {
    let run = run("f(1, 2");
    assert_eq!(
        run.diagnostics,
        "Parse Error: Expect ')' after arguments. Found: end of input\n"
    );
}

#[test]
fn function_body_must_be_a_block() {
    let run = run("fun f() return 1");
    assert_eq!(
        run.diagnostics,
        "Parse Error: Expect '{' before function body. Found: return\n"
    );
}

#[test]
fn lexer_errors_are_reported_and_skipped() {
    let run = run("print 1 # print 2 print 5 1.2.3 print 4");
    assert_eq!(run.output, "1\n2\n5\n4\n");
    assert_eq!(
        run.diagnostic_lines(),
        vec![
            "Lexer Error: Unexpected character: #",
            "Lexer Error: Invalid number format: 1.2.3",
        ]
    );
    assert_eq!(run.report.lex_errors, 2);
    assert!(run.report.is_success());
}

#[test]
fn unterminated_string_then_parse_error() {
    let run = run(r#"print 1 print "abc"#);
    assert_eq!(run.output, "");
    assert_eq!(
        run.diagnostic_lines(),
        vec![
            "Lexer Error: Unterminated string.",
            "Parse Error: Expect expression at token: end of input",
        ]
    );
}

#[test]
fn runtime_error_messages() {
    let cases = [
        ("x = 3 x()", "number is not callable"),
        ("fun f(a) { return a } f(1, 2)", "f expects 1 argument, got 2"),
        ("fun g(a, b) {} g(1)", "g expects 2 arguments, got 1"),
        ("print 5[0]", "number is not indexable"),
        ("a = [1] print a[3]", "index 3 out of bounds for length 1"),
        ("a = [1] print a[-1]", "index -1 out of bounds for length 1"),
        (r#"print [1]["0"]"#, "array index expects number, got text"),
        (r#"if (1) print "x""#, "if condition expects boolean, got number"),
        ("while (dict{}) {}", "while condition expects boolean, got dictionary"),
        ("print !1", "unary `!` expects boolean, got number"),
        (r#"print -"a""#, "unary `-` expects number, got text"),
        ("print 1 and true", "operator `and` expects booleans, got number and boolean"),
        ("print [] < 1", "operator `<` expects numbers, got array and number"),
        ("put([1], 1, 2)", "put expects dictionary, got array"),
        (r#"append(dict{}, 1)"#, "append expects array, got dictionary"),
        ("remove(dict{}, 0)", "remove expects array, got dictionary"),
        ("dict_remove([1], 0)", "dict_remove expects dictionary, got array"),
        (r#"d = dict{} dict_remove(d, "k")"#, "key not found: k"),
        (r#"d = dict{"a": 1} print d["b"]"#, "key not found: b"),
    ];
    for (source, message) in cases {
        let run = run(source);
        assert_eq!(
            run.diagnostics,
            format!("Execution Error: {message}\n"),
            "source: {source}"
        );
    }
}

#[test]
fn dict_remove_then_lookup_fails() {
    let source = r#"
        d = dict{}
        put(d, "k", "v")
        print dict_remove(d, "k")
        print d["k"]
    "#;
    let run = run(source);
    assert_eq!(run.output, "v\n");
    assert_eq!(run.diagnostics, "Execution Error: key not found: k\n");
}

#[test]
fn callee_is_checked_before_arguments_run() {
    let source = r"
        log = []
        x = 1
        x(append(log, 1))
        print log
    ";
    let run = run(source);
    assert_eq!(run.output, "[]\n");
    assert_eq!(run.diagnostics, "Execution Error: number is not callable\n");
}
