#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{buffer_handler, EvalErrorKind};
use pretty_assertions::assert_eq;
use quill_ir::StringInterner;

/// Output of a program plus the error of each failed top-level statement.
struct Run {
    output: String,
    errors: Vec<EvalError>,
}

fn run_with_input(source: &str, input: InputHandler) -> Run {
    let interner = StringInterner::shared();
    let lexed = quill_lexer::lex(source, &interner);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    let program = quill_parse::parse(&lexed.tokens, &interner).unwrap();

    let out = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .interner(interner)
        .print_handler(out.clone())
        .input_handler(input)
        .build();
    let errors = program
        .iter()
        .filter_map(|stmt| interpreter.run_top_level(stmt).err())
        .collect();
    Run {
        output: out.get_output(),
        errors,
    }
}

fn run(source: &str) -> Run {
    run_with_input(source, InputHandler::Empty)
}

fn output(source: &str) -> String {
    let run = run(source);
    assert!(run.errors.is_empty(), "errors: {:?}", run.errors);
    run.output
}

#[test]
fn print_literals() {
    assert_eq!(
        output(r#"print 1 print 2.50 print "hi" print true print [1, "a"] print dict{"k": 2}"#),
        "1\n2.50\nhi\ntrue\n[1, a]\n{k: 2}\n"
    );
}

#[test]
fn printupper_uppercases_text_form() {
    assert_eq!(output(r#"printupper "abc" + 1 printupper [true]"#), "ABC1\n[TRUE]\n");
}

#[test]
fn arithmetic_output() {
    assert_eq!(output("print 7/2 print 1 + 2 * 3 print 2 - 5 print 1/0"), "3.5\n7\n-3\ninf\n");
}

#[test]
fn recursion() {
    let source = "fun fact(n) { if (n <= 1) { return 1 } return n * fact(n-1) } print fact(5)";
    assert_eq!(output(source), "120\n");
}

#[test]
fn closures_capture_declaration_scope() {
    let source = "
        fun make(x) { fun inner() { return x } return inner }
        f = make(10)
        x = 99
        print f()
    ";
    assert_eq!(output(source), "10\n");
}

#[test]
fn closures_share_mutable_state() {
    let source = "
        fun counter() {
            n = 0
            fun next() { n = n + 1 return n }
            return next
        }
        c = counter()
        c() c()
        print c()
    ";
    assert_eq!(output(source), "3\n");
}

#[test]
fn assignment_reaches_enclosing_scope() {
    assert_eq!(output("x = 1 { x = 2 print x } print x"), "2\n2\n");
}

#[test]
fn block_locals_do_not_leak() {
    let run = run("{ y = 1 } print y");
    assert_eq!(run.output, "");
    assert_eq!(run.errors.len(), 1);
    assert_eq!(run.errors[0].to_string(), "undefined variable: y");
}

#[test]
fn calls_do_not_see_caller_locals() {
    let source = "
        fun peek() { return secret }
        fun caller() { secret = 1 return peek() }
        print caller()
    ";
    let run = run(source);
    assert_eq!(run.errors[0].kind, EvalErrorKind::UndefinedVariable { name: "secret".into() });
}

#[test]
fn and_or_evaluate_both_sides() {
    let source = "
        a = []
        print (1 < 2) and (3 > 4)
        print false and append(a, 1) == a
        print true or append(a, 2) == a
        print a
    ";
    assert_eq!(output(source), "false\nfalse\ntrue\n[1, 2]\n");
}

#[test]
fn arrays_alias() {
    let source = "
        a = [1, 2]
        b = a
        append(a, 3)
        print b
        print a[2]
        print remove(b, 0)
        print a
    ";
    assert_eq!(output(source), "[1, 2, 3]\n3\n1\n[2, 3]\n");
}

#[test]
fn dictionaries() {
    let source = r#"
        d = dict{"a": 1}
        put(d, "b", 2)
        print d["b"]
        print dict_remove(d, "a")
        print d
    "#;
    assert_eq!(output(source), "2\n1\n{b: 2}\n");

    let run = run(r#"d = dict{} put(d, "k", 1) dict_remove(d, "k") print d["k"]"#);
    assert_eq!(run.errors.len(), 1);
    assert_eq!(run.errors[0].kind, EvalErrorKind::KeyNotFound { key: "k".into() });
}

#[test]
fn while_loop() {
    let source = "i = 0 total = 0 while (i < 5) { total = total + i i = i + 1 } print total";
    assert_eq!(output(source), "10\n");
}

#[test]
fn return_unwinds_loops_and_blocks() {
    let source = "
        fun first_over(xs, limit) {
            i = 0
            while (true) {
                if (xs[i] > limit) { return xs[i] }
                i = i + 1
            }
        }
        print first_over([1, 5, 9], 4)
    ";
    assert_eq!(output(source), "5\n");
}

#[test]
fn function_without_return_yields_empty_text() {
    assert_eq!(output("fun f() { x = 1 } print f() + \"|\""), "|\n");
    assert_eq!(output("fun g() { return } print \"<\" + g() + \">\""), "<>\n");
}

#[test]
fn top_level_return_ends_statement() {
    assert_eq!(output("return 5 print 1"), "1\n");
}

#[test]
fn text_concatenation_uses_text_forms() {
    assert_eq!(output(r#"print "n=" + 2.50 + true"#), "n=2.50true\n");
}

#[test]
fn equality() {
    assert_eq!(
        output(r#"print 1 == 1.0 print [1, 2] == [1, 2] print "1" == 1 print 1 != 2"#),
        "true\ntrue\nfalse\ntrue\n"
    );
}

#[test]
fn functions_compare_by_identity() {
    let source = "fun f() { } g = f print f == g fun h() { } print f == h print f";
    assert_eq!(output(source), "true\nfalse\n<function>\n");
}

#[test]
fn runtime_errors_are_per_statement() {
    let run = run("print 1 print x print 2 print -true print 3");
    assert_eq!(run.output, "1\n2\n3\n");
    assert_eq!(run.errors.len(), 2);
    assert_eq!(run.errors[0].to_string(), "undefined variable: x");
    assert_eq!(run.errors[1].to_string(), "unary `-` expects number, got boolean");
}

#[test]
fn errors_propagate_out_of_calls() {
    let run = run("fun bad() { print 1 return [][0] } print bad() print 2");
    assert_eq!(run.output, "1\n2\n");
    assert!(matches!(run.errors[0].kind, EvalErrorKind::IndexOutOfBounds { .. }));
}

#[test]
fn call_errors() {
    let run = run("fun f(a) { return a } f(1, 2) 5(1) x = 3 x[0]");
    let kinds: Vec<_> = run.errors.into_iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EvalErrorKind::ArityMismatch {
                name: "f".into(),
                expected: 1,
                got: 2
            },
            EvalErrorKind::NotCallable { type_name: "number" },
            EvalErrorKind::NotIndexable { type_name: "number" },
        ]
    );
}

#[test]
fn conditions_must_be_boolean() {
    let run = run("if (1) print 1 while (\"x\") print 2");
    assert_eq!(run.errors.len(), 2);
    assert_eq!(run.errors[0].to_string(), "if condition expects boolean, got number");
    assert_eq!(run.errors[1].to_string(), "while condition expects boolean, got text");
}

#[test]
fn input_defaults_to_empty() {
    assert_eq!(output(r#"x = input("Name? ") print "[" + x + "]""#), "[]\n");
}

#[test]
fn scripted_input() {
    let run = run_with_input(
        r#"name = input("Name? ") print "Hello, " + name"#,
        InputHandler::scripted(["Ada"]),
    );
    assert!(run.errors.is_empty());
    assert_eq!(run.output, "Name? Hello, Ada\n");
}

#[test]
fn arguments_evaluate_in_caller_scope_left_to_right() {
    let source = "
        log = []
        fun note(x) { append(log, x) return x }
        fun pair(a, b) { return [a, b] }
        print pair(note(1), note(2))
        print log
    ";
    assert_eq!(output(source), "[1, 2]\n[1, 2]\n");
}

#[test]
fn deep_recursion() {
    let source = "fun down(n) { if (n == 0) { return 0 } return down(n - 1) } print down(20000)";
    assert_eq!(output(source), "0\n");
}

#[test]
fn reset_globals_forgets_bindings() {
    let interner = StringInterner::shared();
    let lexed = quill_lexer::lex("x = 1", &interner);
    let program = quill_parse::parse(&lexed.tokens, &interner).unwrap();
    let mut interpreter = InterpreterBuilder::new()
        .interner(interner.clone())
        .print_handler(buffer_handler())
        .build();
    interpreter.run_top_level(&program[0]).unwrap();
    let x = interner.intern("x");
    assert!(interpreter.globals().is_defined(x));
    interpreter.reset_globals();
    assert!(!interpreter.globals().is_defined(x));
}
