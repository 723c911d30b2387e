use pretty_assertions::assert_eq;

use crate::common::{output_of, run};

#[test]
fn assignment_reaches_the_enclosing_binding() {
    assert_eq!(output_of("x = 1 { x = 2 print x } print x"), "2\n2\n");
}

#[test]
fn block_locals_do_not_leak() {
    let run = run("{ y = 5 print y } print y");
    assert_eq!(run.output, "5\n");
    assert_eq!(run.diagnostics, "Execution Error: undefined variable: y\n");
}

#[test]
fn functions_see_their_definition_scope_not_the_callers() {
    let source = r"
        fun peek() { return secret }
        fun outer() {
            secret = 1
            return peek()
        }
        print outer()
    ";
    let run = run(source);
    assert_eq!(run.output, "");
    assert_eq!(
        run.diagnostics,
        "Execution Error: undefined variable: secret\n"
    );
}

#[test]
fn parameters_shadow_globals() {
    let source = r"
        n = 1
        fun f(n) { n = n + 10 return n }
        print f(5)
        print n
    ";
    assert_eq!(output_of(source), "15\n1\n");
}

#[test]
fn while_loop_sums() {
    let source = r"
        i = 0
        total = 0
        while (i < 5) {
            total = total + i
            i = i + 1
        }
        print total
    ";
    assert_eq!(output_of(source), "10\n");
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_eq!(output_of(r#"while (false) print "no" print "done""#), "done\n");
}

#[test]
fn if_else_chains() {
    let source = r#"
        fun sign(n) {
            if (n < 0) return "negative"
            else if (n == 0) return "zero"
            else return "positive"
        }
        print sign(-2)
        print sign(0)
        print sign(3)
    "#;
    assert_eq!(output_of(source), "negative\nzero\npositive\n");
}

#[test]
fn input_is_empty_without_a_console() {
    assert_eq!(
        output_of(r#"name = input("Name? ") print "[" + name + "]""#),
        "[]\n"
    );
}

#[test]
fn input_prompt_is_still_evaluated() {
    assert_eq!(
        output_of(r#"log = [] x = input(append(log, "asked")) print log"#),
        "[asked]\n"
    );
}
