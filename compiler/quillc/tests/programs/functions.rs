use pretty_assertions::assert_eq;

use crate::common::output_of;

#[test]
fn recursive_factorial() {
    let source = r"
        fun fact(n) {
            if (n <= 1) { return 1 }
            return n * fact(n - 1)
        }
        print fact(5)
    ";
    assert_eq!(output_of(source), "120\n");
}

#[test]
fn closure_keeps_its_own_binding() {
    let source = r"
        fun make(x) {
            fun inner() { return x }
            return inner
        }
        f = make(10)
        x = 99
        print f()
    ";
    assert_eq!(output_of(source), "10\n");
}

#[test]
fn closure_state_persists_between_calls() {
    let source = r"
        fun counter() {
            n = 0
            fun next() {
                n = n + 1
                return n
            }
            return next
        }
        c = counter()
        d = counter()
        c()
        c()
        print c()
        print d()
    ";
    assert_eq!(output_of(source), "3\n1\n");
}

#[test]
fn falling_off_the_end_yields_empty_text() {
    assert_eq!(
        output_of(r#"fun f() { x = 1 } fun g() { return } print "[" + f() + "|" + g() + "]""#),
        "[|]\n"
    );
}

#[test]
fn return_unwinds_loops_and_blocks() {
    let source = r"
        fun find(items, target) {
            i = 0
            while (i < 3) {
                {
                    if (items[i] == target) { return i }
                }
                i = i + 1
            }
            return -1
        }
        print find([5, 6, 7], 6)
        print find([5, 6, 7], 9)
    ";
    assert_eq!(output_of(source), "1\n-1\n");
}

#[test]
fn top_level_return_ends_only_its_statement() {
    assert_eq!(output_of(r#"return 5 print "after""#), "after\n");
}

#[test]
fn functions_are_first_class() {
    let source = r"
        fun apply(fn, v) { return fn(v) }
        fun square(n) { return n * n }
        print apply(square, 4)
    ";
    assert_eq!(output_of(source), "16\n");
}

#[test]
fn calls_and_indexing_chain() {
    let source = r"
        fun make() {
            fun pair(a) { return [a, a + 1] }
            return pair
        }
        print make()(3)[1]
    ";
    assert_eq!(output_of(source), "4\n");
}

#[test]
fn arguments_evaluate_left_to_right() {
    let source = r"
        log = []
        fun note(v) { append(log, v) return v }
        fun sub(a, b) { return a - b }
        print sub(note(5), note(2))
        print log
    ";
    assert_eq!(output_of(source), "3\n[5, 2]\n");
}

#[test]
fn function_identity() {
    let source = r"
        fun f() {}
        fun g() {}
        h = f
        print f == h
        print f == g
    ";
    assert_eq!(output_of(source), "true\nfalse\n");
}

#[test]
fn each_declaration_run_is_a_new_function() {
    let source = r"
        fun make() { fun inner() {} return inner }
        print make() == make()
    ";
    assert_eq!(output_of(source), "false\n");
}

#[test]
fn arrays_passed_to_functions_alias() {
    let source = r"
        fun push_twice(a, v) { append(a, v) append(a, v) }
        xs = []
        push_twice(xs, 7)
        print xs
    ";
    assert_eq!(output_of(source), "[7, 7]\n");
}

#[test]
fn deep_recursion() {
    let source = r"
        fun down(n) {
            if (n == 0) { return 0 }
            return down(n - 1)
        }
        print down(5000)
    ";
    assert_eq!(output_of(source), "0\n");
}
