use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::output_of;

#[test]
fn literals_print_as_written() {
    assert_eq!(output_of("print 3.50 print 007 print 42"), "3.50\n007\n42\n");
}

#[test]
fn literal_text_survives_variables_and_unary_plus() {
    assert_eq!(output_of("x = 2.0 y = x print y print +x"), "2.0\n2.0\n");
}

#[test]
fn computed_numbers_use_shortest_form() {
    assert_eq!(
        output_of("print 7/2 print 1 + 2 print 2.0 * 3 print 0.5 + 0.25"),
        "3.5\n3\n6\n0.75\n"
    );
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(output_of("print 1/0 print -1/0 print 0/0"), "inf\n-inf\nNaN\n");
}

#[test]
fn plus_concatenates_when_either_side_is_text() {
    assert_eq!(
        output_of(r#"print "a" + 1 print 2 + "b" print "x" + true print "" + [1, 2]"#),
        "a1\n2b\nxtrue\n[1, 2]\n"
    );
}

#[test]
fn printupper_uppercases_the_text_form() {
    assert_eq!(
        output_of(r#"printupper "hello" printupper ["a", dict{"k": "v"}]"#),
        "HELLO\n[A, {K: V}]\n"
    );
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(
        output_of("print 1 + 2 * 3 print (1 + 2) * 3 print 10 - 4 - 3 print 8 / 4 / 2 print --3"),
        "7\n9\n3\n1\n3\n"
    );
}

#[test]
fn equality_is_structural() {
    assert_eq!(
        output_of(
            r#"print [1, 2] == [1, 2] print 1 == "1" print dict{"a": 1} == dict{"a": 1} print [1] != [2] print true == true"#
        ),
        "true\nfalse\ntrue\ntrue\ntrue\n"
    );
}

#[test]
fn and_or_evaluate_both_operands() {
    let source = r"
        log = []
        print (1 < 2) and (3 > 4)
        print false and append(log, 1) == log
        print true or append(log, 2) == log
        print log
    ";
    assert_eq!(output_of(source), "false\nfalse\ntrue\n[1, 2]\n");
}

#[test]
fn append_is_visible_through_every_alias() {
    let source = r"
        a = [1, 2]
        b = a
        append(b, 3)
        print a[2]
        print a
    ";
    assert_eq!(output_of(source), "3\n[1, 2, 3]\n");
}

#[test]
fn append_returns_the_same_array() {
    assert_eq!(
        output_of("a = [] b = append(a, 1) append(b, 2) print a print a == b"),
        "[1, 2]\ntrue\n"
    );
}

#[test]
fn remove_returns_text_of_removed_element() {
    let source = r"
        a = [10, 20, 30]
        print remove(a, 1)
        print a
        x = remove(a, 0)
        print x + 1
    ";
    assert_eq!(output_of(source), "20\n[10, 30]\n101\n");
}

#[test]
fn index_truncates_toward_zero() {
    assert_eq!(output_of("print [10, 20, 30][1.9]"), "20\n");
}

#[test]
fn nested_indexing() {
    assert_eq!(output_of("m = [[1, 2], [3, 4]] print m[1][0]"), "3\n");
}

#[test]
fn dictionaries_keep_insertion_order() {
    let source = r#"
        d = dict{"b": 1}
        put(d, "a", 2)
        put(d, "b", 3)
        print d
        print d["a"]
    "#;
    assert_eq!(output_of(source), "{b: 3, a: 2}\n2\n");
}

#[test]
fn dictionary_keys_can_be_any_value() {
    assert_eq!(
        output_of(
            r#"d = dict{1: "one", true: "yes", [1]: "list"} print d[1] print d[true] print d[[1]]"#
        ),
        "one\nyes\nlist\n"
    );
}

#[test]
fn put_and_dict_remove_share_the_dictionary() {
    let source = r#"
        d = dict{}
        alias = d
        put(d, "k", 5)
        print alias
        print dict_remove(alias, "k")
        print d
    "#;
    assert_eq!(output_of(source), "{k: 5}\n5\n{}\n");
}

#[test]
fn self_containing_array_prints_marker() {
    assert_eq!(output_of("a = [] append(a, a) print a"), "[[...]]\n");
}

#[test]
fn self_containing_containers_compare_without_overflow() {
    let source = r#"
        a = [] append(a, a)
        b = [] append(b, b)
        print a == b
        print a != b
        d = dict{} put(d, a, "cycle")
        print d[b]
        print "after"
    "#;
    assert_eq!(output_of(source), "true\nfalse\ncycle\nafter\n");
}

#[test]
fn nan_keys_can_be_replaced_and_removed() {
    let source = r"
        d = dict{}
        put(d, 0/0, 1)
        put(d, 0/0, 2)
        print d
        print dict_remove(d, 0/0)
        print d
    ";
    assert_eq!(output_of(source), "{NaN: 2}\n2\n{}\n");
}

#[test]
fn functions_print_as_placeholder() {
    assert_eq!(output_of("fun f() {} print f print [f]"), "<function>\n[<function>]\n");
}

proptest! {
    #[test]
    fn printed_literal_matches_source(literal in "[0-9]{1,8}(\\.[0-9]{1,6})?") {
        let output = output_of(&format!("print {literal}"));
        prop_assert_eq!(output, format!("{literal}\n"));
    }

    #[test]
    fn appended_element_is_last(
        values in proptest::collection::vec(0u32..1000, 0..8),
        extra in 0u32..1000,
    ) {
        let items: Vec<String> = values.iter().map(ToString::to_string).collect();
        let source = format!(
            "a = [{}] b = a append(a, {extra}) print b[{}]",
            items.join(", "),
            values.len()
        );
        prop_assert_eq!(output_of(&source), format!("{extra}\n"));
    }
}
