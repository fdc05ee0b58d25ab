//! Behavioural coverage for expression compilation and evaluation.

use rstest::rstest;

use super::TagExpression;
use crate::errors::TagExprError;

fn compile(expressions: &[&str]) -> TagExpression {
    TagExpression::new(expressions.iter().copied())
        .unwrap_or_else(|err| panic!("compile {expressions:?}: {err}"))
}

#[rstest]
#[case(&[])]
#[case(&["@a"])]
#[case(&["@a", "@b"])]
#[case(&["@wip", "~@wip"])]
fn empty_expression_matches_everything(#[case] tags: &[&str]) {
    let expr = compile(&[]);
    assert!(expr.is_empty());
    assert!(expr.evaluate(tags.iter().copied()));
}

#[rstest]
#[case(&["@a"], true)]
#[case(&["a"], true)]
#[case(&["@a", "@b"], true)]
#[case(&["@b"], false)]
#[case(&[], false)]
fn positive_tag_requires_presence(#[case] tags: &[&str], #[case] expected: bool) {
    assert_eq!(compile(&["@a"]).evaluate(tags.iter().copied()), expected);
}

#[rstest]
#[case(&["@a"], false)]
#[case(&["@a", "@b"], false)]
#[case(&["@b"], true)]
#[case(&[], true)]
fn negated_tag_requires_absence(#[case] tags: &[&str], #[case] expected: bool) {
    assert_eq!(compile(&["~@a"]).evaluate(tags.iter().copied()), expected);
}

#[rstest]
#[case(&["@a"], true)]
#[case(&["@b"], true)]
#[case(&["@a", "@b"], true)]
#[case(&["@c"], false)]
fn commas_form_a_disjunction(#[case] tags: &[&str], #[case] expected: bool) {
    assert_eq!(compile(&["@a,@b"]).evaluate(tags.iter().copied()), expected);
}

#[rstest]
#[case(&["@a"], false)]
#[case(&["@b"], false)]
#[case(&["@a", "@b"], true)]
#[case(&["@a", "@b", "@c"], true)]
fn separate_strings_form_a_conjunction(#[case] tags: &[&str], #[case] expected: bool) {
    assert_eq!(compile(&["@a", "@b"]).evaluate(tags.iter().copied()), expected);
}

#[test]
fn duplicate_tags_do_not_change_the_result() {
    let expr = compile(&["@a", "~@b"]);
    assert!(expr.evaluate(["@a", "@a", "a"]));
    assert!(!expr.evaluate(["@a", "@b", "@b"]));
}

#[test]
fn tags_are_case_sensitive() {
    assert!(!compile(&["@Smoke"]).evaluate(["@smoke"]));
}

#[test]
fn accepts_owned_and_borrowed_tag_names() {
    let expr = compile(&["@a"]);
    let owned = vec![String::from("@a")];
    assert!(expr.evaluate(&owned));
    assert!(expr.evaluate(owned));
}

#[test]
fn repeated_equal_limits_are_accepted() {
    let expr = compile(&["@a:3", "@a:3"]);
    assert_eq!(expr.limits().get("a"), Some(3));
    assert_eq!(expr.limits().len(), 1);
}

#[test]
fn conflicting_limits_fail_construction() {
    let result = TagExpression::new(["@a:3", "@a:4"]);
    assert_eq!(
        result,
        Err(TagExprError::LimitConflict {
            tag: "a".into(),
            existing: 3,
            requested: 4,
        })
    );
}

#[test]
fn negated_limit_is_keyed_by_bare_name_but_still_negates() {
    let expr = compile(&["~@a:2"]);
    assert_eq!(expr.limits().get("a"), Some(2));
    assert!(!expr.evaluate(["@a"]));
    assert!(expr.evaluate(["@b"]));
}

#[test]
fn limit_without_match_constraint_still_filters() {
    let expr = compile(&["@a:1,@b"]);
    assert!(expr.evaluate(["@b"]));
    assert_eq!(expr.limits().get("@a"), Some(1));
    assert!(!expr.limits().contains("b"));
}

#[rstest]
#[case(&[""])]
#[case(&["   "])]
#[case(&[" , "])]
#[case(&["", "\t"])]
fn blank_expressions_add_no_clause(#[case] expressions: &[&str]) {
    let expr = compile(expressions);
    assert!(expr.is_empty());
    assert!(expr.evaluate(["@anything"]));
    assert!(expr.evaluate(Vec::<String>::new()));
}

#[test]
fn blank_expressions_are_skipped_alongside_real_ones() {
    let expr = compile(&["", "@a", "  "]);
    assert!(!expr.is_empty());
    assert_eq!(expr.clauses().len(), 1);
}

#[test]
fn is_empty_ignores_whether_the_filter_always_matches() {
    let expr = compile(&["@a,~@a"]);
    assert!(!expr.is_empty());
    assert!(expr.evaluate(["@a"]));
    assert!(expr.evaluate(["@b"]));
}

#[test]
fn identical_inputs_produce_identical_evaluators() {
    let inputs = ["@a,~@b:2", "@c"];
    let first = compile(&inputs);
    let second = compile(&inputs);
    assert_eq!(first, second);
    let cases: [&[&str]; 4] = [&["@a", "@c"], &["@b"], &["@b", "@c"], &[]];
    for tags in cases {
        assert_eq!(
            first.evaluate(tags.iter().copied()),
            second.evaluate(tags.iter().copied())
        );
    }
}

#[rstest]
#[case(&[], "")]
#[case(&["@a"], "@a")]
#[case(&["@a, ~@b"], "(~@b,@a)")]
#[case(&["@a:3", "~@b,@c"], "@a && (~@b,@c)")]
fn renders_in_canonical_order(#[case] expressions: &[&str], #[case] expected: &str) {
    assert_eq!(compile(expressions).to_string(), expected);
}

#[test]
fn evaluates_concurrently_from_shared_reference() {
    let expr = compile(&["@a,@b", "~@c"]);
    let expr = &expr;
    std::thread::scope(|scope| {
        let handles: Vec<_> = [["@a", "@x"], ["@b", "@c"]]
            .into_iter()
            .map(|tags| scope.spawn(move || expr.evaluate(tags)))
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|_| panic!("worker panicked")))
            .collect();
        assert_eq!(results, vec![true, false]);
    });
}
