use gainsplit::{build_tree, extract_rules, Label, Record, Rule};

use rand::prelude::*;


fn record(label: Label, pairs: &[(&str, &str)]) -> Record {
    Record::from_pairs(label, pairs.iter().copied())
}


// Push opening brackets, pop on closing ones;
// the stack must never underflow and must end up empty.
fn assert_balanced(rule: &str) {
    let mut stack = Vec::new();
    for c in rule.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' => assert_eq!(stack.pop(), Some('('), "in `{rule}`"),
            ']' => assert_eq!(stack.pop(), Some('['), "in `{rule}`"),
            '}' => assert_eq!(stack.pop(), Some('{'), "in `{rule}`"),
            _ => {},
        }
    }
    assert!(stack.is_empty(), "unclosed brackets in `{rule}`");
}


#[test]
fn small_scenario_rule() {
    let records = vec![
        record(Label::Negative, &[("odor", "Foul")]),
        record(Label::Positive, &[("odor", "Almond"), ("color", "White")]),
        record(Label::Positive, &[("odor", "Almond"), ("color", "Brown")]),
        record(Label::Negative, &[("odor", "None"), ("size", "Small")]),
    ];
    let tree = build_tree(&records).unwrap();

    assert_eq!(extract_rules(&tree), "[ (odor = Almond) ]");
}


#[test]
fn nested_rule_for_the_mushroom_scenario() {
    let records = vec![
        record(Label::Negative, &[("odor", "Pungent"),  ("spore-print-color", "Brown")]),
        record(Label::Negative, &[("odor", "Foul"),     ("spore-print-color", "White")]),
        record(Label::Positive, &[("odor", "Almond"),   ("spore-print-color", "Brown")]),
        record(Label::Positive, &[("odor", "Anise"),    ("spore-print-color", "White")]),
        record(Label::Negative, &[("odor", "None"),     ("spore-print-color", "Green")]),
        record(Label::Positive, &[("odor", "None"),     ("spore-print-color", "Brown")]),
        record(Label::Positive, &[("odor", "None"),     ("spore-print-color", "White")]),
    ];
    let tree = build_tree(&records).unwrap();

    let rule = extract_rules(&tree);
    assert_balanced(&rule);
    assert_eq!(
        rule,
        "[ (odor = Almond) OR (odor = Anise) OR (odor = None) AND \
        [ (spore-print-color = Brown) OR (spore-print-color = White) ] ]",
    );
}


#[test]
fn negative_paths_contribute_nothing() {
    let records = vec![
        record(Label::Negative, &[("odor", "Foul")]),
        record(Label::Negative, &[("odor", "Pungent")]),
        record(Label::Positive, &[("odor", "Almond")]),
    ];
    let tree = build_tree(&records).unwrap();

    let rule = extract_rules(&tree);
    assert!(!rule.contains("Foul"), "negative path leaked into `{rule}`");
    assert!(!rule.contains("Pungent"), "negative path leaked into `{rule}`");
}


#[test]
fn all_negative_subtrees_are_pruned() {
    // The odorless records conflict, so that branch grows a decision
    // node on the spore print whose only leaf is a majority-negative
    // one. The whole branch must vanish from the rule, exactly like
    // a direct negative leaf.
    let records = vec![
        record(Label::Positive, &[("odor", "Almond"), ("spore-print-color", "Brown")]),
        record(Label::Positive, &[("odor", "None"),   ("spore-print-color", "White")]),
        record(Label::Negative, &[("odor", "None"),   ("spore-print-color", "White")]),
        record(Label::Negative, &[("odor", "None"),   ("spore-print-color", "White")]),
    ];
    let tree = build_tree(&records).unwrap();

    let rule = extract_rules(&tree);
    assert_eq!(rule, "[ (odor = Almond) ]");
    assert!(!rule.contains("None"), "negative subtree leaked into `{rule}`");
    assert!(
        !rule.contains("spore-print-color"),
        "negative subtree leaked into `{rule}`",
    );
}


#[test]
fn degenerate_trees_have_balanced_rules() {
    let all_positive = vec![
        record(Label::Positive, &[("odor", "Almond")]),
        record(Label::Positive, &[("odor", "Anise")]),
    ];
    let tree = build_tree(&all_positive).unwrap();
    let rule = Rule::from_classifier(&tree);
    assert_eq!(rule, Rule::Conjunction(Vec::new()));
    assert_balanced(&rule.to_string());

    let all_negative = vec![
        record(Label::Negative, &[("odor", "Foul")]),
    ];
    let tree = build_tree(&all_negative).unwrap();
    assert_eq!(extract_rules(&tree), "[ ]");
    assert_balanced(&extract_rules(&tree));
}


#[test]
fn random_datasets_produce_balanced_rules() {
    let attributes = ["odor", "cap-color", "gill-size", "habitat"];
    let values = ["A", "B", "C"];

    let mut rng = StdRng::seed_from_u64(0x1d3);
    for _ in 0..50 {
        let n_records = rng.gen_range(1..=40);
        let mut records = Vec::with_capacity(n_records);
        for _ in 0..n_records {
            let mut pairs = Vec::new();
            for &attribute in &attributes {
                if rng.gen_bool(0.8) {
                    pairs.push((attribute, *values.choose(&mut rng).unwrap()));
                }
            }
            records.push(record(Label::from(rng.gen_bool(0.5)), &pairs));
        }

        let tree = build_tree(&records).unwrap();
        assert_balanced(&extract_rules(&tree));
    }
}


#[test]
fn induction_is_deterministic_under_serialization() {
    let records = vec![
        record(Label::Negative, &[("odor", "Foul"), ("cap-color", "Brown")]),
        record(Label::Positive, &[("odor", "Almond"), ("cap-color", "White")]),
        record(Label::Positive, &[("odor", "None"), ("cap-color", "White")]),
        record(Label::Negative, &[("odor", "None"), ("cap-color", "Green")]),
    ];
    let a = serde_json::to_string(&build_tree(&records).unwrap()).unwrap();
    let b = serde_json::to_string(&build_tree(&records).unwrap()).unwrap();
    assert_eq!(a, b);
}
