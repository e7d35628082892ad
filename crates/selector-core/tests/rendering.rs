//! Integration tests for selector rendering.

use selector_core::{Category, Combinator, ComplexSelector, SelectorBuilder, Specificity};

fn builder(parts: &[(Category, &str)]) -> SelectorBuilder {
    let mut builder = SelectorBuilder::new();
    for (category, value) in parts {
        builder.push(*category, *value).unwrap();
    }
    builder
}

// ============================================================================
// SIMPLE SELECTORS
// ============================================================================

#[test]
fn test_id_and_classes() {
    let b = builder(&[
        (Category::Id, "main"),
        (Category::Class, "container"),
        (Category::Class, "editable"),
    ]);
    insta::assert_snapshot!(b.stringify(), @"#main.container.editable");
}

#[test]
fn test_attribute_and_pseudo_class() {
    let b = builder(&[
        (Category::Element, "a"),
        (Category::Attribute, r#"href$=".png""#),
        (Category::PseudoClass, "focus"),
    ]);
    assert_eq!(b.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_each_category_alone() {
    let cases = [
        (Category::Element, "div"),
        (Category::Id, "#div"),
        (Category::Class, ".div"),
        (Category::Attribute, "[div]"),
        (Category::PseudoClass, ":div"),
        (Category::PseudoElement, "::div"),
    ];
    for (category, expected) in cases {
        assert_eq!(
            SelectorBuilder::starting_with(category, "div").stringify(),
            expected
        );
    }
}

#[test]
fn test_attributes_have_no_separator() {
    let b = builder(&[
        (Category::Attribute, "type=checkbox"),
        (Category::Attribute, "checked"),
    ]);
    assert_eq!(b.stringify(), "[type=checkbox][checked]");
}

#[test]
fn test_stringify_is_idempotent() {
    let b = builder(&[(Category::Element, "p"), (Category::PseudoElement, "first-line")]);
    let first = b.stringify();
    assert_eq!(b.stringify(), first);
    assert_eq!(b.to_string(), first);
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_each_combinator() {
    let cases = [
        (Combinator::Descendant, "a   b"),
        (Combinator::Child, "a > b"),
        (Combinator::AdjacentSibling, "a + b"),
        (Combinator::GeneralSibling, "a ~ b"),
    ];
    for (combinator, expected) in cases {
        let mut left = SelectorBuilder::starting_with(Category::Element, "a");
        left.combine(combinator, SelectorBuilder::starting_with(Category::Element, "b"));
        assert_eq!(left.stringify(), expected);
    }
}

#[test]
fn test_nested_combination() {
    let mut tr = builder(&[
        (Category::Element, "tr"),
        (Category::PseudoClass, "nth-of-type(even)"),
    ]);
    let td = builder(&[
        (Category::Element, "td"),
        (Category::PseudoClass, "nth-of-type(even)"),
    ]);
    tr.combine(Combinator::Descendant, td);

    let mut table = builder(&[(Category::Element, "table"), (Category::Id, "data")]);
    table.combine(Combinator::GeneralSibling, tr);

    let mut div = builder(&[
        (Category::Element, "div"),
        (Category::Id, "main"),
        (Category::Class, "container"),
        (Category::Class, "draggable"),
    ]);
    div.combine(Combinator::AdjacentSibling, table);

    insta::assert_snapshot!(
        div.stringify(),
        @"div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_repeated_combine_chains_in_call_order() {
    let mut a = SelectorBuilder::starting_with(Category::Element, "a");
    a.combine(
        Combinator::AdjacentSibling,
        SelectorBuilder::starting_with(Category::Element, "b"),
    )
    .combine(
        Combinator::GeneralSibling,
        SelectorBuilder::starting_with(Category::Element, "c"),
    );
    assert_eq!(a.stringify(), "a + b ~ c");
}

#[test]
fn test_combined_tree_shape() {
    let mut left = SelectorBuilder::starting_with(Category::Element, "nav");
    left.combine(
        Combinator::Child,
        SelectorBuilder::starting_with(Category::Element, "a"),
    );

    match left.selector() {
        ComplexSelector::Combined {
            head,
            combinator,
            tail,
        } => {
            assert_eq!(head.element(), Some("nav"));
            assert_eq!(*combinator, Combinator::Child);
            assert_eq!(tail.head().element(), Some("a"));
            assert!(!tail.is_combined());
        }
        ComplexSelector::Compound(_) => panic!("expected a combined selector"),
    }
}

// ============================================================================
// SPECIFICITY
// ============================================================================

#[test]
fn test_specificity_sums_across_chain() {
    let mut left = builder(&[(Category::Element, "ul"), (Category::Id, "nav")]);
    let right = builder(&[(Category::Element, "li"), (Category::Class, "active")]);
    left.combine(Combinator::Child, right);

    assert_eq!(
        left.specificity(),
        Specificity {
            ids: 1,
            classes: 1,
            types: 2
        }
    );
}

#[test]
fn test_specificity_ordering() {
    let id_only = SelectorBuilder::starting_with(Category::Id, "x").specificity();
    let many_classes = builder(&[
        (Category::Class, "a"),
        (Category::Class, "b"),
        (Category::Class, "c"),
    ])
    .specificity();
    assert!(id_only > many_classes);
}
