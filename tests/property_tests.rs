//! Property-based tests over generated value trees.
//!
//! These complement the fixture tests by checking structural invariants of
//! the renderers across a wide range of inputs: termination, determinism,
//! and the newline conventions of each output style.

use proptest::prelude::*;

use deepfmt::{sdump, sdump_with_options, sformat, Options, Struct, Value, Verb};

/// A bounded tree of acyclic values; references and customs are covered by
/// the fixture tests, where identity can be asserted exactly.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::nil()),
        any::<bool>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::seq),
            prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..5).prop_map(|entries| {
                Value::map(
                    entries
                        .into_iter()
                        .map(|(k, v)| (Value::from(k), v))
                        .collect(),
                )
            }),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..5).prop_map(|fields| {
                let mut st = Struct::new("prop::Node");
                for (name, value) in fields {
                    st = st.field(&name, value);
                }
                Value::from(st)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_dump_ends_with_single_newline(v in arb_value()) {
        let out = sdump(&v).unwrap();
        prop_assert!(out.ends_with('\n'));
        prop_assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn prop_format_has_no_newlines(v in arb_value()) {
        let out = sformat(Verb::WithTypesAndFields, &v).unwrap();
        prop_assert!(!out.contains('\n'));
    }

    #[test]
    fn prop_renders_are_deterministic(v in arb_value()) {
        prop_assert_eq!(sdump(&v).unwrap(), sdump(&v).unwrap());
        prop_assert_eq!(
            sformat(Verb::Compact, &v).unwrap(),
            sformat(Verb::Compact, &v).unwrap()
        );
    }

    #[test]
    fn prop_depth_bound_never_panics(v in arb_value(), depth in 0usize..4) {
        let options = Options::new().with_max_depth(depth);
        sdump_with_options(&v, &options).unwrap();
    }

    #[test]
    fn prop_acyclic_trees_have_no_cycle_markers(v in arb_value()) {
        let out = sdump(&v).unwrap();
        prop_assert!(!out.contains("<already shown>"));
    }

    #[test]
    fn prop_clean_dump_has_no_annotations(v in arb_value()) {
        let out = sdump_with_options(&v, &Options::clean()).unwrap();
        prop_assert!(!out.contains("len="));
        prop_assert!(!out.contains("cap="));
        prop_assert!(!out.contains("0x"));
    }

    #[test]
    fn prop_cyclic_lists_terminate(len in 1usize..6) {
        let head = Value::shared(Value::nil());
        let mut tail = Value::reference(&head);
        for i in 0..len {
            tail = Value::ref_to(Value::from(
                Struct::new("prop::Node")
                    .field("elem", i as i64)
                    .field("next", tail),
            ));
        }
        *head.borrow_mut() = Value::from(
            Struct::new("prop::Node")
                .field("elem", -1i64)
                .field("next", tail),
        );

        let out = sdump(&Value::reference(&head)).unwrap();
        prop_assert!(out.contains("<already shown>"));
        let inline = sformat(Verb::Compact, &Value::reference(&head)).unwrap();
        prop_assert!(inline.contains("<shown>"));
    }
}
