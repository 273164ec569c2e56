//! Fixture tests for the inline format renderer.

use deepfmt::{
    sformat, sformat_with_options, wrap, wrap_with_options, Custom, Method, Options, Receiver,
    Struct, Value, Verb,
};

#[test]
fn test_verb_grid_on_structs() {
    let v = Value::from(
        Struct::new("demo::Point")
            .field("x", 1i32)
            .field("y", 2i32),
    );
    assert_eq!(sformat(Verb::Compact, &v).unwrap(), "{1 2}");
    assert_eq!(sformat(Verb::WithFields, &v).unwrap(), "{x:1 y:2}");
    assert_eq!(sformat(Verb::WithTypes, &v).unwrap(), "(demo::Point){(i32)1 (i32)2}");
    assert_eq!(
        sformat(Verb::WithTypesAndFields, &v).unwrap(),
        "(demo::Point){x:(i32)1 y:(i32)2}"
    );
}

#[test]
fn test_scalars_and_strings() {
    assert_eq!(sformat(Verb::Compact, &Value::from(255u8)).unwrap(), "255");
    assert_eq!(sformat(Verb::WithTypes, &Value::from(255u8)).unwrap(), "(u8)255");
    assert_eq!(sformat(Verb::Compact, &Value::from("a b")).unwrap(), "a b");
    assert_eq!(sformat(Verb::Compact, &Value::nil()).unwrap(), "<nil>");

    let options = Options::new().with_quoted_strings();
    assert_eq!(
        sformat_with_options(Verb::Compact, &Value::from("a b"), &options).unwrap(),
        "\"a b\""
    );
}

#[test]
fn test_sequences_and_maps() {
    let seq = Value::seq(vec![Value::from(1i32), Value::from(2i32), Value::from(3i32)]);
    assert_eq!(sformat(Verb::Compact, &seq).unwrap(), "[1 2 3]");

    let map = Value::map(vec![
        (Value::from("one"), Value::from(true)),
        (Value::from("two"), Value::from(false)),
    ]);
    assert_eq!(sformat(Verb::Compact, &map).unwrap(), "map[one:true two:false]");
    assert_eq!(
        sformat(Verb::WithTypes, &map).unwrap(),
        "(map[string]bool)map[(string)one:(bool)true (string)two:(bool)false]"
    );
}

#[test]
fn test_reference_markers() {
    let v = Value::ref_to(Value::from(
        Struct::new("demo::P").field("x", 1i32),
    ));
    assert_eq!(sformat(Verb::Compact, &v).unwrap(), "<*>{1}");
    assert_eq!(sformat(Verb::WithTypes, &v).unwrap(), "(*demo::P){(i32)1}");

    let nested = Value::ref_to(Value::ref_to(Value::from(5i32)));
    assert_eq!(sformat(Verb::Compact, &nested).unwrap(), "<*><*>5");
    assert_eq!(sformat(Verb::WithTypes, &nested).unwrap(), "(**i32)5");

    assert_eq!(sformat(Verb::Compact, &Value::nil_ref("i32")).unwrap(), "<*><nil>");
    assert_eq!(sformat(Verb::WithTypes, &Value::nil_ref("i32")).unwrap(), "(*i32)<nil>");
}

#[test]
fn test_cycle_marker() {
    let cell = Value::shared(Value::nil());
    *cell.borrow_mut() = Value::from(
        Struct::new("demo::Node")
            .field("elem", 1i32)
            .field("next", Value::reference(&cell)),
    );
    assert_eq!(
        sformat(Verb::Compact, &Value::reference(&cell)).unwrap(),
        "<*>{1 <*><shown>}"
    );
}

#[test]
fn test_shared_but_acyclic_renders_twice() {
    let shared = Value::shared(Value::from(7i32));
    let v = Value::seq(vec![Value::reference(&shared), Value::reference(&shared)]);
    assert_eq!(sformat(Verb::Compact, &v).unwrap(), "[<*>7 <*>7]");
}

#[test]
fn test_depth_markers() {
    let options = Options::new().with_max_depth(1);
    let seq = Value::seq(vec![Value::seq(vec![Value::from(1i32)])]);
    assert_eq!(
        sformat_with_options(Verb::Compact, &seq, &options).unwrap(),
        "[[<max>]]"
    );

    let map = Value::map(vec![(
        Value::from("k"),
        Value::map(vec![(Value::from("n"), Value::from(1i32))]),
    )]);
    assert_eq!(
        sformat_with_options(Verb::Compact, &map, &options).unwrap(),
        "map[k:map[<max>]]"
    );

    let st = Value::from(
        Struct::new("demo::Outer").field("inner", Struct::new("demo::Inner").field("n", 1i32)),
    );
    assert_eq!(
        sformat_with_options(Verb::Compact, &st, &options).unwrap(),
        "{{<max>}}"
    );
}

#[test]
fn test_no_trailing_newline() {
    let out = sformat(Verb::Compact, &Value::seq(vec![Value::from(1i32)])).unwrap();
    assert!(!out.contains('\n'));
}

#[test]
fn test_capability_with_syntax_precedence() {
    let v = Custom::new(Value::from(1i32))
        .named("demo::Id")
        .syntax(Method::display(Receiver::ByValue, || "Id(1)".to_string()))
        .text(Method::display(Receiver::ByValue, || "#1".to_string()))
        .into_value();
    // Untyped verbs never consult the syntax capability.
    assert_eq!(sformat(Verb::Compact, &v).unwrap(), "#1");
    assert_eq!(sformat(Verb::WithTypes, &v).unwrap(), "(demo::Id)Id(1)");
}

#[test]
fn test_continue_on_method() {
    let v = Custom::new(Value::from(Struct::new("demo::S").field("n", 1i32)))
        .named("demo::S")
        .text(Method::display(Receiver::ByValue, || "summary".to_string()))
        .into_value();
    let options = Options {
        continue_on_method: true,
        ..Options::new()
    };
    assert_eq!(
        sformat_with_options(Verb::Compact, &v, &options).unwrap(),
        "(summary) {1}"
    );
}

#[test]
fn test_clean_format() {
    let options = Options::clean();
    let seq = Value::seq(vec![Value::from(0i32), Value::from(0i32)]);
    assert_eq!(
        sformat_with_options(Verb::WithTypes, &seq, &options).unwrap(),
        "([]i32)[0,0]"
    );
    assert_eq!(
        sformat_with_options(Verb::Compact, &seq, &options).unwrap(),
        "[0,0]"
    );

    let st = Value::from(Struct::new("demo::P").field("x", 1i32).field("y", 2i32));
    assert_eq!(
        sformat_with_options(Verb::WithFields, &st, &options).unwrap(),
        "{x:1,y:2}"
    );

    let map = Value::map(vec![(Value::from("k"), Value::from(1u8))]);
    assert_eq!(
        sformat_with_options(Verb::Compact, &map, &options).unwrap(),
        "{\"k\":1}"
    );

    let strings = Value::seq(vec![Value::from("")]);
    assert_eq!(
        sformat_with_options(Verb::Compact, &strings, &options).unwrap(),
        "[\"\"]"
    );
}

#[test]
fn test_display_and_debug_adapters() {
    let v = Value::from(Struct::new("demo::P").field("x", 1i32));
    assert_eq!(format!("{}", wrap(&v)), "{1}");
    assert_eq!(format!("{:+}", wrap(&v)), "{x:1}");
    assert_eq!(format!("{:#}", wrap(&v)), "(demo::P){(i32)1}");
    assert_eq!(format!("{:+#}", wrap(&v)), "(demo::P){x:(i32)1}");
    assert_eq!(format!("{:?}", wrap(&v)), "(demo::P){(i32)1}");
    assert_eq!(format!("{:#?}", wrap(&v)), "(demo::P){x:(i32)1}");
}

#[test]
fn test_wrapped_options_carry_through() {
    let v = Value::from("a b");
    let wrapped = wrap_with_options(&v, Options::new().with_quoted_strings());
    assert_eq!(format!("{}", wrapped), "\"a b\"");
}
