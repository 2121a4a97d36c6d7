use rstest::{fixture, rstest};
use xpath_convert::axes::{descendants, namespace_axis};
use xpath_convert::consts::XML_URI;
use xpath_convert::runtime::{DynamicContext, DynamicContextBuilder};
use xpath_convert::simple_node::{comment, doc, elem, text};
use xpath_convert::{ErrorCode, NodeKind, NodeSet, SimpleNode, Value, XdmNode, string_fn};

#[fixture]
fn dc() -> DynamicContext<SimpleNode> {
    DynamicContextBuilder::new().build()
}

fn string_of(v: Value<SimpleNode>) -> String {
    string_fn(&DynamicContextBuilder::new().build(), &[v]).unwrap()
}

fn elements_named(root: &SimpleNode, local: &str) -> Vec<SimpleNode> {
    descendants(root)
        .into_iter()
        .filter(|n| n.kind() == NodeKind::Element && n.name().is_some_and(|q| q.local == local))
        .collect()
}

#[rstest]
fn string_operates_on_first_node_in_document_order() {
    // <a><b><x>2</x><x>3</x></b><x>4</x></a>
    let d = doc()
        .child(
            elem("a")
                .child(
                    elem("b")
                        .child(elem("x").child(text("2")))
                        .child(elem("x").child(text("3"))),
                )
                .child(elem("x").child(text("4"))),
        )
        .build();
    // Discovery order x4, x3, x2: the reverse of document order.
    let mut xs = elements_named(&d, "x");
    xs.reverse();
    let set: NodeSet<SimpleNode> = xs.into_iter().collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.iter().next().map(SimpleNode::string_value).as_deref(), Some("4"));
    assert_eq!(string_of(Value::NodeSet(set)), "2");
}

#[rstest]
fn string_value_of_comment() {
    let d = doc().child(elem("a").child(comment("data"))).build();
    let a = d.children()[0].clone();
    let comments: NodeSet<SimpleNode> = a
        .children()
        .into_iter()
        .filter(|n| n.kind() == NodeKind::Comment)
        .collect();
    assert_eq!(string_of(Value::NodeSet(comments)), "data");
}

#[rstest]
fn string_value_of_namespace_node() {
    let d = doc().child(elem("a")).build();
    let a = d.children()[0].clone();
    let set: NodeSet<SimpleNode> = namespace_axis(&a).into_iter().collect();
    assert_eq!(string_of(Value::NodeSet(set)), XML_URI);
}

#[rstest]
#[case(0.000_000_3, "0.0000003")]
#[case(100_000_000.5, "100000000.5")]
#[case(12.0, "12")]
#[case(-0.0, "0")]
#[case(f64::INFINITY, "Infinity")]
#[case(f64::NEG_INFINITY, "-Infinity")]
#[case(f64::NAN, "NaN")]
fn string_of_numbers(#[case] n: f64, #[case] expected: &str) {
    assert_eq!(string_of(Value::Number(n)), expected);
}

#[rstest]
fn string_of_division_results() {
    let one = 1.0_f64;
    let zero = 0.0_f64;
    assert_eq!(string_of(Value::Number(one / zero)), "Infinity");
    assert_eq!(string_of(Value::Number(-one / zero)), "-Infinity");
    assert_eq!(string_of(Value::Number(zero / zero)), "NaN");
}

#[rstest]
fn string_of_booleans_and_strings() {
    assert_eq!(string_of(Value::Boolean(true)), "true");
    assert_eq!(string_of(Value::Boolean(false)), "false");
    assert_eq!(string_of(Value::from("  as is ")), "  as is ");
    assert_eq!(string_of(Value::from(String::new())), "");
}

#[rstest]
fn string_of_empty_node_set_is_empty() {
    assert_eq!(string_of(Value::NodeSet(NodeSet::new())), "");
}

#[rstest]
fn string_requires_at_most_one_argument(dc: DynamicContext<SimpleNode>) {
    let err = string_fn(&dc, &[Value::from("a"), Value::Number(1.0)]).unwrap_err();
    assert_eq!(err.code_enum(), ErrorCode::XPST0017);
    assert!(err.is_function_call());
    assert!(!err.message.is_empty());
    let msg = err.to_string();
    assert!(
        msg.contains("function string() cannot be called with two arguments"),
        "unexpected error message: {msg}"
    );
}

#[rstest]
fn string_with_three_arguments_names_the_count(dc: DynamicContext<SimpleNode>) {
    let args = [Value::Boolean(true), Value::Boolean(false), Value::Number(3.0)];
    let err = string_fn(&dc, &args).unwrap_err();
    assert!(err.message.contains("three arguments"));
}

#[rstest]
fn string_without_arguments_uses_context_item() {
    let d = doc()
        .child(elem("r").child(text("con")).child(elem("i").child(text("text"))))
        .build();
    let r = d.children()[0].clone();
    let ctx = DynamicContextBuilder::new().with_context_item(r).build();
    assert_eq!(string_fn(&ctx, &[]).unwrap(), "context");
}

#[rstest]
fn string_without_arguments_and_without_context_is_empty(dc: DynamicContext<SimpleNode>) {
    assert_eq!(string_fn(&dc, &[]).unwrap(), "");
}

#[rstest]
fn string_argument_overrides_context_item() {
    let d = doc().child(elem("r").child(text("ctx"))).build();
    let ctx = DynamicContextBuilder::new()
        .with_context_item(d.clone())
        .build();
    assert_eq!(string_fn(&ctx, &[Value::Number(1.5)]).unwrap(), "1.5");
}

#[rstest]
fn value_conversions_follow_node_set_first_node() {
    let d = doc()
        .child(
            elem("r")
                .child(elem("n").child(text(" 42 ")))
                .child(elem("n").child(text("x"))),
        )
        .build();
    let mut ns = elements_named(&d, "n");
    ns.reverse();
    let v = Value::NodeSet(ns.into_iter().collect::<NodeSet<_>>());
    assert_eq!(v.to_xpath_string(), " 42 ");
    assert!((v.to_number() - 42.0).abs() < f64::EPSILON);
    assert!(v.to_boolean());
    assert!(!Value::<SimpleNode>::NodeSet(NodeSet::new()).to_boolean());
    assert!(Value::<SimpleNode>::NodeSet(NodeSet::new()).to_number().is_nan());
    assert!(!Value::<SimpleNode>::Number(f64::NAN).to_boolean());
    assert!(!Value::<SimpleNode>::Number(-0.0).to_boolean());
    assert_eq!(Value::<SimpleNode>::Boolean(true).to_number(), 1.0);
    assert_eq!(Value::<SimpleNode>::from("x").type_name(), "string");
}
