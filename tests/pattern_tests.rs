use serde_json::json;
use waymark::{Params, Pattern};

fn pattern(text: &str) -> Pattern {
    Pattern::new(text).expect("pattern should compile")
}

fn params(values: serde_json::Value) -> Params {
    serde_json::from_value(values).expect("params should deserialize")
}

#[test]
fn test_round_trip_preserves_semantics() {
    let sources = [
        "/pets/all",
        "/<id>",
        "/item/<kind=foo,bar>",
        "/a(/<b>)",
        "/a(/<b>(/<c>))",
        "/x i",
    ];
    let paths = ["/pets/all", "/a", "/a/1", "/a/1/2", "/item/foo", "/x", "/X"];

    for source in sources {
        let original = pattern(source);
        let reparsed = pattern(&original.to_string());
        assert_eq!(original.to_string(), reparsed.to_string());
        for path in paths {
            assert_eq!(
                original.match_path(path),
                reparsed.match_path(path),
                "round trip diverged for {source:?} on {path:?}"
            );
        }
    }
}

#[test]
fn test_idempotent_compile() {
    let paths = ["/a", "/a/x", "/a/x/y", "/b", ""];
    let first = pattern("/a(/<b>)");
    let second = pattern("/a(/<b>)");
    for path in paths {
        assert_eq!(first.match_path(path), second.match_path(path));
    }
}

#[test]
fn test_optional_group_omission() {
    let p = pattern("/a(/<b>)");
    assert_eq!(p.build(&params(json!({}))), "/a");
    assert_eq!(p.build(&params(json!({ "b": "x" }))), "/a/x");
}

#[test]
fn test_optional_group_matching() {
    let p = pattern("/a(/<b>)");

    let hit = p.match_path("/a").expect("short form should match");
    assert!(hit.is_empty());

    let hit = p.match_path("/a/x").expect("long form should match");
    assert_eq!(hit, params(json!({ "b": "x" })));

    assert!(p.match_path("/b").is_none());
}

#[test]
fn test_enumerated_values() {
    let p = pattern("/item/<kind=foo,bar>");
    assert_eq!(
        p.match_path("/item/foo").expect("should match"),
        params(json!({ "kind": "foo" }))
    );
    assert!(p.match_path("/item/baz").is_none());
}

#[test]
fn test_repeated_parameter_names() {
    let p = pattern("/<id>/<id>");

    assert_eq!(
        p.match_path("/1/2").expect("should match"),
        params(json!({ "id": ["1", "2"] }))
    );

    assert_eq!(p.build(&params(json!({ "id": ["7", "8"] }))), "/7/8");

    // a scalar is consumed by the first occurrence only, not broadcast
    assert_eq!(p.build(&params(json!({ "id": "7" }))), "/7/");
}

#[test]
fn test_scalar_not_broadcast_into_optional_group() {
    let p = pattern("/<id>(/<id>)");
    assert_eq!(p.build(&params(json!({ "id": "7" }))), "/7");
    assert_eq!(p.build(&params(json!({ "id": ["7", "8"] }))), "/7/8");
}

#[test]
fn test_flags() {
    assert!(pattern("/x i").match_path("/X").is_some());
    assert!(pattern("/x").match_path("/X").is_none());
}

#[test]
fn test_nested_omission_cascade() {
    let p = pattern("/a(/<b>(/<c>))");

    assert_eq!(p.build(&params(json!({}))), "/a");
    // c alone cannot resurrect the inner group without b
    assert_eq!(p.build(&params(json!({ "c": "z" }))), "/a");
    assert_eq!(p.build(&params(json!({ "b": "y" }))), "/a/y");
    assert_eq!(p.build(&params(json!({ "b": "y", "c": "z" }))), "/a/y/z");
}

#[test]
fn test_empty_value_suppresses_segment() {
    let p = pattern("/a(/<b>)");
    assert_eq!(p.build(&params(json!({ "b": "" }))), "/a");
}

#[test]
fn test_repeated_captures_are_decoded() {
    let p = pattern("/<a>/<a>");
    assert_eq!(
        p.match_path("/x%20y/z").expect("should match"),
        params(json!({ "a": ["x y", "z"] }))
    );
}

#[test]
fn test_construction_failures() {
    assert!(Pattern::new("(/x").is_err());
    assert!(Pattern::new("/<a=").is_err());
    assert!(Pattern::new("").is_err());
}
