use super::Registry;
use crate::ids::RuleId;
use crate::pattern::MatchParams;
use serde_json::json;

#[test]
fn test_add_and_get_rule() {
    let mut registry = Registry::new();
    registry
        .add_rule("/pets/<id>", json!({ "name": "pet", "tag": 7 }))
        .expect("rule should compile");

    let rule = registry.get_rule("pet").expect("rule should be present");
    assert_eq!(rule.name(), "pet");
    assert_eq!(rule.data()["tag"], json!(7));
    assert_eq!(rule.data()["name"], json!("pet"));
    assert!(registry.get_rule("unknown").is_none());
}

#[test]
fn test_generated_name_lands_in_data_bag() {
    let mut registry = Registry::new();
    registry
        .add_rule("/pets", json!({}))
        .expect("rule should compile");

    let name = registry.order()[0].clone();
    let rule = registry.get_rule(&name).expect("rule should be present");
    assert_eq!(rule.data()["name"], json!(name.clone()));
    assert!(name.parse::<RuleId>().is_ok());
}

#[test]
fn test_non_object_data_is_treated_as_empty() {
    let mut registry = Registry::new();
    registry
        .add_rule("/pets", json!(null))
        .expect("rule should compile");
    assert_eq!(registry.order().len(), 1);
}

#[test]
fn test_readd_moves_rule_to_end() {
    let mut registry = Registry::new();
    registry
        .add_rule("/a", json!({ "name": "a" }))
        .expect("rule should compile")
        .add_rule("/b", json!({ "name": "b" }))
        .expect("rule should compile")
        .add_rule("/a2", json!({ "name": "a" }))
        .expect("rule should compile");

    assert_eq!(registry.order(), &["b", "a"]);
    let rule = registry.get_rule("a").expect("rule should be present");
    assert_eq!(rule.pattern().to_string(), "/a2");
}

#[test]
fn test_match_reports_every_matching_rule() {
    let mut registry = Registry::new();
    registry
        .add_rule("/<anything>", json!({ "name": "wild" }))
        .expect("rule should compile")
        .add_rule("/pets", json!({ "name": "pets" }))
        .expect("rule should compile")
        .add_rule("/users", json!({ "name": "users" }))
        .expect("rule should compile");

    let hits = registry.match_path("/pets");
    let names: Vec<&str> = hits.iter().map(|hit| hit.name.as_str()).collect();
    assert_eq!(names, vec!["wild", "pets"]);
}

#[test]
fn test_default_params_apply_to_every_rule() {
    let mut registry = Registry::with_params(MatchParams::new().ignore_case(true));
    registry
        .add_rule("/pets", json!({ "name": "pets" }))
        .expect("rule should compile")
        .add_rule("/users I", json!({ "name": "users" }))
        .expect("rule should compile");

    assert_eq!(registry.match_path("/PETS").len(), 1);
    // the rule's own explicit flag overrides the registry default
    assert!(registry.match_path("/USERS").is_empty());
}

#[test]
fn test_syntax_error_leaves_registry_unchanged() {
    let mut registry = Registry::new();
    registry
        .add_rule("/a", json!({ "name": "a" }))
        .expect("rule should compile");
    assert!(registry.add_rule("(/broken", json!({ "name": "b" })).is_err());
    assert_eq!(registry.order(), &["a"]);
}
