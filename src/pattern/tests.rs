use super::{MatchParams, Pattern};

fn pattern(text: &str) -> Pattern {
    Pattern::new(text).expect("pattern should compile")
}

#[test]
fn test_flag_letters_from_text() {
    let p = pattern("/x i");
    assert!(p.params().is_ignore_case());
    assert!(!p.params().is_do_not_match_start());
    assert!(!p.params().is_do_not_match_end());
}

#[test]
fn test_upper_case_letter_disables() {
    let p = pattern("/x I");
    assert!(!p.params().is_ignore_case());
    // the explicit false still round-trips
    assert_eq!(p.to_string(), "/x I");
}

#[test]
fn test_unrecognized_letters_are_ignored() {
    let p = pattern("/x zq");
    assert!(!p.params().is_ignore_case());
    assert_eq!(p.to_string(), "/x");
}

#[test]
fn test_text_flags_override_programmatic() {
    let params = MatchParams::new().ignore_case(true);
    let p = Pattern::with_params("/x I", params).expect("pattern should compile");
    assert!(p.match_path("/x").is_some());
    assert!(p.match_path("/X").is_none());
}

#[test]
fn test_programmatic_params_apply() {
    let params = MatchParams::new().ignore_case(true);
    let p = Pattern::with_params("/x", params).expect("pattern should compile");
    assert!(p.match_path("/X").is_some());
}

#[test]
fn test_case_sensitivity_default() {
    assert!(pattern("/x").match_path("/X").is_none());
    assert!(pattern("/x i").match_path("/X").is_some());
}

#[test]
fn test_do_not_match_start() {
    let p = pattern("/b s");
    assert!(p.match_path("/a/b").is_some());
    assert!(pattern("/b").match_path("/a/b").is_none());
}

#[test]
fn test_do_not_match_end() {
    let p = pattern("/a e");
    assert!(p.match_path("/a/b").is_some());
    assert!(pattern("/a").match_path("/a/b").is_none());
}

#[test]
fn test_flag_serialization_order() {
    let p = pattern("/x ies");
    assert_eq!(p.to_string(), "/x sei");
}

#[test]
fn test_captured_values_are_percent_decoded() {
    let p = pattern("/files/<name>");
    let params = p.match_path("/files/a%2Fb").expect("should match");
    assert_eq!(params["name"], "a/b".into());
}

#[test]
fn test_build_percent_encodes_values() {
    let p = pattern("/files/<name>");
    let mut values = super::Params::new();
    values.insert("name".to_string(), "a/b".into());
    assert_eq!(p.build(&values), "/files/a%2Fb");
}

#[test]
fn test_static_matches_encoded_and_decoded() {
    let p = pattern("/caf%C3%A9");
    assert!(p.match_path("/café").is_some());
    assert!(p.match_path("/caf%C3%A9").is_some());
    assert!(p.match_path("/cafe").is_none());
}

#[test]
fn test_build_emits_encoded_static() {
    let p = pattern("/caf%C3%A9");
    assert_eq!(p.build(&super::Params::new()), "/caf%C3%A9");
}

#[test]
fn test_ignore_case_matches_encoded_case_variants() {
    let p = pattern("/café i");
    assert!(p.match_path("/CAF%C3%89").is_some());
    assert!(p.match_path("/CAFÉ").is_some());
}

#[test]
fn test_names_in_occurrence_order() {
    let p = pattern("/<a>/<b>(/<c>)");
    assert_eq!(p.names(), &["a", "b", "c"]);
}

#[test]
fn test_empty_body_fails() {
    assert!(Pattern::new("").is_err());
    assert!(Pattern::new(" i").is_err());
}
