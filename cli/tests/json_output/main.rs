use friendpath::args::Args;
use friendpath::json_output::{JsonOutput, create_json_output};
use friendpath::search::SearchResult;

fn demo_args() -> Args {
    Args {
        from: "YOU".to_string(),
        to: "ANUJ".to_string(),
        separator: "-->".to_string(),
        json: true,
        no_color: false,
        verbose: false,
        quiet: false,
    }
}

#[test]
fn test_json_output_with_path() {
    let result = SearchResult {
        path: Some(vec![
            "YOU".to_string(),
            "BOB".to_string(),
            "ANUJ".to_string(),
        ]),
        nodes_inspected: 7,
        search_duration: 1.567,
        from_person: "YOU".to_string(),
        to_person: "ANUJ".to_string(),
        display_options: demo_args(),
    };

    let json_output = create_json_output(&result);

    assert_eq!(json_output.query.from, "YOU");
    assert_eq!(json_output.query.to, "ANUJ");

    assert!(json_output.result.found);
    assert_eq!(
        json_output.result.path.unwrap(),
        vec!["YOU", "BOB", "ANUJ"]
    );

    assert_eq!(json_output.stats.search_time_ms, 1567);
    assert_eq!(json_output.stats.nodes_inspected, 7);
}

#[test]
fn test_json_output_no_path() {
    let result = SearchResult {
        path: None,
        nodes_inspected: 8,
        search_duration: 0.234,
        from_person: "YOU".to_string(),
        to_person: "THOH".to_string(),
        display_options: demo_args(),
    };

    let json_output = create_json_output(&result);

    assert_eq!(json_output.query.from, "YOU");
    assert_eq!(json_output.query.to, "THOH");
    assert!(!json_output.result.found);
    assert!(json_output.result.path.is_none());
    assert_eq!(json_output.stats.search_time_ms, 234);
    assert_eq!(json_output.stats.nodes_inspected, 8);
}

#[test]
fn test_json_serialization() {
    let result = SearchResult {
        path: Some(vec!["YOU".to_string(), "BOB".to_string()]),
        nodes_inspected: 1,
        search_duration: 0.1,
        from_person: "YOU".to_string(),
        to_person: "BOB".to_string(),
        display_options: demo_args(),
    };

    let json_output = create_json_output(&result);

    let json_string = serde_json::to_string(&json_output).unwrap();
    assert!(json_string.contains("\"from\":\"YOU\""));
    assert!(json_string.contains("\"to\":\"BOB\""));
    assert!(json_string.contains("\"found\":true"));
    assert!(json_string.contains("\"path\":[\"YOU\",\"BOB\"]"));

    // Verify it can be deserialized back
    let deserialized: JsonOutput = serde_json::from_str(&json_string).unwrap();
    assert_eq!(deserialized.query.from, "YOU");
    assert_eq!(deserialized.query.to, "BOB");
}

#[test]
fn test_json_omits_absent_path() {
    let result = SearchResult {
        path: None,
        nodes_inspected: 2,
        search_duration: 0.0,
        from_person: "YOU".to_string(),
        to_person: "THOH".to_string(),
        display_options: demo_args(),
    };

    let json_string = serde_json::to_string(&create_json_output(&result)).unwrap();

    assert!(!json_string.contains("\"path\""));
}
