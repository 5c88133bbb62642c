use career_bedrock::search::{SearchResult, format_results};

#[test]
fn empty_results_have_a_placeholder() {
    assert_eq!(format_results(&[]), "No results found.");
}

#[test]
fn results_are_numbered() {
    let results = vec![
        SearchResult {
            title: "2025 유망 직업".to_string(),
            url: "https://example.com/a".to_string(),
            content: "  데이터 엔지니어 수요 증가  ".to_string(),
        },
        SearchResult {
            title: "간호 인력 전망".to_string(),
            url: "https://example.com/b".to_string(),
            content: String::new(),
        },
    ];

    let text = format_results(&results);
    assert!(text.starts_with("[1] 2025 유망 직업\nhttps://example.com/a\n데이터 엔지니어 수요 증가"));
    assert!(text.contains("\n\n[2] 간호 인력 전망\nhttps://example.com/b"));
}

#[test]
fn tavily_results_deserialize_without_content() {
    let hit: SearchResult =
        serde_json::from_str(r#"{"title":"t","url":"https://x","score":0.9}"#).unwrap();
    assert_eq!(hit.content, "");
}
