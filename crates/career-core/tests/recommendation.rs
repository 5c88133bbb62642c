use career_core::category::{self, CATEGORIES};
use career_core::error::RecommendationError;
use career_core::recommendation::parse_recommendation;

#[test]
fn parses_bracketed_output_with_padding() {
    let record =
        parse_recommendation(" [소프트웨어 개발자 : 논리적 사고와 수학 성향에 적합 : 정보통신] ")
            .unwrap();
    assert_eq!(record.job, "소프트웨어 개발자");
    assert_eq!(record.reason, "논리적 사고와 수학 성향에 적합");
    assert_eq!(record.category, 20);
}

#[test]
fn brackets_are_optional() {
    let record = parse_recommendation("간호사:돌봄에 대한 관심:보건·의료").unwrap();
    assert_eq!(record.job, "간호사");
    assert_eq!(record.category, 6);
}

#[test]
fn unbalanced_bracket_is_kept_in_the_field() {
    // Only a matching pair is stripped; a lone `[` stays part of the job.
    let record = parse_recommendation("[간호사:돌봄에 대한 관심:보건·의료").unwrap();
    assert_eq!(record.job, "[간호사");
}

#[test]
fn every_category_round_trips_to_its_index() {
    for (i, label) in CATEGORIES.iter().enumerate() {
        let raw = format!("[직업{i}:이유 {i}:{label}]");
        let record = parse_recommendation(&raw).unwrap();
        assert_eq!(record.job, format!("직업{i}"));
        assert_eq!(record.reason, format!("이유 {i}"));
        assert_eq!(record.category, i + 1);
        assert_eq!(category::label(record.category), Some(*label));
    }
}

#[test]
fn too_few_fields_is_malformed() {
    let err = parse_recommendation("[소프트웨어 개발자:정보통신]").unwrap_err();
    assert!(matches!(err, RecommendationError::Malformed { found: 2, .. }));
}

#[test]
fn colon_inside_reason_is_malformed() {
    let err = parse_recommendation("[데이터 분석가:이유: 통계에 강함:정보통신]").unwrap_err();
    assert!(matches!(err, RecommendationError::Malformed { found: 4, .. }));
}

#[test]
fn prose_answer_is_malformed() {
    let err = parse_recommendation("추천 직업은 소프트웨어 개발자입니다.").unwrap_err();
    assert!(matches!(err, RecommendationError::Malformed { found: 1, .. }));
}

#[test]
fn unknown_category_is_rejected() {
    let err = parse_recommendation("[요리사:손재주가 좋음:요리]").unwrap_err();
    assert_eq!(err, RecommendationError::UnknownCategory("요리".to_string()));
}

#[test]
fn category_match_is_exact() {
    // A near miss must not fall back to any index.
    let err = parse_recommendation("[기자:글쓰기:문화·예술·디자인]").unwrap_err();
    assert!(matches!(err, RecommendationError::UnknownCategory(_)));
}

#[test]
fn empty_job_or_reason_is_kept() {
    let record = parse_recommendation("[:이유:정보통신]").unwrap();
    assert_eq!(record.job, "");
    assert_eq!(record.reason, "이유");
    assert_eq!(record.category, 20);

    let record = parse_recommendation("[개발자: :정보통신]").unwrap();
    assert_eq!(record.job, "개발자");
    assert_eq!(record.reason, "");
    assert_eq!(record.category, 20);
}

#[test]
fn category_index_bounds() {
    assert_eq!(category::label(0), None);
    assert_eq!(category::label(1), Some("사업관리"));
    assert_eq!(category::label(24), Some("농림어업"));
    assert_eq!(category::label(25), None);
    assert_eq!(category::index_of("화학·바이오(구.화학)"), Some(17));
}
