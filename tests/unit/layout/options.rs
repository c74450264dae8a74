use super::*;

#[test]
fn defaults_match_documented_spacing() {
    let o = LayoutOptions::default();
    assert_eq!(o.rank_dir, RankDir::TopToBottom);
    assert_eq!((o.node_sep, o.edge_sep, o.rank_sep), (128.0, 100.0, 128.0));
}

#[test]
fn parses_short_rank_dir_and_aliases() {
    let o = LayoutOptions::from_json_str(r#"{"rankdir": "LR", "nodesep": 40}"#).unwrap();
    assert_eq!(o.rank_dir, RankDir::LeftToRight);
    assert!(o.rank_dir.is_horizontal());
    assert_eq!(o.node_sep, 40.0);
    assert_eq!(o.rank_sep, 128.0);

    let o = LayoutOptions::from_json_str(r#"{"rank_dir": "BT"}"#).unwrap();
    assert_eq!(o.rank_dir, RankDir::BottomToTop);
}

#[test]
fn rejects_negative_spacing_and_unknown_fields() {
    let err = LayoutOptions::from_json_str(r#"{"rank_sep": -1}"#).unwrap_err();
    assert!(matches!(err, DiagramError::Validation(_)));

    let err = LayoutOptions::from_json_str(r#"{"rank_spacing": 3}"#).unwrap_err();
    assert!(matches!(err, DiagramError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = LayoutOptions::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"));
}
