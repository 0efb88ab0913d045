use super::*;

fn fan_out() -> Diagram {
    Diagram {
        comment: String::new(),
        rankdir: RankDir::TopToBottom,
        stages: vec![
            Stage::new("a", "A"),
            Stage::new("b", "B"),
            Stage::new("c", "C"),
        ],
        transitions: vec![Transition::new("a", "b"), Transition::new("a", "c")],
    }
}

#[test]
fn degree_queries_count_matching_edges() {
    let d = fan_out();
    assert_eq!(d.out_degree("a"), 2);
    assert_eq!(d.in_degree("a"), 0);
    assert_eq!(d.in_degree("b"), 1);
    assert_eq!(d.out_degree("c"), 0);
    assert_eq!(d.out_degree("missing"), 0);
}

#[test]
fn stage_lookup_by_id_and_label() {
    let d = fan_out();
    assert_eq!(d.stage("b").map(|s| s.label.as_str()), Some("B"));
    assert_eq!(d.stage_by_label("C").map(|s| s.id.as_str()), Some("c"));
    assert!(d.stage("z").is_none());
}

#[test]
fn rankdir_serializes_as_dot_keyword() {
    let json = serde_json::to_string(&RankDir::LeftToRight).unwrap();
    assert_eq!(json, "\"LR\"");
    assert_eq!(RankDir::BottomToTop.as_dot(), "BT");
    assert_eq!(RankDir::default(), RankDir::LeftToRight);
}

#[test]
fn diagram_json_keeps_order() {
    let d = fan_out();
    let json = serde_json::to_string(&d).unwrap();
    let back: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    assert!(json.find("\"a\"").unwrap() < json.find("\"b\"").unwrap());
}
