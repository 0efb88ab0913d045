use super::*;
use crate::diagram::model::{RankDir, Stage, Transition};

#[test]
fn pipeline_source_matches_expected_layout() {
    let src = to_dot(&crate::build());
    let expected = "\
// Triangle Transformation Pipeline
digraph {
\trankdir=LR
\tM [label=\"Model Vertex (v0, v1, v2)\"]
\tS [label=Scale]
\tR [label=\"Rotate (Model Rotation)\"]
\tT [label=\"Translate (Model Position)\"]
\tW [label=\"World Vertex\"]
\tC_T [label=\"Translate to Camera Center (p - C)\"]
\tC_R [label=\"Rotate (Camera R^T)\"]
\tProj [label=\"Project (x*f/z, y*f/z)\"]
\tP [label=\"Projected Triangle Vertex\"]
\tM -> S
\tS -> R
\tR -> T
\tT -> W
\tW -> C_T
\tC_T -> C_R
\tC_R -> Proj
\tProj -> P
}
";
    assert_eq!(src, expected);
}

#[test]
fn ids_are_quoted_only_when_needed() {
    assert_eq!(quote_id("C_T"), "C_T");
    assert_eq!(quote_id("_x9"), "_x9");
    assert_eq!(quote_id("42"), "42");
    assert_eq!(quote_id("-1.5"), "-1.5");
    assert_eq!(quote_id("9lives"), "\"9lives\"");
    assert_eq!(quote_id("a b"), "\"a b\"");
    assert_eq!(quote_id(""), "\"\"");
    assert_eq!(quote_id("1.2.3"), "\"1.2.3\"");
}

#[test]
fn keywords_are_always_quoted() {
    assert_eq!(quote_id("node"), "\"node\"");
    assert_eq!(quote_id("Graph"), "\"Graph\"");
    assert_eq!(quote_id("STRICT"), "\"STRICT\"");
}

#[test]
fn embedded_quotes_are_escaped_once() {
    assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote_string("already \\\"ok\\\""), "\"already \\\"ok\\\"\"");
}

#[test]
fn empty_comment_is_omitted_and_rankdir_is_honored() {
    let d = Diagram {
        comment: String::new(),
        rankdir: RankDir::TopToBottom,
        stages: vec![Stage::new("a", "A"), Stage::new("node", "keyword")],
        transitions: vec![Transition::new("a", "node")],
    };
    let src = to_dot(&d);
    assert!(src.starts_with("digraph {\n\trankdir=TB\n"));
    assert!(src.contains("\t\"node\" [label=keyword]\n"));
    assert!(src.contains("\ta -> \"node\"\n"));
}
