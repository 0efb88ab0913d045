use std::fmt::Write as _;

use crate::diagram::model::Diagram;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Serialize a diagram into Graphviz DOT source.
///
/// Nodes come before edges, both in declaration order, one tab-indented statement per line.
/// Ids and label values share the same quoting rule, see [`quote_id`].
pub fn to_dot(diagram: &Diagram) -> String {
    let mut out = String::new();

    if !diagram.comment.is_empty() {
        for line in diagram.comment.lines() {
            let _ = writeln!(out, "// {line}");
        }
    }

    out.push_str("digraph {\n");
    let _ = writeln!(out, "\trankdir={}", diagram.rankdir.as_dot());

    for stage in &diagram.stages {
        let _ = writeln!(
            out,
            "\t{} [label={}]",
            quote_id(&stage.id),
            quote_id(&stage.label)
        );
    }

    for t in &diagram.transitions {
        let _ = writeln!(out, "\t{} -> {}", quote_id(&t.from), quote_id(&t.to));
    }

    out.push_str("}\n");
    out
}

/// Quote `id` unless it is a bare DOT identifier or numeral.
pub fn quote_id(id: &str) -> String {
    if is_bare_id(id) || is_numeral(id) {
        id.to_string()
    } else {
        quote_string(id)
    }
}

/// Wrap `s` in double quotes, escaping embedded quotes.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut prev_backslash = false;
    for c in s.chars() {
        if c == '"' && !prev_backslash {
            out.push('\\');
        }
        out.push(c);
        prev_backslash = c == '\\' && !prev_backslash;
    }
    out.push('"');
    out
}

fn is_bare_id(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() {
        return false;
    }
    let mut dots = 0usize;
    let mut any_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => any_digit = true,
            '.' => dots += 1,
            _ => return false,
        }
    }
    any_digit && dots <= 1
}

#[cfg(test)]
#[path = "../../tests/unit/dot/writer.rs"]
mod tests;
