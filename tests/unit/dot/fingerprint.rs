use super::*;
use crate::dot::writer::to_dot;

#[test]
fn equal_sources_hash_equal() {
    let a = fingerprint_source(&to_dot(&crate::build()));
    let b = fingerprint_source(&to_dot(&crate::build()));
    assert_eq!(a, b);
}

#[test]
fn any_edit_changes_the_fingerprint() {
    let mut d = crate::build();
    let base = fingerprint_source(&to_dot(&d));

    d.stages[1].label.push('!');
    assert_ne!(fingerprint_source(&to_dot(&d)), base);
}

#[test]
fn display_is_32_lowercase_hex_digits() {
    let s = fingerprint_source("digraph {}\n").to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
