/// Source fingerprinting.
pub mod fingerprint;
/// Graphviz DOT serialization.
pub mod writer;
