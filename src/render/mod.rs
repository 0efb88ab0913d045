//! Rendering through an external layout engine.
//!
//! The DOT source is written next to the image and kept unless cleanup is requested.

/// Engine trait and the system Graphviz implementation.
pub mod engine;
/// Output image formats and layout programs.
pub mod format;
/// Source write, engine invocation and output verification.
pub mod graphviz;
