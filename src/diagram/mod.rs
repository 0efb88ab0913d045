//! Pipeline graph description: value types, the fixed triangle pipeline, and shape queries.

/// Stage, transition and diagram value types.
pub mod model;
/// The fixed triangle transformation pipeline.
pub mod pipeline;
/// Degree and linear-chain queries over a diagram.
pub mod topology;
