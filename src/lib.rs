//! Renders the 3D triangle transformation pipeline as a Graphviz diagram.
//!
//! The pipeline is fixed: model vertex, scale, rotate, translate, world vertex, translate to
//! camera center, camera rotate, project, projected vertex. Nothing here lays out or rasterizes
//! graphs; that work is delegated to the system `dot` executable.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`build`] returns the pipeline as a plain [`Diagram`] value.
//! 2. **Serialize**: [`to_dot`] turns a `Diagram` into DOT source text.
//! 3. **Render**: [`render`] writes the source to the output path, runs the engine, and checks
//!    the image at `<output path>.<ext>`.
//!
//! The DOT source is retained next to the image unless [`RenderConfig::cleanup`] is set.
//!
//! ```no_run
//! let diagram = pipeline_diagram::build();
//! let out = pipeline_diagram::render(
//!     &diagram,
//!     "/tmp/triangle_pipeline",
//!     pipeline_diagram::OutputFormat::Png,
//! )?;
//! println!("wrote {}", out.image_path.display());
//! # Ok::<(), pipeline_diagram::RenderingError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod diagram;
mod dot;
mod foundation;
mod render;

pub use diagram::model::{Diagram, RankDir, Stage, Transition};
pub use diagram::pipeline::{PIPELINE_COMMENT, build};
pub use diagram::topology::{dangling_endpoints, linear_chain};
pub use dot::fingerprint::{SourceFingerprint, fingerprint_source};
pub use dot::writer::{quote_id, quote_string, to_dot};
pub use foundation::error::{RenderResult, RenderingError};
pub use render::engine::{GraphvizCli, RenderEngine, is_engine_on_path};
pub use render::format::{LayoutEngine, OutputFormat};
pub use render::graphviz::{
    RenderConfig, RenderedDiagram, ensure_parent_dir, image_path_for, render, render_with,
};
