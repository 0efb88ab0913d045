use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    diagram::model::Diagram,
    dot::{
        fingerprint::{SourceFingerprint, fingerprint_source},
        writer::to_dot,
    },
    foundation::error::{RenderResult, RenderingError},
    render::{
        engine::{GraphvizCli, RenderEngine},
        format::{LayoutEngine, OutputFormat},
    },
};

/// Options for [`render_with`].
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Where the DOT source is written. The image lands next to it with the format extension
    /// appended.
    pub output_path: PathBuf,
    /// Requested image format.
    pub format: OutputFormat,
    /// Graphviz layout program.
    pub layout: LayoutEngine,
    /// Delete the DOT source after a successful render. Off by default so the source can be
    /// inspected or re-rendered by hand.
    pub cleanup: bool,
}

impl RenderConfig {
    /// Config rendering `format` next to `output_path`, keeping the source.
    pub fn new(output_path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_path: output_path.into(),
            format,
            layout: LayoutEngine::default(),
            cleanup: false,
        }
    }

    /// Override the layout program.
    pub fn with_layout(mut self, layout: LayoutEngine) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable removal of the DOT source.
    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Path of the rendered image.
    pub fn image_path(&self) -> PathBuf {
        image_path_for(&self.output_path, self.format)
    }
}

/// Artifacts produced by a successful render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDiagram {
    /// Rendered image.
    pub image_path: PathBuf,
    /// Retained DOT source, `None` when cleanup removed it.
    pub source_path: Option<PathBuf>,
    /// Fingerprint of the DOT source handed to the engine.
    pub fingerprint: SourceFingerprint,
    /// Pixel size for raster formats.
    pub dimensions: Option<(u32, u32)>,
}

/// Append `.<ext>` to the full file name of `output_path`.
///
/// `/tmp/out` becomes `/tmp/out.png` and `/tmp/out.v1` becomes `/tmp/out.v1.png`.
pub fn image_path_for(output_path: &Path, format: OutputFormat) -> PathBuf {
    let mut name = OsString::from(output_path.as_os_str());
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Staging file the engine renders into: `<output_path>.partial.<ext>`.
///
/// Keeps the real extension so raster verification can pick the decoder from it.
fn staging_path_for(output_path: &Path, format: OutputFormat) -> PathBuf {
    let mut name = OsString::from(output_path.as_os_str());
    name.push(".partial.");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> RenderResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderingError::io(parent, e))?;
    }
    Ok(())
}

/// Render `diagram` with the system `dot` into `output_path` + `.<format>`.
///
/// The DOT source is written to `output_path` itself and retained.
pub fn render(
    diagram: &Diagram,
    output_path: impl Into<PathBuf>,
    format: OutputFormat,
) -> RenderResult<RenderedDiagram> {
    render_with(
        diagram,
        &RenderConfig::new(output_path, format),
        &GraphvizCli::default(),
    )
}

/// Render `diagram` according to `cfg` using `engine`.
///
/// The engine writes to a staging file next to the image, which replaces the image only after
/// it verifies. A failed render leaves any image from an earlier run untouched.
#[tracing::instrument(skip(diagram, engine), fields(engine = %engine.name()))]
pub fn render_with(
    diagram: &Diagram,
    cfg: &RenderConfig,
    engine: &dyn RenderEngine,
) -> RenderResult<RenderedDiagram> {
    let source = to_dot(diagram);
    let fingerprint = fingerprint_source(&source);
    let source_path = cfg.output_path.as_path();
    let image_path = cfg.image_path();

    ensure_parent_dir(source_path)?;
    std::fs::write(source_path, &source).map_err(|e| RenderingError::io(source_path, e))?;
    tracing::debug!(
        path = %source_path.display(),
        bytes = source.len(),
        %fingerprint,
        "wrote dot source"
    );

    let staging_path = staging_path_for(&cfg.output_path, cfg.format);
    if let Err(e) = engine.render_file(source_path, &staging_path, cfg.format, cfg.layout) {
        remove_partial(&staging_path);
        return Err(e);
    }

    let dimensions = match verify_image(&staging_path, cfg.format) {
        Ok(d) => d,
        Err(e) => {
            remove_partial(&staging_path);
            return Err(e);
        }
    };

    if let Err(e) = std::fs::rename(&staging_path, &image_path) {
        remove_partial(&staging_path);
        return Err(RenderingError::io(&image_path, e));
    }

    let source_path = if cfg.cleanup {
        std::fs::remove_file(source_path).map_err(|e| RenderingError::io(source_path, e))?;
        None
    } else {
        Some(source_path.to_path_buf())
    };

    tracing::info!(
        image = %image_path.display(),
        ?dimensions,
        retained_source = source_path.is_some(),
        "rendered diagram"
    );

    Ok(RenderedDiagram {
        image_path,
        source_path,
        fingerprint,
        dimensions,
    })
}

fn verify_image(image_path: &Path, format: OutputFormat) -> RenderResult<Option<(u32, u32)>> {
    let meta = std::fs::metadata(image_path).map_err(|e| {
        RenderingError::invalid_output(format!(
            "engine produced no image at '{}': {e}",
            image_path.display()
        ))
    })?;
    if meta.len() == 0 {
        return Err(RenderingError::invalid_output(format!(
            "engine produced an empty image at '{}'",
            image_path.display()
        )));
    }

    if !format.is_raster() {
        return Ok(None);
    }

    let dims = image::image_dimensions(image_path).map_err(|e| {
        RenderingError::invalid_output(format!(
            "cannot decode {format} image '{}': {e}",
            image_path.display()
        ))
    })?;
    Ok(Some(dims))
}

fn remove_partial(image_path: &Path) {
    match std::fs::remove_file(image_path) {
        Ok(()) => tracing::debug!(path = %image_path.display(), "removed partial image"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %image_path.display(), error = %e, "failed to remove partial image")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/graphviz.rs"]
mod tests;
