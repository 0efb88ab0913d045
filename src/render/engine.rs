use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    foundation::error::{RenderResult, RenderingError},
    render::format::{LayoutEngine, OutputFormat},
};

/// External program that turns a DOT source file into an image.
///
/// Most users never call this directly; [`crate::render`] writes the source, drives the engine
/// and verifies the result.
pub trait RenderEngine {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Render the DOT file at `source` into `image`.
    ///
    /// Implementations must not delete `source`.
    fn render_file(
        &self,
        source: &Path,
        image: &Path,
        format: OutputFormat,
        layout: LayoutEngine,
    ) -> RenderResult<()>;
}

/// Engine backed by the system Graphviz `dot` executable.
#[derive(Clone, Debug)]
pub struct GraphvizCli {
    executable: PathBuf,
    name: String,
}

impl Default for GraphvizCli {
    fn default() -> Self {
        Self::with_executable("dot")
    }
}

impl GraphvizCli {
    /// Use a specific Graphviz executable. Resolved through `PATH` when not absolute.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        let executable = executable.into();
        let name = executable.display().to_string();
        Self { executable, name }
    }

    /// Executable this engine spawns.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub(crate) fn command_args(
        source: &Path,
        image: &Path,
        format: OutputFormat,
        layout: LayoutEngine,
    ) -> Vec<OsString> {
        vec![
            format!("-K{}", layout.graphviz_name()).into(),
            format!("-T{}", format.graphviz_name()).into(),
            "-o".into(),
            image.as_os_str().to_owned(),
            source.as_os_str().to_owned(),
        ]
    }
}

impl RenderEngine for GraphvizCli {
    fn name(&self) -> &str {
        &self.name
    }

    fn render_file(
        &self,
        source: &Path,
        image: &Path,
        format: OutputFormat,
        layout: LayoutEngine,
    ) -> RenderResult<()> {
        let args = Self::command_args(source, image, format, layout);
        tracing::debug!(engine = %self.name(), ?args, "spawning rendering engine");

        let output = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    RenderingError::engine_not_found(self.name(), e.to_string())
                }
                _ => RenderingError::Other(anyhow::Error::new(e).context(format!(
                    "failed to run rendering engine '{}'",
                    self.name()
                ))),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderingError::EngineFailed {
                engine: self.name.clone(),
                status: output.status,
                stderr: stderr.trim_end().to_string(),
            });
        }

        Ok(())
    }
}

/// Check whether `executable` runs (`<executable> -V` exits successfully).
pub fn is_engine_on_path(executable: impl AsRef<Path>) -> bool {
    Command::new(executable.as_ref())
        .arg("-V")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
