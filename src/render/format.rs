use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Image format requested from the rendering engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// Scalable Vector Graphics.
    Svg,
    /// Portable Document Format.
    Pdf,
    /// JPEG raster.
    Jpeg,
    /// GIF raster.
    Gif,
}

impl OutputFormat {
    /// Graphviz `-T` output format name.
    pub fn graphviz_name(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Gif => "gif",
        }
    }

    /// File extension appended to the output path.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            other => other.graphviz_name(),
        }
    }

    /// Whether the output is a pixel image that can be decoded for verification.
    pub fn is_raster(self) -> bool {
        matches!(
            self,
            OutputFormat::Png | OutputFormat::Jpeg | OutputFormat::Gif
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphviz_name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "gif" => Ok(OutputFormat::Gif),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Graphviz layout program, selected with `-K`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Hierarchical layout (the default).
    #[default]
    Dot,
    /// Spring model.
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Multiscale force-directed placement.
    Sfdp,
    /// Circular layout.
    Circo,
    /// Radial layout.
    Twopi,
}

impl LayoutEngine {
    /// Graphviz `-K` layout name.
    pub fn graphviz_name(self) -> &'static str {
        match self {
            LayoutEngine::Dot => "dot",
            LayoutEngine::Neato => "neato",
            LayoutEngine::Fdp => "fdp",
            LayoutEngine::Sfdp => "sfdp",
            LayoutEngine::Circo => "circo",
            LayoutEngine::Twopi => "twopi",
        }
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphviz_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/format.rs"]
mod tests;
