use crate::diagram::model::{Diagram, RankDir, Stage, Transition};

/// Comment line emitted at the top of the pipeline's DOT source.
pub const PIPELINE_COMMENT: &str = "Triangle Transformation Pipeline";

const STAGES: [(&str, &str); 9] = [
    ("M", "Model Vertex (v0, v1, v2)"),
    ("S", "Scale"),
    ("R", "Rotate (Model Rotation)"),
    ("T", "Translate (Model Position)"),
    ("W", "World Vertex"),
    ("C_T", "Translate to Camera Center (p - C)"),
    ("C_R", "Rotate (Camera R^T)"),
    ("Proj", "Project (x*f/z, y*f/z)"),
    ("P", "Projected Triangle Vertex"),
];

const TRANSITIONS: [(&str, &str); 8] = [
    ("M", "S"),
    ("S", "R"),
    ("R", "T"),
    ("T", "W"),
    ("W", "C_T"),
    ("C_T", "C_R"),
    ("C_R", "Proj"),
    ("Proj", "P"),
];

/// Build the triangle transformation pipeline diagram.
///
/// Model space → world space → camera space → screen projection, laid out left to right.
/// The data is literal, so this cannot fail and every call returns an equal value.
pub fn build() -> Diagram {
    Diagram {
        comment: PIPELINE_COMMENT.to_string(),
        rankdir: RankDir::LeftToRight,
        stages: STAGES
            .iter()
            .map(|(id, label)| Stage::new(*id, *label))
            .collect(),
        transitions: TRANSITIONS
            .iter()
            .map(|(from, to)| Transition::new(*from, *to))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/pipeline.rs"]
mod tests;
