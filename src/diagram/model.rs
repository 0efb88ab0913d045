use serde::{Deserialize, Serialize};

/// One labeled step of a pipeline diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Short node key used in the DOT source (e.g. `C_T`).
    pub id: String,
    /// Human-readable label drawn inside the node.
    pub label: String,
}

impl Stage {
    /// Create a stage from an id and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Directed edge: the output of `from` feeds the input of `to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Source stage id.
    pub from: String,
    /// Destination stage id.
    pub to: String,
}

impl Transition {
    /// Create a transition between two stage ids.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Graphviz `rankdir` layout hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    /// Left to right.
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    /// Top to bottom.
    #[serde(rename = "TB")]
    TopToBottom,
    /// Right to left.
    #[serde(rename = "RL")]
    RightToLeft,
    /// Bottom to top.
    #[serde(rename = "BT")]
    BottomToTop,
}

impl RankDir {
    /// Value of the DOT `rankdir` attribute.
    pub fn as_dot(self) -> &'static str {
        match self {
            RankDir::LeftToRight => "LR",
            RankDir::TopToBottom => "TB",
            RankDir::RightToLeft => "RL",
            RankDir::BottomToTop => "BT",
        }
    }
}

/// Graph description handed to the rendering engine.
///
/// Stages and transitions keep insertion order; the DOT writer emits them in that order so
/// equal diagrams always serialize to identical source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// Free-form comment written as the first line of the DOT source. Empty means none.
    pub comment: String,
    /// Layout direction hint.
    pub rankdir: RankDir,
    /// Nodes, in declaration order.
    pub stages: Vec<Stage>,
    /// Directed edges, in declaration order.
    pub transitions: Vec<Transition>,
}

impl Diagram {
    /// Look up a stage by id.
    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Look up a stage by its display label.
    pub fn stage_by_label(&self, label: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.label == label)
    }

    /// Transitions leaving stage `id`.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.iter().filter(move |t| t.from == id)
    }

    /// Transitions entering stage `id`.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.iter().filter(move |t| t.to == id)
    }

    /// Number of transitions leaving stage `id`.
    pub fn out_degree(&self, id: &str) -> usize {
        self.outgoing(id).count()
    }

    /// Number of transitions entering stage `id`.
    pub fn in_degree(&self, id: &str) -> usize {
        self.incoming(id).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/model.rs"]
mod tests;
