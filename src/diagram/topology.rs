use std::collections::HashSet;

use crate::diagram::model::{Diagram, Stage};

/// Transition endpoints that do not name any stage, in edge order.
pub fn dangling_endpoints(diagram: &Diagram) -> Vec<&str> {
    let ids: HashSet<&str> = diagram.stages.iter().map(|s| s.id.as_str()).collect();
    diagram
        .transitions
        .iter()
        .flat_map(|t| [t.from.as_str(), t.to.as_str()])
        .filter(|id| !ids.contains(id))
        .collect()
}

/// Stages in path order when the transitions form a single simple path over every stage.
///
/// Returns `None` for branches, merges, cycles, duplicate stage ids, stages left off the path,
/// or edges pointing at unknown stages.
pub fn linear_chain(diagram: &Diagram) -> Option<Vec<&Stage>> {
    if !dangling_endpoints(diagram).is_empty() {
        return None;
    }

    let mut ids = HashSet::with_capacity(diagram.stages.len());
    for stage in &diagram.stages {
        if !ids.insert(stage.id.as_str()) {
            return None;
        }
        if diagram.in_degree(&stage.id) > 1 || diagram.out_degree(&stage.id) > 1 {
            return None;
        }
    }

    let mut starts = diagram
        .stages
        .iter()
        .filter(|s| diagram.in_degree(&s.id) == 0);
    let start = starts.next()?;
    if starts.next().is_some() {
        return None;
    }

    let mut order = Vec::with_capacity(diagram.stages.len());
    let mut visited = HashSet::with_capacity(diagram.stages.len());
    let mut cur = start;
    loop {
        if !visited.insert(cur.id.as_str()) {
            return None;
        }
        order.push(cur);
        match diagram.outgoing(&cur.id).next() {
            Some(t) => cur = diagram.stage(&t.to)?,
            None => break,
        }
    }

    (order.len() == diagram.stages.len()).then_some(order)
}

#[cfg(test)]
#[path = "../../tests/unit/diagram/topology.rs"]
mod tests;
