//! Cycle extraction from ancestor chains.
//!
//! The chain walk already bounded every chain; this stage decides, per
//! class, whether the chain proves that class is on an inheritance cycle,
//! and if so materializes the minimal loop as a reportable path.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{AncestorChain, ClassName, CyclePath, CycleReport};

/// Extract a cycle path for every class whose chain returns to it.
///
/// A chain proves its own class is cyclic only when the class itself
/// recurs later in the chain; a chain that merely runs into a cycle among
/// *other* classes does not put its start class on the loop. Those other
/// classes each get their own chain and are detected from their own
/// rotation, so every member of a cyclic group is reported exactly once.
///
/// Pure function of the chains: no side effects, safe to re-run.
#[must_use]
pub fn detect_cycles(chains: &HashMap<ClassName, AncestorChain>) -> CycleReport {
    let report: CycleReport = chains
        .iter()
        .filter_map(|(class, chain)| {
            first_recurrence(class, chain).map(|j| {
                let path = chain.classes()[..=j].to_vec();
                (class.clone(), CyclePath::from_walk(path))
            })
        })
        .collect();

    if !report.is_empty() {
        debug!(cyclic_classes = report.len(), "inheritance cycles detected");
    }
    report
}

/// Index of the first recurrence of `class` in its own chain, if any.
///
/// The scan starts at index 1; index 0 is the class itself and would match
/// trivially. Only the first match matters: any later recurrence closes a
/// superset of the same loop.
fn first_recurrence(class: &ClassName, chain: &AncestorChain) -> Option<usize> {
    chain
        .classes()
        .iter()
        .skip(1)
        .position(|c| c == class)
        .map(|offset| offset + 1)
}
