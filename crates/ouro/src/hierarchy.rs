//! Ancestor-chain construction.
//!
//! Expands every class's one-hop parent pointer into its full ancestor
//! chain. The walk must not assume the table is cycle-free: a malformed or
//! inconsistently-snapshotted corpus can contain inheritance loops, and a
//! naive climb up the chain would never terminate on one. A set of
//! already-visited names guards each walk, so every chain has at most
//! `table.len() + 1` elements.
//!
//! Chains are independent per class and the table is read-only, so all
//! walks run in parallel with rayon.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use crate::table::RelationshipTable;
use crate::types::{AncestorChain, ClassName};

/// Compute the ancestor chain of every class in `table`.
///
/// Pure function of the table: no side effects, safe to re-run.
#[must_use]
pub fn build_chains(table: &RelationshipTable) -> HashMap<ClassName, AncestorChain> {
    let classes: Vec<&ClassName> = table.classes().collect();
    let chains: HashMap<ClassName, AncestorChain> = classes
        .par_iter()
        .map(|&class| (class.clone(), walk_chain(table, class)))
        .collect();

    debug!(
        classes = chains.len(),
        cyclic = chains.values().filter(|c| c.closes_cycle()).count(),
        "ancestor chains built"
    );
    chains
}

/// Follow parent pointers from `start` until a class has no known parent
/// or a class already on the chain recurs.
///
/// The recurring class stays on the chain as its final element; that is
/// the cycle-closure point the detector looks for later. A parent name
/// with no table entry of its own ends the walk the same way a no-parent
/// entry does.
fn walk_chain<'t>(table: &'t RelationshipTable, start: &'t ClassName) -> AncestorChain {
    let mut chain = vec![start.clone()];
    let mut seen: HashSet<&ClassName> = HashSet::from([start]);
    let mut current = start;

    while let Some(next) = table.parent_of(current) {
        chain.push(next.clone());
        if !seen.insert(next) {
            break;
        }
        current = next;
    }

    AncestorChain::from_walk(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, Option<&str>)]) -> RelationshipTable {
        RelationshipTable::from_entries(
            entries
                .iter()
                .map(|(c, p)| (ClassName::from(*c), p.map(ClassName::from))),
        )
        .expect("valid test table")
    }

    fn chain_of<'a>(
        chains: &'a HashMap<ClassName, AncestorChain>,
        class: &str,
    ) -> Vec<&'a str> {
        chains[&ClassName::from(class)]
            .classes()
            .iter()
            .map(ClassName::as_str)
            .collect()
    }

    #[test]
    fn builds_chain_for_every_class() {
        let chains = build_chains(&table(&[("A", Some("B")), ("B", None)]));
        assert_eq!(chains.len(), 2);
        assert_eq!(chain_of(&chains, "A"), vec!["A", "B"]);
        assert_eq!(chain_of(&chains, "B"), vec!["B"]);
    }

    #[test]
    fn chain_stops_at_parent_without_table_entry() {
        // B has no entry at all (external library class)
        let chains = build_chains(&table(&[("A", Some("B"))]));
        assert_eq!(chains.len(), 1);
        assert_eq!(chain_of(&chains, "A"), vec!["A", "B"]);
        assert!(!chains[&ClassName::from("A")].closes_cycle());
    }

    #[test]
    fn self_parent_yields_two_element_chain() {
        let chains = build_chains(&table(&[("A", Some("A"))]));
        assert_eq!(chain_of(&chains, "A"), vec!["A", "A"]);
        assert!(chains[&ClassName::from("A")].closes_cycle());
    }

    #[test]
    fn cycle_walk_terminates_with_closure_element() {
        let chains = build_chains(&table(&[
            ("A", Some("B")),
            ("B", Some("C")),
            ("C", Some("A")),
        ]));

        assert_eq!(chain_of(&chains, "A"), vec!["A", "B", "C", "A"]);
        assert_eq!(chain_of(&chains, "B"), vec!["B", "C", "A", "B"]);
        assert_eq!(chain_of(&chains, "C"), vec!["C", "A", "B", "C"]);
    }

    #[test]
    fn tail_into_cycle_closes_on_cycle_member_not_start() {
        // D hangs off the A-B cycle; its walk re-meets B, not D
        let chains = build_chains(&table(&[
            ("A", Some("B")),
            ("B", Some("A")),
            ("D", Some("B")),
        ]));

        assert_eq!(chain_of(&chains, "D"), vec!["D", "B", "A", "B"]);
        assert!(chains[&ClassName::from("D")].closes_cycle());
    }

    #[test]
    fn chain_length_is_bounded_by_table_size_plus_one() {
        // One long path ending in a self-loop exercises the worst case
        let entries: Vec<(String, Option<String>)> = (0..50)
            .map(|i| (format!("C{i}"), Some(format!("C{}", (i + 1).min(49)))))
            .collect();
        let table = RelationshipTable::from_entries(
            entries
                .into_iter()
                .map(|(c, p)| (ClassName::from(c), p.map(ClassName::from))),
        )
        .expect("valid test table");

        let chains = build_chains(&table);
        for chain in chains.values() {
            assert!(
                chain.len() <= table.len() + 1,
                "chain for {} exceeds bound: {}",
                chain.start(),
                chain.len()
            );
        }
    }

    #[test]
    fn empty_table_yields_no_chains() {
        let chains = build_chains(&table(&[]));
        assert!(chains.is_empty());
    }
}
