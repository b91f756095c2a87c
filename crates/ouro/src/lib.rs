//! # Ouro: Cyclic-Inheritance Detection
//!
//! Ouro finds *cyclic inheritance* — chains of `extends` relationships that
//! loop back on themselves — in class hierarchies extracted from source
//! corpora. Valid compiled code cannot contain such loops, but malformed,
//! generated, or inconsistently-snapshotted sources can, and a naive walk
//! up the hierarchy would never terminate on one.
//!
//! ## Design Philosophy
//!
//! - **Detector, not extractor** - parsing, namespace resolution, and class
//!   classification are upstream concerns; Ouro consumes a flat
//!   class → parent table
//! - **Total over its input** - the guarded walk terminates on any table,
//!   cycles included; traversal itself cannot fail
//! - **Two pure stages** - chain construction and cycle extraction are
//!   separate, side-effect-free, and individually reusable
//! - **Embeddable** - Library first, CLI second
//!
//! ## Quick Start
//!
//! ```
//! use ouro::{ClassName, RelationshipTable};
//!
//! let table = RelationshipTable::from_entries([
//!     (ClassName::from("app.A"), Some(ClassName::from("app.B"))),
//!     (ClassName::from("app.B"), Some(ClassName::from("app.A"))),
//!     (ClassName::from("app.C"), None),
//! ])?;
//!
//! let report = ouro::analyze(&table);
//! for (class, path) in report.iter() {
//!     println!("{class} is in a cycle: {path}");
//! }
//! assert_eq!(report.len(), 2);
//! # Ok::<(), ouro::Error>(())
//! ```

mod cycles;
mod error;
mod hierarchy;
mod table;
mod types;

pub use cycles::detect_cycles;
pub use error::{Error, Result};
pub use hierarchy::build_chains;
pub use table::RelationshipTable;
pub use types::{AncestorChain, ClassName, CyclePath, CycleReport};

/// Run both stages: build every ancestor chain, then extract the cycles.
///
/// Convenience for callers that only want the report; use
/// [`build_chains`] and [`detect_cycles`] separately to also inspect the
/// chains themselves.
#[must_use]
pub fn analyze(table: &RelationshipTable) -> CycleReport {
    let chains = build_chains(table);
    detect_cycles(&chains)
}
