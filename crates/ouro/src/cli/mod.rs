//! CLI command implementations.

pub mod chains;
pub mod check;

use std::path::Path;

use ouro::RelationshipTable;

/// Load a relationship table from a path, or from stdin when the path
/// is `-`.
pub fn load_table(path: &Path) -> Result<RelationshipTable, ouro::Error> {
    if path == Path::new("-") {
        RelationshipTable::from_json_reader(std::io::stdin().lock())
    } else {
        RelationshipTable::from_json_file(path)
    }
}
