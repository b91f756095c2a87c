//! The class → immediate-parent relationship table.
//!
//! The table is the input boundary of the whole analysis: an upstream
//! extraction step has already parsed the source tree, resolved namespaces,
//! classified declarations, and emitted one `(class, parent-or-none)` pair
//! per class declaration. Ouro validates that contract here, once, and the
//! table is immutable afterward.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ClassName;

/// Immutable mapping from class name to immediate parent.
///
/// `None` means the class has no class-kind parent: a root class, or a
/// class whose only declared parents are interfaces. A parent that is not
/// itself a key of the table (an external library class) is legal and is
/// treated like `None` during traversal.
#[derive(Debug, Clone, Default)]
pub struct RelationshipTable {
    parents: HashMap<ClassName, Option<ClassName>>,
}

impl RelationshipTable {
    /// Build a table from `(class, parent)` entries, validating the
    /// extraction contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Table`] if a class or parent name is empty or
    /// blank, or if the same class appears twice with different parents.
    /// A duplicate entry that agrees with the earlier one is tolerated.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ClassName, Option<ClassName>)>,
    ) -> Result<Self> {
        let mut parents = HashMap::new();
        for (class, parent) in entries {
            validate_name(&class)?;
            if let Some(parent) = &parent {
                validate_name(parent)?;
            }
            if let Some(existing) = parents.get(&class) {
                if existing != &parent {
                    return Err(Error::Table(format!(
                        "class {class} declared with conflicting parents"
                    )));
                }
                continue;
            }
            parents.insert(class, parent);
        }
        debug!(classes = parents.len(), "relationship table built");
        Ok(Self { parents })
    }

    /// Parse a table from JSON text of the form
    /// `{ "pkg.Class": "pkg.Parent" | null, ... }`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and [`Error::Table`] for
    /// contract violations.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Option<String>> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a table from a JSON reader (a file, stdin, a socket).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and [`Error::Table`] for
    /// contract violations.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: BTreeMap<String, Option<String>> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a table from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, plus the
    /// [`Self::from_json_reader`] errors.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    fn from_raw(raw: BTreeMap<String, Option<String>>) -> Result<Self> {
        Self::from_entries(
            raw.into_iter()
                .map(|(class, parent)| (ClassName::from(class), parent.map(ClassName::from))),
        )
    }

    /// The immediate parent of `class`, if the table knows one.
    ///
    /// Returns `None` both for a class with an explicit no-parent entry and
    /// for a name that is not a key of the table; the traversal treats the
    /// two identically.
    #[must_use]
    pub fn parent_of(&self, class: &ClassName) -> Option<&ClassName> {
        self.parents.get(class).and_then(Option::as_ref)
    }

    /// Whether `class` has an entry in the table.
    #[must_use]
    pub fn contains(&self, class: &ClassName) -> bool {
        self.parents.contains_key(class)
    }

    /// Number of classes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterate over every class with an entry in the table.
    pub fn classes(&self) -> impl Iterator<Item = &ClassName> {
        self.parents.keys()
    }
}

fn validate_name(name: &ClassName) -> Result<()> {
    if name.as_str().trim().is_empty() {
        return Err(Error::Table("empty class name".to_string()));
    }
    Ok(())
}
