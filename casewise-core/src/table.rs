//! Ordered, name-unique tables.
//!
//! [`Table`] is the one data structure shared by case tables and handler
//! tables: an ordered sequence of `(name, value)` entries where names are
//! unique and iteration order is insertion order. Lookup is by name;
//! ordering only matters for case tables, but keeping one shape means
//! [`Table::merge`] works identically for both.

use std::fmt;

/// An ordered collection of named entries with unique names.
///
/// Writing an existing name replaces its value but keeps its position;
/// appending a new name places it after all existing entries. Once built,
/// tables are treated as immutable snapshots — layering is done with
/// [`Table::merge`], which always produces a new table.
pub struct Table<V> {
    entries: Vec<(String, V)>,
}

impl<V> Table<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an entry, last write wins.
    ///
    /// A name already present keeps its position in iteration order; only
    /// its value is replaced. A new name is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by exact name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Entry names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Table<V> {
    /// Combine a base table with an override table into a new table.
    ///
    /// For every name in `overrides` that exists in `self`, the value is
    /// replaced but its position in the resulting order is unchanged.
    /// Names new to `overrides` are appended, in the override's own
    /// relative order, after all base entries. Neither input is mutated;
    /// `base.merge(&Table::new())` is equal to `base`.
    pub fn merge(&self, overrides: &Self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + overrides.entries.len());
        for (name, value) in &self.entries {
            let value = overrides.get(name).unwrap_or(value);
            entries.push((name.clone(), value.clone()));
        }
        for (name, value) in &overrides.entries {
            if !self.contains(name) {
                entries.push((name.clone(), value.clone()));
            }
        }
        Self { entries }
    }
}

impl<V: Clone> Clone for Table<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Values are typically boxed closures, so only names are printable.
impl<V> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
