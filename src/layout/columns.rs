//! Horizontal mapping of row fragments to semantic field labels.
//!
//! Column boundaries in the source documents are static per deployment, so
//! the mapping is a fixed table from a canonical `left` coordinate to a field
//! label, probed under a horizontal pixel tolerance. Fragments that miss the
//! table entirely are page furniture and are silently dropped.

use crate::fragment::Fragment;
use indexmap::IndexMap;

/// Raw field values for one row: field label → fragment text.
///
/// Labels not populated by any fragment are simply absent. When several
/// fragments in a row resolve to the same label, the later one wins.
pub type RawRow = IndexMap<String, String>;

/// Static lookup table from a canonical `left` coordinate to a field label.
///
/// Supplied as deployment configuration, one entry per known column position.
/// Several coordinates may map to the same label (column positions drifted
/// between document revisions); inserting the same coordinate twice keeps the
/// last label, matching ordinary map semantics.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: IndexMap<i32, String>,
}

impl ColumnMap {
    /// Create an empty column map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a column map from `(left, label)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use retable::ColumnMap;
    ///
    /// let map = ColumnMap::from_pairs(&[(66, "id"), (79, "id2"), (226, "name")]);
    /// assert_eq!(map.label_at(79), Some("id2"));
    /// assert_eq!(map.label_at(80), None);
    /// ```
    pub fn from_pairs(pairs: &[(i32, &str)]) -> Self {
        let mut map = Self::new();
        for (left, label) in pairs {
            map.insert(*left, *label);
        }
        map
    }

    /// Insert a coordinate → label entry. A duplicate coordinate overwrites
    /// the previous label.
    pub fn insert(&mut self, left: i32, label: impl Into<String>) {
        self.entries.insert(left, label.into());
    }

    /// Label registered at exactly this coordinate, if any.
    pub fn label_at(&self, left: i32) -> Option<&str> {
        self.entries.get(&left).map(String::as_str)
    }

    /// Number of registered coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve each fragment of a row to a field label under a horizontal
/// tolerance, producing the row's raw field values.
///
/// Fragments are visited in row order (assignment order from clustering).
/// For each fragment, `left + dev` then `left - dev` are probed for `dev` in
/// `0..=horizontal_tolerance`; the first hit binds the label to the
/// fragment's text and ends the scan for that fragment. A fragment matching
/// nothing within tolerance contributes nothing. Duplicate bindings to one
/// label are resolved by recency, not concatenation.
///
/// # Examples
///
/// ```
/// use retable::{map_columns, ColumnMap, Fragment};
///
/// let map = ColumnMap::from_pairs(&[(66, "id"), (226, "name")]);
/// let row = vec![
///     Fragment::new(100, 70, "482"),      // 4px off the id column
///     Fragment::new(100, 226, "Depot"),
///     Fragment::new(100, 400, "stray"),   // no column within tolerance
/// ];
///
/// let raw = map_columns(&row, &map, 6);
/// assert_eq!(raw.get("id").map(String::as_str), Some("482"));
/// assert_eq!(raw.get("name").map(String::as_str), Some("Depot"));
/// assert_eq!(raw.len(), 2);
/// ```
pub fn map_columns(row: &[Fragment], column_map: &ColumnMap, horizontal_tolerance: u32) -> RawRow {
    let tolerance = horizontal_tolerance as i32;
    let mut values = RawRow::new();

    for fragment in row {
        let left = fragment.left;

        for dev in 0..=tolerance {
            if let Some(label) = column_map.label_at(left + dev) {
                values.insert(label.to_string(), fragment.text.clone());
                break;
            }
            if let Some(label) = column_map.label_at(left - dev) {
                values.insert(label.to_string(), fragment.text.clone());
                break;
            }
        }
    }

    values
}
