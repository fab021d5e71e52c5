//! Vertical clustering of fragments into logical rows.
//!
//! Fragments on a page are jittered a few pixels from their true row
//! baseline. This module groups them with a first-fit scan against a growing
//! set of row anchors: each fragment joins the first existing anchor within
//! the vertical tolerance, or founds a new anchor at its own `top`.
//!
//! The scan order is a fixed tie-break and part of the contract: deviation 0
//! is tried before deviation 1, and at each deviation the positive offset is
//! tried before the equal-magnitude negative one. It decides which of two
//! near-adjacent anchors absorbs a borderline fragment, and downstream row
//! order (and therefore record order) depends on it. Anchors are never merged
//! or renumbered once created — first-fit, not best-fit.

use crate::fragment::Fragment;
use indexmap::IndexMap;

/// Fragments grouped by row anchor.
///
/// Produced by [`cluster_rows`]. Internally keyed by anchor in creation
/// order; all read-out paths return rows in ascending anchor order, which is
/// the row order for downstream processing.
#[derive(Debug, Default)]
pub struct RowClusters {
    rows: IndexMap<i32, Vec<Fragment>>,
}

impl RowClusters {
    /// Number of distinct row anchors.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows were produced.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row anchors in ascending order.
    pub fn anchors(&self) -> Vec<i32> {
        let mut anchors: Vec<i32> = self.rows.keys().copied().collect();
        anchors.sort_unstable();
        anchors
    }

    /// Fragments assigned to the given anchor, in assignment order.
    pub fn get(&self, anchor: i32) -> Option<&[Fragment]> {
        self.rows.get(&anchor).map(Vec::as_slice)
    }

    /// Consume the clusters, yielding `(anchor, fragments)` pairs in
    /// ascending anchor order.
    pub fn into_rows(self) -> Vec<(i32, Vec<Fragment>)> {
        let mut rows: Vec<(i32, Vec<Fragment>)> = self.rows.into_iter().collect();
        rows.sort_unstable_by_key(|(anchor, _)| *anchor);
        rows
    }
}

/// Cluster fragments into rows under a vertical pixel tolerance.
///
/// Fragments are processed in input order (discovery order, not position
/// order). For each fragment, anchors at `top + dev` then `top - dev` are
/// probed for `dev` in `0..=vertical_tolerance`; the first hit absorbs the
/// fragment. If nothing within tolerance exists, a new anchor is created at
/// exactly `fragment.top`.
///
/// # Arguments
///
/// * `fragments` - The page's fragments, fully materialized, in input order
/// * `vertical_tolerance` - Maximum pixel deviation from an anchor
///
/// # Examples
///
/// ```
/// use retable::{cluster_rows, Fragment};
///
/// let fragments = vec![
///     Fragment::new(100, 66, "482"),
///     Fragment::new(102, 79, "Ministry"), // within tolerance of anchor 100
///     Fragment::new(203, 226, "Building A"),
/// ];
///
/// let clusters = cluster_rows(fragments, 3);
/// assert_eq!(clusters.anchors(), vec![100, 203]);
/// assert_eq!(clusters.get(100).unwrap().len(), 2);
/// ```
pub fn cluster_rows(fragments: Vec<Fragment>, vertical_tolerance: u32) -> RowClusters {
    let tolerance = vertical_tolerance as i32;
    let mut rows: IndexMap<i32, Vec<Fragment>> = IndexMap::new();

    for fragment in fragments {
        let top = fragment.top;

        let mut anchor = None;
        for dev in 0..=tolerance {
            if rows.contains_key(&(top + dev)) {
                anchor = Some(top + dev);
                break;
            }
            if rows.contains_key(&(top - dev)) {
                anchor = Some(top - dev);
                break;
            }
        }

        rows.entry(anchor.unwrap_or(top)).or_default().push(fragment);
    }

    RowClusters { rows }
}
