//! Data-row validity filtering.
//!
//! The identifier column is the only column present in every genuine data
//! row. Organization names either share the identifier's cell ("482 Ministry
//! of Finance") or occupy the adjacent dedicated label, so the identifier
//! cell alone discriminates data rows from headers, blank bands and page
//! furniture.

use crate::layout::columns::RawRow;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One or more digits, a single space, then at least one non-digit
    static ref RE_ID_WITH_NAME: Regex = Regex::new(r"^\d+ \D.*").unwrap();

    /// Pure digits
    static ref RE_ID_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Decide whether a raw row is a genuine data row.
///
/// Accepts when the value under `id_label` is digits-space-name, or is pure
/// digits while `secondary_id_label` is also bound in the row. Everything
/// else is noise and should be counted as rejected.
///
/// # Examples
///
/// ```
/// use retable::{is_valid_row, RawRow};
///
/// let mut raw = RawRow::new();
/// raw.insert("ID".to_string(), "482 Ministry of Finance".to_string());
/// assert!(is_valid_row(&raw, "ID", "ID2"));
///
/// let mut header = RawRow::new();
/// header.insert("ID".to_string(), "Property register".to_string());
/// assert!(!is_valid_row(&header, "ID", "ID2"));
/// ```
pub fn is_valid_row(raw: &RawRow, id_label: &str, secondary_id_label: &str) -> bool {
    let id = raw.get(id_label).map(String::as_str).unwrap_or("");

    RE_ID_WITH_NAME.is_match(id)
        || (RE_ID_ONLY.is_match(id) && raw.contains_key(secondary_id_label))
}
