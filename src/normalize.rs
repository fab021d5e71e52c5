//! Raw row → typed record normalization.
//!
//! Source cells are inconsistent across columns: values bleed into adjacent
//! cells, so several columns carry two logical values in one cell ("2014
//! Bratislava", "1 234,56 789/4"). Normalization splits those compounds into
//! their paired output fields, nulls placeholder cells, and parses the
//! identifier cell — rejecting the row when the identifier is structurally
//! unrecognizable.

use crate::layout::columns::RawRow;
use crate::profile::{CompoundKind, FieldRule, Profile};
use crate::record::{FieldValue, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_ALL_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
    static ref RE_ID_NAME: Regex = Regex::new(r"^(\d+)\s(.*)$").unwrap();
    static ref RE_YEAR_REST: Regex = Regex::new(r"^(\d{4}) (.*)$").unwrap();
    static ref RE_YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
    static ref RE_QUANTITY_REST: Regex = Regex::new(r"^([\d ]+,\d+) (.*)$").unwrap();
    static ref RE_QUANTITY: Regex = Regex::new(r"^[\d ]+,\d+$").unwrap();
}

/// Normalize one accepted raw row into a [`Record`].
///
/// Returns `None` on structural reject: the identifier cell is neither pure
/// digits nor digits-space-name. Rejects are row-local; the caller counts
/// them and moves on.
///
/// Semantics:
/// - pure-digit identifier → `id` parsed, organization taken from the
///   secondary label (when bound);
/// - "482 Ministry of X" → `id = 482`, organization "Ministry of X";
/// - every rule of the profile is then applied in order; later rules
///   overwrite earlier bindings (see [`FieldRule`]).
pub fn normalize_row(raw: &RawRow, profile: &Profile) -> Option<Record> {
    let id_raw = raw
        .get(&profile.id_label)
        .map(String::as_str)
        .unwrap_or("");

    let (id, organization) = if RE_ALL_DIGITS.is_match(id_raw) {
        let id = id_raw.parse::<i64>().ok()?;
        (id, raw.get(&profile.secondary_id_label).cloned())
    } else if let Some(caps) = RE_ID_NAME.captures(id_raw) {
        let id = caps[1].parse::<i64>().ok()?;
        (id, Some(caps[2].to_string()))
    } else {
        return None;
    };

    let mut record = Record::new(id, &profile.fields);
    if let Some(organization) = organization {
        record.set(&profile.organization_field, FieldValue::Text(organization));
    }

    for rule in &profile.rules {
        apply_rule(rule, raw, &mut record);
    }

    Some(record)
}

fn apply_rule(rule: &FieldRule, raw: &RawRow, record: &mut Record) {
    match rule {
        FieldRule::Copy {
            label,
            field,
            dash_is_null,
            trim,
        } => {
            if let Some(value) = raw.get(label) {
                if *dash_is_null && value == "-" {
                    record.clear(field);
                } else if *trim {
                    record.set(field, FieldValue::Text(value.trim().to_string()));
                } else {
                    record.set(field, FieldValue::Text(value.clone()));
                }
            }
        },
        FieldRule::Compound {
            label,
            field,
            rest_field,
            kind,
        } => {
            if let Some(value) = raw.get(label) {
                split_compound(*kind, value, field, rest_field, record);
            }
        },
    }
}

/// Split a compound cell value.
///
/// Token-plus-remainder populates both paired fields; a bare token populates
/// only the compound field; anything else is discarded for both fields — a
/// deliberate lossy fallback, not an error.
fn split_compound(
    kind: CompoundKind,
    value: &str,
    field: &str,
    rest_field: &str,
    record: &mut Record,
) {
    match kind {
        CompoundKind::Year => {
            if let Some(caps) = RE_YEAR_REST.captures(value) {
                if let Ok(year) = caps[1].parse::<i64>() {
                    record.set(field, FieldValue::Int(year));
                    record.set(rest_field, FieldValue::Text(caps[2].to_string()));
                }
            } else if RE_YEAR.is_match(value) {
                if let Ok(year) = value.parse::<i64>() {
                    record.set(field, FieldValue::Int(year));
                }
            }
        },
        CompoundKind::Quantity => {
            if let Some(caps) = RE_QUANTITY_REST.captures(value) {
                record.set(field, FieldValue::Text(caps[1].to_string()));
                record.set(rest_field, FieldValue::Text(caps[2].to_string()));
            } else if RE_QUANTITY.is_match(value) {
                record.set(field, FieldValue::Text(value.to_string()));
            }
        },
    }
}
