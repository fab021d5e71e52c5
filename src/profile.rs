//! Deployment configuration: column maps, tolerances and field rules.
//!
//! Each document type the engine handles is described by one [`Profile`] —
//! data, not code branches. A profile carries the static column map, the
//! pixel tolerances tuned for that deployment, the output schema, and the
//! ordered list of [`FieldRule`]s that turn a raw row into a record.

use crate::error::{Error, Result};
use crate::layout::columns::ColumnMap;

/// The shape of the leading token in a compound cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundKind {
    /// A 4-digit year (stored as an integer)
    Year,
    /// A decimal quantity with space thousands-separators, e.g. "1 234,56"
    /// (stored verbatim as text)
    Quantity,
}

/// One normalization rule, applied in profile order.
///
/// Later rules overwrite bindings made by earlier ones; that ordering is how
/// precedences such as "the dedicated manager column overrides the value
/// derived from the year split" are expressed.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Copy the raw value bound to `label` into `field`, when present.
    Copy {
        /// Source raw label
        label: String,
        /// Target schema field
        field: String,
        /// Treat a bare `"-"` as "not applicable" and null the field
        dash_is_null: bool,
        /// Trim surrounding whitespace before storing
        trim: bool,
    },
    /// Split a compound raw value into a leading structured token (bound to
    /// `field`) and a trailing free-text remainder (bound to `rest_field`).
    ///
    /// When only the token shape matches the whole value, `field` is set and
    /// `rest_field` stays unset. When neither matches, the value is discarded
    /// for both fields.
    Compound {
        /// Source raw label
        label: String,
        /// Target schema field for the leading token
        field: String,
        /// Paired schema field for the remainder
        rest_field: String,
        /// Shape of the leading token
        kind: CompoundKind,
    },
}

impl FieldRule {
    /// Plain verbatim copy.
    pub fn copy(label: &str, field: &str) -> Self {
        FieldRule::Copy {
            label: label.to_string(),
            field: field.to_string(),
            dash_is_null: false,
            trim: false,
        }
    }

    /// Copy that normalizes the bare `"-"` placeholder to null.
    pub fn copy_dash_null(label: &str, field: &str) -> Self {
        FieldRule::Copy {
            label: label.to_string(),
            field: field.to_string(),
            dash_is_null: true,
            trim: false,
        }
    }

    /// Copy that trims surrounding whitespace.
    pub fn copy_trimmed(label: &str, field: &str) -> Self {
        FieldRule::Copy {
            label: label.to_string(),
            field: field.to_string(),
            dash_is_null: false,
            trim: true,
        }
    }

    /// Year + free-text compound split.
    pub fn year_split(label: &str, field: &str, rest_field: &str) -> Self {
        FieldRule::Compound {
            label: label.to_string(),
            field: field.to_string(),
            rest_field: rest_field.to_string(),
            kind: CompoundKind::Year,
        }
    }

    /// Quantity + free-text compound split.
    pub fn quantity_split(label: &str, field: &str, rest_field: &str) -> Self {
        FieldRule::Compound {
            label: label.to_string(),
            field: field.to_string(),
            rest_field: rest_field.to_string(),
            kind: CompoundKind::Quantity,
        }
    }

    fn target_fields(&self) -> Vec<&str> {
        match self {
            FieldRule::Copy { field, .. } => vec![field],
            FieldRule::Compound {
                field, rest_field, ..
            } => vec![field, rest_field],
        }
    }
}

/// Configuration for one document type.
///
/// Two profiles ship with the crate (see [`crate::profiles`]); callers with
/// other deployments construct their own. A profile is validated once, at
/// [`crate::Extractor::new`] time — an invalid profile processes nothing.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Profile identifier, for diagnostics
    pub name: String,
    /// Static left-coordinate → raw-label table
    pub column_map: ColumnMap,
    /// Vertical clustering tolerance in pixels (non-negative)
    pub vertical_tolerance: i32,
    /// Horizontal column-lookup tolerance in pixels (non-negative)
    pub horizontal_tolerance: i32,
    /// Raw label of the identifier column
    pub id_label: String,
    /// Raw label of the adjacent dedicated organization column
    pub secondary_id_label: String,
    /// Schema field receiving the organization name
    pub organization_field: String,
    /// Output schema: every field of the record except `id`, in output order
    pub fields: Vec<String>,
    /// Normalization rules, applied in order
    pub rules: Vec<FieldRule>,
}

impl Profile {
    /// Validate the profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the column map or schema is
    /// empty, a tolerance is negative, the identifier labels are blank, or a
    /// rule targets a field missing from the schema.
    pub fn validate(&self) -> Result<()> {
        if self.column_map.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "profile '{}': column map is empty",
                self.name
            )));
        }
        if self.fields.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "profile '{}': field schema is empty",
                self.name
            )));
        }
        if self.vertical_tolerance < 0 || self.horizontal_tolerance < 0 {
            return Err(Error::InvalidConfig(format!(
                "profile '{}': tolerances must be non-negative (vertical {}, horizontal {})",
                self.name, self.vertical_tolerance, self.horizontal_tolerance
            )));
        }
        if self.id_label.is_empty() || self.secondary_id_label.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "profile '{}': identifier labels must not be empty",
                self.name
            )));
        }
        if !self.fields.contains(&self.organization_field) {
            return Err(Error::InvalidConfig(format!(
                "profile '{}': organization field '{}' is not in the schema",
                self.name, self.organization_field
            )));
        }
        for rule in &self.rules {
            for target in rule.target_fields() {
                if !self.fields.iter().any(|f| f == target) {
                    return Err(Error::InvalidConfig(format!(
                        "profile '{}': rule targets field '{}' which is not in the schema",
                        self.name, target
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profile() -> Profile {
        Profile {
            name: "test".to_string(),
            column_map: ColumnMap::from_pairs(&[(66, "ID"), (79, "ID2")]),
            vertical_tolerance: 3,
            horizontal_tolerance: 6,
            id_label: "ID".to_string(),
            secondary_id_label: "ID2".to_string(),
            organization_field: "organizacia".to_string(),
            fields: vec!["organizacia".to_string()],
            rules: vec![],
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(minimal_profile().validate().is_ok());
    }

    #[test]
    fn test_empty_column_map_rejected() {
        let mut p = minimal_profile();
        p.column_map = ColumnMap::new();
        assert!(matches!(p.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let mut p = minimal_profile();
        p.vertical_tolerance = -1;
        assert!(matches!(p.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_schema_rejected() {
        let mut p = minimal_profile();
        p.fields.clear();
        assert!(matches!(p.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rule_targeting_unknown_field_rejected() {
        let mut p = minimal_profile();
        p.rules.push(FieldRule::copy("Typ", "typ"));
        assert!(matches!(p.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_organization_field_must_be_in_schema() {
        let mut p = minimal_profile();
        p.organization_field = "missing".to_string();
        assert!(matches!(p.validate(), Err(Error::InvalidConfig(_))));
    }
}
