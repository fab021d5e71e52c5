//! Built-in named profiles.
//!
//! The known deployment is the state real-estate property register published
//! as PDF. Its column positions changed once (revision of 2014-10-25), so two
//! coordinate tables exist; both share the same output schema and field
//! rules. Other deployments (e.g. spreadsheet-style XML exports) supply their
//! own [`Profile`] — those tables are external configuration, not shipped
//! here.

use crate::layout::columns::ColumnMap;
use crate::profile::{FieldRule, Profile};

/// Output schema of the property-register profiles: every record field
/// except `id`, in output order.
fn property_register_fields() -> Vec<String> {
    [
        "organizacia",
        "zariadenie",
        "typ",
        "druh_1",
        "druh_2",
        "inventarne_cislo",
        "rok_nadobudnutia",
        "kraj",
        "okres",
        "obec",
        "krajsky_urad",
        "ulica",
        "c_listu_vlastnictva",
        "spoluvlastnicky_podiel",
        "vymera",
        "parcelne_cislo",
        "kolaudacia",
        "spravca_objektu",
        "uzivatel_objektu",
        "obstaravacia_cena_v_EUR",
        "zostatkova_cena_v_EUR",
        "poznamka",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Field rules shared by both property-register coordinate tables.
///
/// Rule order is load-bearing: the dedicated parcel-number and manager
/// columns must come after the compound splits they override.
fn property_register_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::copy_dash_null("Zariadenie", "zariadenie"),
        FieldRule::copy("Typ", "typ"),
        FieldRule::copy("Druh", "druh_1"),
        FieldRule::copy("Druh2", "druh_2"),
        FieldRule::copy("Inventárne číslo", "inventarne_cislo"),
        FieldRule::year_split("Rok nadobudnutia a kraj", "rok_nadobudnutia", "kraj"),
        FieldRule::copy("Názov okresu", "okres"),
        FieldRule::copy("Názov obce", "obec"),
        FieldRule::copy("Názov KÚ", "krajsky_urad"),
        FieldRule::copy("Ulica", "ulica"),
        FieldRule::copy("Číslo VL", "c_listu_vlastnictva"),
        FieldRule::copy("Spoluvl. podiel", "spoluvlastnicky_podiel"),
        FieldRule::quantity_split("Výmera v m^2", "vymera", "parcelne_cislo"),
        FieldRule::copy("Parcelné číslo", "parcelne_cislo"),
        FieldRule::year_split("Kolaudácia a správca objektu", "kolaudacia", "spravca_objektu"),
        FieldRule::copy_trimmed("Správca objektu", "spravca_objektu"),
        FieldRule::copy("Užívateľ objektu", "uzivatel_objektu"),
        FieldRule::copy("Obstarávacia cena v EUR", "obstaravacia_cena_v_EUR"),
        FieldRule::quantity_split("Zostatková cena v EUR", "zostatkova_cena_v_EUR", "poznamka"),
    ]
}

/// Property-register PDF profile, coordinate table valid from 2014-10-25.
///
/// Duplicate labels at nearby coordinates absorb the column drift observed
/// across documents of the same revision.
pub fn finance_pdf_2014() -> Profile {
    Profile {
        name: "finance-pdf-2014".to_string(),
        column_map: ColumnMap::from_pairs(&[
            (116, "ID"),
            (148, "ID2"),
            (543, "Zariadenie"),
            (951, "Typ"),
            (1024, "Druh"),
            (1210, "Druh2"),
            (1652, "Inventárne číslo"),
            (1797, "Rok nadobudnutia a kraj"),
            (1943, "Názov okresu"),
            (2089, "Názov obce"),
            (2285, "Názov KÚ"),
            (2442, "Ulica"),
            (2626, "Číslo VL"),
            (2698, "Spoluvl. podiel"),
            (2831, "Výmera v m^2"),
            (2847, "Výmera v m^2"),
            (3126, "Parcelné číslo"),
            (3207, "Kolaudácia a správca objektu"),
            (3337, "Správca objektu"),
            (3239, "Správca objektu"),
            (3510, "Užívateľ objektu"),
            (3788, "Obstarávacia cena v EUR"),
            (3800, "Obstarávacia cena v EUR"),
            (3807, "Obstarávacia cena v EUR"),
            (3884, "Zostatková cena v EUR"),
            (3896, "Zostatková cena v EUR"),
            (3913, "Zostatková cena v EUR"),
        ]),
        vertical_tolerance: 4,
        horizontal_tolerance: 7,
        id_label: "ID".to_string(),
        secondary_id_label: "ID2".to_string(),
        organization_field: "organizacia".to_string(),
        fields: property_register_fields(),
        rules: property_register_rules(),
    }
}

/// Property-register PDF profile, coordinate table used before 2014-10-25.
pub fn finance_pdf_legacy() -> Profile {
    Profile {
        name: "finance-pdf-legacy".to_string(),
        column_map: ColumnMap::from_pairs(&[
            (116, "ID"),
            (79, "ID2"),
            (226, "Zariadenie"),
            (378, "Typ"),
            (406, "Druh"),
            (475, "Druh2"),
            (631, "Inventárne číslo"),
            (684, "Rok nadobudnutia a kraj"),
            (740, "Názov okresu"),
            (794, "Názov obce"),
            (867, "Názov KÚ"),
            (925, "Ulica"),
            (994, "Číslo VL"),
            (1021, "Spoluvl. podiel"),
            (1069, "Výmera v m^2"),
            (1179, "Parcelné číslo"),
            (1209, "Kolaudácia a správca objektu"),
            (1222, "Správca objektu"),
            (1323, "Užívateľ objektu"),
            (1423, "Obstarávacia cena v EUR"),
            (1459, "Zostatková cena v EUR"),
        ]),
        vertical_tolerance: 4,
        horizontal_tolerance: 7,
        id_label: "ID".to_string(),
        secondary_id_label: "ID2".to_string(),
        organization_field: "organizacia".to_string(),
        fields: property_register_fields(),
        rules: property_register_rules(),
    }
}

/// Look up a built-in profile by name.
pub fn by_name(name: &str) -> Option<Profile> {
    match name {
        "finance-pdf-2014" => Some(finance_pdf_2014()),
        "finance-pdf-legacy" => Some(finance_pdf_legacy()),
        _ => None,
    }
}

/// Names of all built-in profiles.
pub fn names() -> Vec<&'static str> {
    vec!["finance-pdf-2014", "finance-pdf-legacy"]
}
