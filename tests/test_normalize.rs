//! Integration tests for field normalization over the shipped profiles.

use retable::{normalize_row, profiles, RawRow};

fn raw(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Identifier Split Laws
// ============================================================================

#[test]
fn test_inline_identifier() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(&raw(&[("ID", "482 Ministry of X")]), &profile).unwrap();
    assert_eq!(record.id, 482);
    assert_eq!(record.text("organizacia"), Some("Ministry of X"));
}

#[test]
fn test_split_identifier() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(&raw(&[("ID", "482"), ("ID2", "Ministry of X")]), &profile).unwrap();
    assert_eq!(record.id, 482);
    assert_eq!(record.text("organizacia"), Some("Ministry of X"));
}

#[test]
fn test_garbage_identifier_rejects() {
    let profile = profiles::finance_pdf_2014();
    assert!(normalize_row(&raw(&[("ID", "abc")]), &profile).is_none());
}

// ============================================================================
// Compound Splits and Placeholders
// ============================================================================

#[test]
fn test_year_region_pair() {
    let profile = profiles::finance_pdf_2014();

    let both = normalize_row(
        &raw(&[("ID", "1 X"), ("Rok nadobudnutia a kraj", "2014 Bratislava")]),
        &profile,
    )
    .unwrap();
    assert_eq!(both.int("rok_nadobudnutia"), Some(2014));
    assert_eq!(both.text("kraj"), Some("Bratislava"));

    let year_only = normalize_row(
        &raw(&[("ID", "1 X"), ("Rok nadobudnutia a kraj", "2014")]),
        &profile,
    )
    .unwrap();
    assert_eq!(year_only.int("rok_nadobudnutia"), Some(2014));
    assert!(year_only.get("kraj").is_none());

    let neither = normalize_row(
        &raw(&[("ID", "1 X"), ("Rok nadobudnutia a kraj", "Bratislava")]),
        &profile,
    )
    .unwrap();
    assert!(neither.get("rok_nadobudnutia").is_none());
    assert!(neither.get("kraj").is_none());
}

#[test]
fn test_device_placeholder() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(&raw(&[("ID", "1 X"), ("Zariadenie", "-")]), &profile).unwrap();
    assert!(record.get("zariadenie").is_none());
}

#[test]
fn test_all_plain_fields_copied() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(
        &raw(&[
            ("ID", "7 Org"),
            ("Typ", "budova"),
            ("Druh", "administratívna"),
            ("Druh2", "kancelárie"),
            ("Inventárne číslo", "INV-001"),
            ("Názov okresu", "Bratislava I"),
            ("Názov obce", "Bratislava"),
            ("Názov KÚ", "Staré Mesto"),
            ("Ulica", "Štefanovičova 5"),
            ("Číslo VL", "1234"),
            ("Spoluvl. podiel", "1/1"),
            ("Užívateľ objektu", "MF SR"),
            ("Obstarávacia cena v EUR", "100 000,00"),
        ]),
        &profile,
    )
    .unwrap();

    assert_eq!(record.text("typ"), Some("budova"));
    assert_eq!(record.text("druh_1"), Some("administratívna"));
    assert_eq!(record.text("druh_2"), Some("kancelárie"));
    assert_eq!(record.text("inventarne_cislo"), Some("INV-001"));
    assert_eq!(record.text("okres"), Some("Bratislava I"));
    assert_eq!(record.text("obec"), Some("Bratislava"));
    assert_eq!(record.text("krajsky_urad"), Some("Staré Mesto"));
    assert_eq!(record.text("ulica"), Some("Štefanovičova 5"));
    assert_eq!(record.text("c_listu_vlastnictva"), Some("1234"));
    assert_eq!(record.text("spoluvlastnicky_podiel"), Some("1/1"));
    assert_eq!(record.text("uzivatel_objektu"), Some("MF SR"));
    assert_eq!(record.text("obstaravacia_cena_v_EUR"), Some("100 000,00"));
}

#[test]
fn test_residual_value_and_note() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(
        &raw(&[("ID", "1 X"), ("Zostatková cena v EUR", "9 000,50 predané")]),
        &profile,
    )
    .unwrap();
    assert_eq!(record.text("zostatkova_cena_v_EUR"), Some("9 000,50"));
    assert_eq!(record.text("poznamka"), Some("predané"));
}

#[test]
fn test_manager_precedence() {
    let profile = profiles::finance_pdf_2014();
    let record = normalize_row(
        &raw(&[
            ("ID", "1 X"),
            ("Kolaudácia a správca objektu", "1987 SSZ MF SR"),
            ("Správca objektu", " Správa služieb zboru "),
        ]),
        &profile,
    )
    .unwrap();
    assert_eq!(record.int("kolaudacia"), Some(1987));
    assert_eq!(record.text("spravca_objektu"), Some("Správa služieb zboru"));
}

#[test]
fn test_legacy_profile_shares_schema() {
    let legacy = profiles::finance_pdf_legacy();
    let record = normalize_row(&raw(&[("ID", "9 Org")]), &legacy).unwrap();
    assert_eq!(record.id, 9);
    assert_eq!(record.fields.len(), 22);
}
