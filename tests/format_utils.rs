use country_explorer::format::{
    EMPTY, get_id, number_formatter, number_formatter_locale, parse_obj_values,
};
use country_explorer::models::{Currency, NativeName};
use std::collections::{BTreeMap, HashSet};

fn currencies() -> BTreeMap<String, Currency> {
    BTreeMap::from([
        (
            "b".to_string(),
            Currency {
                name: "Y".into(),
                symbol: Some("¥".into()),
            },
        ),
        (
            "a".to_string(),
            Currency {
                name: "X".into(),
                symbol: None,
            },
        ),
    ])
}

#[test]
fn number_formatter_uses_thousands_separators() {
    assert_eq!(number_formatter(1_000_000), "1,000,000");
    assert_eq!(number_formatter(999), "999");
    assert_eq!(number_formatter(0), "0");
}

#[test]
fn number_formatter_follows_locale() {
    assert_eq!(number_formatter_locale(1_000_000, "en"), "1,000,000");
    assert_eq!(number_formatter_locale(1_000_000, "de"), "1.000.000");
    assert_eq!(number_formatter_locale(1_000_000, "DE_de"), "1.000.000");
}

#[test]
fn absent_and_empty_collections_give_the_same_placeholder() {
    let empty: BTreeMap<String, Currency> = BTreeMap::new();
    let a = parse_obj_values(Some(&empty), "name", None);
    let b = parse_obj_values::<String, Currency>(None, "name", None);
    assert_eq!(a, b);
    assert_eq!(a, EMPTY);
}

#[test]
fn joins_field_projection_in_key_order() {
    assert_eq!(parse_obj_values(Some(&currencies()), "name", None), "X, Y");
    // "a" has no symbol and is skipped
    assert_eq!(parse_obj_values(Some(&currencies()), "symbol", None), "¥");
}

#[test]
fn limit_keeps_exactly_that_many_entries() {
    let joined = parse_obj_values(Some(&currencies()), "name", Some(1));
    assert_eq!(joined, "X");
    assert!(!joined.contains(", "));
}

#[test]
fn empty_field_uses_the_entry_itself() {
    let languages = BTreeMap::from([
        ("fra".to_string(), "French".to_string()),
        ("eng".to_string(), "English".to_string()),
    ]);
    assert_eq!(parse_obj_values(Some(&languages), "", None), "English, French");
    assert_eq!(parse_obj_values(Some(&languages), "", Some(1)), "English");
    assert_eq!(parse_obj_values(Some(&languages), "name", None), EMPTY);
}

#[test]
fn native_names_project_common_or_official() {
    let names = BTreeMap::from([(
        "deu".to_string(),
        NativeName {
            official: "Bundesrepublik Deutschland".into(),
            common: "Deutschland".into(),
        },
    )]);
    assert_eq!(parse_obj_values(Some(&names), "common", None), "Deutschland");
    assert_eq!(
        parse_obj_values(Some(&names), "official", None),
        "Bundesrepublik Deutschland"
    );
}

#[test]
fn get_id_is_unique_per_call() {
    let ids: HashSet<String> = (0..100).map(|_| get_id()).collect();
    assert_eq!(ids.len(), 100);
    assert!(ids.iter().all(|id| id.starts_with("row-")));
}
