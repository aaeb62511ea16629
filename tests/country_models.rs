mod common;

use country_explorer::models::{Country, Region, RegionFilter};

#[test]
fn parse_sample_json() {
    let countries = common::sample();
    assert_eq!(countries.len(), 5);

    let deu = &countries[0];
    assert_eq!(deu.cca3, "DEU");
    assert_eq!(deu.name.common, "Germany");
    assert_eq!(deu.name.native_name["deu"].common, "Deutschland");
    assert_eq!(deu.capital, vec!["Berlin".to_string()]);
    assert_eq!(deu.population, 83_240_525);
    assert_eq!(deu.currencies["EUR"].symbol.as_deref(), Some("€"));
    assert_eq!(deu.borders.len(), 9);
}

#[test]
fn missing_optional_fields_default_to_empty() {
    let ata = common::country("ATA");
    assert!(ata.name.native_name.is_empty());
    assert!(ata.capital.is_empty());
    assert!(ata.borders.is_empty());
    assert!(ata.currencies.is_empty());
    assert!(ata.languages.is_empty());
    assert!(ata.tld.is_empty());
    assert_eq!(ata.subregion, "");
    assert_eq!(ata.flags.alt, None);
}

#[test]
fn minimal_record_only_needs_code_and_name() {
    let c: Country = serde_json::from_str(r#"{"cca3":"XKX","name":{"common":"Kosovo"}}"#).unwrap();
    assert_eq!(c.population, 0);
    assert_eq!(c.region, "");
    assert_eq!(c.flags.svg, "");
}

#[test]
fn code_matching_is_case_insensitive() {
    let usa = common::country("usa");
    assert!(usa.matches_code("USA"));
    assert!(usa.matches_code("usa"));
    assert!(usa.matches_code(" Usa "));
    assert!(!usa.matches_code("US"));
}

#[test]
fn region_parses_api_spelling_case_insensitively() {
    assert_eq!("Europe".parse::<Region>().unwrap(), Region::Europe);
    assert_eq!("americas".parse::<Region>().unwrap(), Region::Americas);
    assert!("Atlantis".parse::<Region>().is_err());
    assert_eq!(Region::Oceania.to_string(), "Oceania");
}

#[test]
fn region_filter_round_trips_through_text() {
    assert_eq!("all".parse::<RegionFilter>().unwrap(), RegionFilter::All);
    assert_eq!("ALL".parse::<RegionFilter>().unwrap(), RegionFilter::All);
    assert_eq!(
        "asia".parse::<RegionFilter>().unwrap(),
        RegionFilter::Only(Region::Asia)
    );
    assert_eq!(RegionFilter::All.to_string(), "all");
    assert_eq!(RegionFilter::from(Region::Africa).to_string(), "Africa");
    assert_eq!(RegionFilter::default(), RegionFilter::All);
}

#[test]
fn region_filter_matches_records() {
    let deu = common::country("DEU");
    assert!(RegionFilter::All.matches(&deu));
    assert!(RegionFilter::Only(Region::Europe).matches(&deu));
    assert!(!RegionFilter::Only(Region::Asia).matches(&deu));
}
