use super::*;
use crate::model::{Color, Condition, Operator, Scalar, StyleField, Tier};

#[test]
fn builtin_catalog_parses_every_section() {
    let catalog = Catalog::builtin().unwrap();
    for id in SectionId::ALL {
        let section = catalog.section(id);
        assert_eq!(section.id, id);
        assert!(!section.rules.is_empty(), "{id} should ship default rules");
    }
}

#[test]
fn builtin_sections_follow_compile_order() {
    let catalog = Catalog::builtin().unwrap();
    let ids: Vec<_> = catalog.sections().map(|s| s.id).collect();
    assert_eq!(ids, SectionId::ALL.to_vec());
}

#[test]
fn builtin_gold_high_matches_documented_defaults() {
    let catalog = Catalog::builtin().unwrap();
    let rule = catalog.rule(SectionId::Gold, "gold_high").unwrap();

    assert_eq!(rule.code, "gold");
    assert_eq!(
        rule.conditions.get("stackSize"),
        Some(&Condition::compare(Operator::GreaterOrEqual, Scalar::Int(1000)))
    );
    assert_eq!(
        rule.styles.text_color,
        StyleField::Override(Color::rgba(255, 215, 0, 255))
    );
    assert!(catalog.rule(SectionId::Gold, "gold_default").is_some());
}

#[test]
fn builtin_currency_rules_carry_tiers() {
    let catalog = Catalog::builtin().unwrap();
    let currency = catalog.section(SectionId::Currency);

    assert_eq!(currency.tier_threshold, Some(Tier::E));
    let tiers: Vec<_> = currency.rules.iter().filter_map(|r| r.tier).collect();
    assert_eq!(tiers, Tier::ORDER.to_vec());
}

#[test]
fn builtin_rule_ids_are_unique_across_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let mut ids: Vec<_> = catalog
        .sections()
        .flat_map(|s| s.rules.iter().map(|r| r.id.clone()))
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn from_sections_fills_missing_sections_with_empty_ones() {
    let gold = Section::new(SectionId::Gold).with_rules(vec![Rule::new("g", "gold", "Gold")]);
    let catalog = Catalog::from_sections([gold]).unwrap();

    assert_eq!(catalog.section(SectionId::Gold).rules.len(), 1);
    assert!(catalog.section(SectionId::Jewels).rules.is_empty());
    assert_eq!(catalog.sections().count(), SectionId::ALL.len());
}

#[test]
fn from_sections_rejects_duplicate_rule_ids() {
    let section = Section::new(SectionId::Charms).with_rules(vec![
        Rule::new("dup", "charms", "One"),
        Rule::new("dup", "charms", "Two"),
    ]);
    let err = Catalog::from_sections([section]).unwrap_err();
    assert!(err.to_string().contains("Duplicate rule id 'dup'"));
}
