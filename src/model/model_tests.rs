use super::*;

// =============================================================================
// SectionId / Tier Tests
// =============================================================================

#[test]
fn section_id_parses_kebab_and_snake_case() {
    assert_eq!("vault-keys".parse::<SectionId>(), Ok(SectionId::VaultKeys));
    assert_eq!("uncut_gems".parse::<SectionId>(), Ok(SectionId::UncutGems));
    assert_eq!("Gold".parse::<SectionId>(), Ok(SectionId::Gold));
}

#[test]
fn section_id_unknown_lists_available_sections() {
    let err = "loot".parse::<SectionId>().unwrap_err();
    assert!(err.contains("Unknown section"));
    assert!(err.contains("class-selection"));
}

#[test]
fn section_id_serializes_as_kebab_case() {
    let json = serde_json::to_string(&SectionId::ClassSelection).unwrap();
    assert_eq!(json, r#""class-selection""#);
}

#[test]
fn section_id_all_covers_every_category_once() {
    let mut ids = SectionId::ALL.to_vec();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), SectionId::ALL.len());
    assert_eq!(SectionId::ALL[0], SectionId::Gold);
    assert_eq!(SectionId::ALL[10], SectionId::ClassSelection);
}

#[test]
fn tier_parses_case_insensitively() {
    assert_eq!("s".parse::<Tier>(), Ok(Tier::S));
    assert_eq!("C".parse::<Tier>(), Ok(Tier::C));
    assert!("F".parse::<Tier>().is_err());
}

// =============================================================================
// Rule / Section Tests
// =============================================================================

#[test]
fn rule_defaults_to_enabled_show() {
    let rule: Rule =
        serde_json::from_str(r#"{"id": "gold_default", "code": "gold", "name": "Gold"}"#).unwrap();
    assert!(rule.enabled);
    assert_eq!(rule.disposition, Disposition::Show);
    assert!(rule.conditions.is_empty());
}

#[test]
fn rule_label_prefers_title() {
    let mut rule = Rule::new("gold_high", "gold", "Gold (large stack)");
    assert_eq!(rule.label(), "Gold (large stack)");
    rule.title = Some("My gold".to_string());
    assert_eq!(rule.label(), "My gold");
}

#[test]
fn rule_conditions_keep_document_order() {
    let rule: Rule = serde_json::from_str(
        r#"{
            "id": "r", "code": "c", "name": "n",
            "conditions": {
                "stackSize": {"operator": ">=", "value": 100},
                "areaLevel": {"minLevel": 1, "maxLevel": 64},
                "identified": true
            }
        }"#,
    )
    .unwrap();
    let keys: Vec<_> = rule.conditions.keys().cloned().collect();
    assert_eq!(keys, vec!["stackSize", "areaLevel", "identified"]);
}

#[test]
fn section_parses_from_toml() {
    let section: Section = toml::from_str(
        r#"
id = "currency"
tierThreshold = "B"

[[rules]]
id = "currency_s"
code = "currency"
name = "Currency S"
tier = "S"
"#,
    )
    .unwrap();
    assert_eq!(section.id, SectionId::Currency);
    assert!(section.enabled);
    assert_eq!(section.tier_threshold, Some(Tier::B));
    assert_eq!(section.rules[0].tier, Some(Tier::S));
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn snapshot_from_section_captures_user_fields() {
    let mut rule = Rule::new("gold_high", "gold", "Gold");
    rule.enabled = false;
    rule.styles.text_color = StyleField::Disabled;
    let section = Section::new(SectionId::Gold).with_rules(vec![rule]);

    let snapshot = SectionSnapshot::from(&section);
    assert_eq!(snapshot.enabled, Some(true));
    let rule_snapshot = snapshot.rule("gold_high").unwrap();
    assert_eq!(rule_snapshot.enabled, Some(false));
    assert!(rule_snapshot.styles.text_color.is_disabled());
}

#[test]
fn snapshot_ignores_catalog_owned_fields() {
    let snapshot: SectionSnapshot = serde_json::from_str(
        r#"{"rules": [{"id": "gold_high", "name": "stale name", "code": "stale"}]}"#,
    )
    .unwrap();
    assert_eq!(snapshot.rules.len(), 1);
    assert_eq!(snapshot.rules[0].enabled, None);
}

#[test]
fn snapshot_carries_item_tiers_but_not_titles() {
    let mut rule = Rule::new("currency_a", "currency", "Currency A tier");
    rule.title = Some("Catalog title".to_string());
    let mut section = Section::new(SectionId::Currency).with_rules(vec![rule]);
    section.item_tiers.insert("Chaos Orb".to_string(), Tier::A);

    let json = serde_json::to_string(&SectionSnapshot::from(&section)).unwrap();
    assert!(json.contains(r#""itemTiers":{"Chaos Orb":"A"}"#));
    assert!(!json.contains("title"));
}

// =============================================================================
// FilterConfiguration Tests
// =============================================================================

#[test]
fn overrides_take_precedence_over_section_values() {
    let mut section = Section::new(SectionId::Currency);
    section.tier_threshold = Some(Tier::E);
    let mut config = FilterConfiguration::new(Platform::Pc);
    config.insert_section(section.clone());
    config.overrides.insert(
        SectionId::Currency,
        SectionOverride {
            enabled: Some(false),
            tier_threshold: Some(Tier::A),
        },
    );

    assert!(!config.section_enabled(&section));
    assert_eq!(config.tier_threshold(&section), Some(Tier::A));
}

#[test]
fn without_overrides_section_values_apply() {
    let section = Section::new(SectionId::Gold);
    let config = FilterConfiguration::default();
    assert!(config.section_enabled(&section));
    assert_eq!(config.tier_threshold(&section), None);
}
