use super::*;
use crate::model::{Rule, StyleField};
use crate::store::MemoryStore;

fn gold_section() -> Section {
    let mut rule = Rule::new("gold_high", "gold", "Gold (large stack)");
    rule.styles.text_color = StyleField::Disabled;
    Section::new(SectionId::Gold).with_rules(vec![rule])
}

#[test]
fn keys_follow_naming_scheme() {
    assert_eq!(section_key(SectionId::UncutGems), "section.uncut-gems");
    assert_eq!(preset_key("league", SectionId::Gold), "preset.league.gold");
}

#[test]
fn missing_snapshot_loads_as_none() {
    let repo = SectionRepository::new(MemoryStore::new());
    assert_eq!(repo.load_section(SectionId::Gold).unwrap(), None);
}

#[test]
fn saved_section_loads_back_as_snapshot() {
    let repo = SectionRepository::new(MemoryStore::new());
    repo.save_section(&gold_section()).unwrap();

    let snapshot = repo.load_section(SectionId::Gold).unwrap().unwrap();
    assert_eq!(snapshot, SectionSnapshot::from(&gold_section()));
}

#[test]
fn disabled_style_is_persisted_as_null() {
    let store = MemoryStore::new();
    let repo = SectionRepository::new(&store);
    repo.save_section(&gold_section()).unwrap();

    let raw = store.load("section.gold").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let styles = &value["rules"][0]["styles"];
    assert!(styles.get("textColor").unwrap().is_null());
    assert!(styles.get("fontSize").is_none());
}

#[test]
fn corrupt_snapshot_falls_back_to_none() {
    let store = MemoryStore::new().with_entry("section.gold", "{not json");
    let repo = SectionRepository::new(store);
    assert_eq!(repo.load_section(SectionId::Gold).unwrap(), None);
}

#[test]
fn wrongly_shaped_snapshot_falls_back_to_none() {
    let store = MemoryStore::new().with_entry("section.gold", r#"{"rules": "nope"}"#);
    let repo = SectionRepository::new(store);
    assert_eq!(repo.load_section(SectionId::Gold).unwrap(), None);
}

#[test]
fn remove_section_clears_snapshot() {
    let store = MemoryStore::new();
    let repo = SectionRepository::new(&store);
    repo.save_section(&gold_section()).unwrap();
    repo.remove_section(SectionId::Gold).unwrap();
    assert!(store.is_empty());
}

#[test]
fn preset_round_trip_uses_preset_key() {
    let store = MemoryStore::new();
    let repo = SectionRepository::new(&store);
    repo.save_preset("league-start", &gold_section()).unwrap();

    assert!(store.contains("preset.league-start.gold"));
    assert!(repo.load_preset("league-start", SectionId::Gold).unwrap().is_some());
    assert!(repo.load_section(SectionId::Gold).unwrap().is_none());
}

#[test]
fn invalid_preset_name_is_rejected() {
    let repo = SectionRepository::new(MemoryStore::new());
    let err = repo.save_preset("a.b", &gold_section()).unwrap_err();
    assert!(err.to_string().contains("Invalid preset name"));
    assert!(repo.load_preset("", SectionId::Gold).is_err());
}

#[test]
fn active_preset_record_round_trips() {
    let store = MemoryStore::new();
    let repo = SectionRepository::new(&store);
    assert_eq!(repo.load_active_preset().unwrap(), None);

    repo.save_active_preset("league-start").unwrap();
    assert!(store.contains(ACTIVE_PRESET_KEY));
    assert_eq!(
        repo.load_active_preset().unwrap().as_deref(),
        Some("league-start")
    );
    assert!(repo.save_active_preset("../up").is_err());
}

#[test]
fn invalid_active_preset_record_is_ignored() {
    let store = MemoryStore::new().with_entry(ACTIVE_PRESET_KEY, "bad name!");
    let repo = SectionRepository::new(store);
    assert_eq!(repo.load_active_preset().unwrap(), None);
}
