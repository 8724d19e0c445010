use super::*;
use crate::model::{
    Color, Condition, Disposition, Operator, Rule, Scalar, StyleField, StyleSpec, Tier,
};
use crate::store::{ACTIVE_PRESET_KEY, DirStore, MemoryStore, section_key};

const GOLD: Color = Color::rgba(255, 215, 0, 255);

fn catalog() -> Catalog {
    let high = Rule::new("gold_high", "gold", "Gold (large stack)")
        .with_condition(
            "stackSize",
            Condition::compare(Operator::GreaterOrEqual, Scalar::Int(1000)),
        )
        .with_styles(StyleSpec {
            text_color: StyleField::Override(GOLD),
            ..StyleSpec::default()
        });
    let default = Rule::new("gold_default", "gold", "Gold");
    let gold = Section::new(SectionId::Gold).with_rules(vec![high, default]);

    let mut currency = Section::new(SectionId::Currency).with_rules(vec![
        Rule::new("currency_s", "currency", "S").with_tier(Tier::S),
        Rule::new("currency_c", "currency", "C").with_tier(Tier::C),
    ]);
    currency.tier_threshold = Some(Tier::E);

    Catalog::from_sections([gold, currency]).unwrap()
}

fn stored_snapshot(store: &MemoryStore, id: SectionId) -> Option<SectionSnapshot> {
    SectionRepository::new(store).load_section(id).unwrap()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn first_access_without_snapshot_yields_catalog() {
    let mut session = Session::new(catalog(), MemoryStore::new());
    let section = session.section(SectionId::Gold).unwrap().clone();
    assert_eq!(&section, catalog().section(SectionId::Gold));
}

#[test]
fn stored_snapshot_is_reconciled_on_load() {
    let store = MemoryStore::new().with_entry(
        "section.gold",
        r#"{"rules": [{"id": "gold_high", "styles": {"textColor": null}}, {"id": "gone"}]}"#,
    );
    let mut session = Session::new(catalog(), store);

    let section = session.section(SectionId::Gold).unwrap();
    assert_eq!(section.rules.len(), 2);
    assert!(section.rule("gold_high").unwrap().styles.text_color.is_disabled());
}

#[test]
fn corrupt_snapshot_falls_back_to_catalog() {
    let store = MemoryStore::new().with_entry("section.gold", "][");
    let mut session = Session::new(catalog(), store);
    let section = session.section(SectionId::Gold).unwrap().clone();
    assert_eq!(&section, catalog().section(SectionId::Gold));
}

#[test]
fn non_utf8_snapshot_file_falls_back_to_catalog() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("section.gold.json"), [0xc3, 0x28, 0xa0]).unwrap();
    let mut session = Session::new(catalog(), DirStore::new(temp_dir.path()));

    let section = session.section(SectionId::Gold).unwrap().clone();
    assert_eq!(&section, catalog().section(SectionId::Gold));
}

#[test]
fn stored_title_is_ignored_on_load() {
    let store = MemoryStore::new().with_entry(
        "section.gold",
        r#"{"rules": [{"id": "gold_high", "title": "Stale user title"}]}"#,
    );
    let mut session = Session::new(catalog(), store);

    let rule = session.section(SectionId::Gold).unwrap().rule("gold_high").unwrap();
    assert_eq!(rule.label(), "Gold (large stack)");
}

// =============================================================================
// Dispatch And Persistence
// =============================================================================

#[test]
fn immediate_mode_persists_every_update() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());

    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();

    let snapshot = stored_snapshot(&store, SectionId::Gold).unwrap();
    assert_eq!(snapshot.enabled, Some(false));
    assert!(!session.is_dirty());
}

#[test]
fn dispatch_returns_next_section() {
    let mut session = Session::new(catalog(), MemoryStore::new());
    let section = session
        .dispatch(
            SectionId::Gold,
            SectionUpdate::rule("gold_default", RuleUpdate::SetDisposition(Disposition::Hide)),
        )
        .unwrap();
    assert_eq!(
        section.rule("gold_default").unwrap().disposition,
        Disposition::Hide
    );
}

#[test]
fn failed_dispatch_leaves_state_untouched() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());

    let result = session.dispatch(
        SectionId::Gold,
        SectionUpdate::rule("nope", RuleUpdate::Toggle),
    );
    assert!(result.is_err());
    assert!(store.is_empty());
    assert_eq!(
        session.section(SectionId::Gold).unwrap(),
        catalog().section(SectionId::Gold)
    );
}

#[test]
fn inherit_style_update_restores_catalog_value() {
    let mut session = Session::new(catalog(), MemoryStore::new());
    let disable = SectionUpdate::rule(
        "gold_high",
        RuleUpdate::Style(StyleUpdate::TextColor(StyleField::Disabled)),
    );
    let inherit = SectionUpdate::rule(
        "gold_high",
        RuleUpdate::Style(StyleUpdate::TextColor(StyleField::Inherit)),
    );

    session.dispatch(SectionId::Gold, disable).unwrap();
    let section = session.dispatch(SectionId::Gold, inherit).unwrap();
    assert_eq!(
        section.rule("gold_high").unwrap().styles.text_color,
        StyleField::Override(GOLD)
    );
}

#[test]
fn deferred_mode_waits_for_flush() {
    let store = MemoryStore::new();
    let mut session =
        Session::new(catalog(), store.clone()).with_persist_mode(PersistMode::Deferred);

    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();
    assert!(session.is_dirty());
    assert!(store.is_empty());

    session.flush().unwrap();
    assert!(!session.is_dirty());
    assert_eq!(
        stored_snapshot(&store, SectionId::Gold).unwrap().enabled,
        Some(false)
    );
}

#[test]
fn deferred_mode_flushes_final_value_on_drop() {
    let store = MemoryStore::new();
    {
        let mut session =
            Session::new(catalog(), store.clone()).with_persist_mode(PersistMode::Deferred);
        session
            .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
            .unwrap();
        session
            .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(true))
            .unwrap();
        session
            .dispatch(
                SectionId::Currency,
                SectionUpdate::SetTierThreshold(Some(Tier::B)),
            )
            .unwrap();
    }

    assert_eq!(
        stored_snapshot(&store, SectionId::Gold).unwrap().enabled,
        Some(true)
    );
    assert_eq!(
        stored_snapshot(&store, SectionId::Currency)
            .unwrap()
            .tier_threshold,
        Some(Tier::B)
    );
}

#[test]
fn persisted_edits_survive_a_new_session() {
    let store = MemoryStore::new();
    {
        let mut session = Session::new(catalog(), store.clone());
        session
            .dispatch(
                SectionId::Gold,
                SectionUpdate::rule(
                    "gold_high",
                    RuleUpdate::SetDisposition(Disposition::Hide),
                ),
            )
            .unwrap();
    }

    let mut session = Session::new(catalog(), store);
    let section = session.section(SectionId::Gold).unwrap();
    assert_eq!(
        section.rule("gold_high").unwrap().disposition,
        Disposition::Hide
    );
}

#[test]
fn style_edit_keeps_disabled_section_off() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());
    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();

    let section = session
        .dispatch(
            SectionId::Gold,
            SectionUpdate::rule(
                "gold_high",
                RuleUpdate::Style(StyleUpdate::FontSize(StyleField::Override(42))),
            ),
        )
        .unwrap();
    assert!(!section.enabled);
    assert_eq!(
        stored_snapshot(&store, SectionId::Gold).unwrap().enabled,
        Some(false)
    );
}

// =============================================================================
// Reset And Presets
// =============================================================================

#[test]
fn reset_without_preset_restores_catalog() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());
    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();

    let section = session.reset(SectionId::Gold, None).unwrap().clone();
    assert_eq!(&section, catalog().section(SectionId::Gold));
    assert_eq!(
        stored_snapshot(&store, SectionId::Gold).unwrap().enabled,
        Some(true)
    );
}

#[test]
fn save_preset_then_reset_restores_baseline() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());

    session
        .dispatch(
            SectionId::Currency,
            SectionUpdate::SetTierThreshold(Some(Tier::A)),
        )
        .unwrap();
    session
        .save_preset("league-start", &[SectionId::Currency])
        .unwrap();
    assert!(store.contains("preset.league-start.currency"));

    session
        .dispatch(
            SectionId::Currency,
            SectionUpdate::SetTierThreshold(Some(Tier::D)),
        )
        .unwrap();
    let section = session
        .reset(SectionId::Currency, Some("league-start"))
        .unwrap();

    assert_eq!(section.tier_threshold, Some(Tier::A));
    assert_eq!(session.preset_id(), Some("league-start"));
}

#[test]
fn preset_reset_is_remembered_by_the_next_session() {
    let store = MemoryStore::new();
    {
        let mut session = Session::new(catalog(), store.clone());
        session.reset(SectionId::Gold, Some("league-start")).unwrap();
    }
    assert!(store.contains(ACTIVE_PRESET_KEY));

    let mut session =
        Session::new(catalog(), store).with_preset(Some("configured".to_string()));
    assert_eq!(session.preset_id(), Some("configured"));
    session.restore_active_preset().unwrap();
    assert_eq!(session.preset_id(), Some("league-start"));
    assert_eq!(
        session.configuration().unwrap().preset_id.as_deref(),
        Some("league-start")
    );
}

#[test]
fn catalog_reset_records_no_active_preset() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone())
        .with_preset(Some("configured".to_string()));
    session.reset(SectionId::Gold, None).unwrap();

    assert!(!store.contains(ACTIVE_PRESET_KEY));
    session.restore_active_preset().unwrap();
    assert_eq!(session.preset_id(), Some("configured"));
}

#[test]
fn reset_to_unknown_preset_falls_back_to_catalog() {
    let mut session = Session::new(catalog(), MemoryStore::new());
    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();

    let section = session.reset(SectionId::Gold, Some("missing")).unwrap();
    assert!(section.enabled);
}

#[test]
fn reset_all_touches_every_section() {
    let store = MemoryStore::new();
    let mut session = Session::new(catalog(), store.clone());
    session.reset_all(None).unwrap();
    for id in SectionId::ALL {
        assert!(store.contains(&section_key(id)), "{id} not persisted");
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn configuration_carries_globals_and_all_sections() {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        SectionId::Gold,
        SectionOverride {
            enabled: Some(false),
            tier_threshold: None,
        },
    );
    let mut session = Session::new(catalog(), MemoryStore::new())
        .with_platform(Platform::Console)
        .with_preset(Some("starter".to_string()))
        .with_mute_sounds(true)
        .with_overrides(overrides);

    let config = session.configuration().unwrap();
    assert_eq!(config.platform, Platform::Console);
    assert_eq!(config.preset_id.as_deref(), Some("starter"));
    assert!(config.mute_sounds);
    assert_eq!(config.sections.len(), SectionId::ALL.len());
    assert_eq!(config.overrides[&SectionId::Gold].enabled, Some(false));
}
