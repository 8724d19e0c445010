use super::*;
use crate::commands::context::session_for;
use crate::config::AppConfig;
use crate::model::Tier;
use crate::session::SectionUpdate;
use crate::store::MemoryStore;

fn reset_args(preset: Option<&str>, defaults: bool) -> ResetArgs {
    ResetArgs {
        section: None,
        preset: preset.map(ToString::to_string),
        defaults,
    }
}

fn session(store: &MemoryStore) -> Session<MemoryStore> {
    session_for(&AppConfig::default(), store.clone()).unwrap()
}

#[test]
fn reset_target_prefers_flag_then_config() {
    assert_eq!(
        reset_target(&reset_args(Some("flag"), false), Some("config")),
        Some("flag".to_string())
    );
    assert_eq!(
        reset_target(&reset_args(None, false), Some("config")),
        Some("config".to_string())
    );
    assert_eq!(reset_target(&reset_args(None, false), None), None);
}

#[test]
fn reset_defaults_ignores_configured_preset() {
    assert_eq!(reset_target(&reset_args(None, true), Some("config")), None);
}

#[test]
fn reset_single_section_to_catalog() {
    let store = MemoryStore::new();
    let mut session = session(&store);
    session
        .dispatch(SectionId::Gold, SectionUpdate::SetEnabled(false))
        .unwrap();
    session
        .dispatch(SectionId::Jewels, SectionUpdate::SetEnabled(false))
        .unwrap();

    let reset = reset_sections(&mut session, Some(SectionId::Gold), None).unwrap();
    assert_eq!(reset, vec![SectionId::Gold]);
    assert!(session.section(SectionId::Gold).unwrap().enabled);
    assert!(!session.section(SectionId::Jewels).unwrap().enabled);
}

#[test]
fn save_preset_then_reset_restores_baseline() {
    let store = MemoryStore::new();
    let mut session = session(&store);
    session
        .dispatch(SectionId::Currency, SectionUpdate::SetTierThreshold(Some(Tier::B)))
        .unwrap();

    let args = SavePresetArgs {
        name: "league".to_string(),
        sections: vec![SectionId::Currency],
    };
    assert_eq!(save_preset(&mut session, &args).unwrap(), vec![SectionId::Currency]);

    session
        .dispatch(SectionId::Currency, SectionUpdate::SetTierThreshold(Some(Tier::S)))
        .unwrap();
    reset_sections(&mut session, Some(SectionId::Currency), Some("league")).unwrap();

    assert_eq!(
        session.section(SectionId::Currency).unwrap().tier_threshold,
        Some(Tier::B)
    );
    assert_eq!(session.preset_id(), Some("league"));
}

#[test]
fn save_preset_without_sections_saves_all() {
    let store = MemoryStore::new();
    let mut session = session(&store);
    let args = SavePresetArgs {
        name: "all".to_string(),
        sections: vec![],
    };
    let saved = save_preset(&mut session, &args).unwrap();
    assert_eq!(saved, SectionId::ALL.to_vec());
    assert!(store.contains("preset.all.gold"));
    assert!(store.contains("preset.all.class-selection"));
}

#[test]
fn save_preset_rejects_bad_name() {
    let store = MemoryStore::new();
    let mut session = session(&store);
    let args = SavePresetArgs {
        name: "../escape".to_string(),
        sections: vec![],
    };
    assert!(save_preset(&mut session, &args).is_err());
}

#[test]
fn reset_all_touches_every_section() {
    let store = MemoryStore::new();
    let mut session = session(&store);
    let reset = reset_sections(&mut session, None, None).unwrap();
    assert_eq!(reset.len(), SectionId::ALL.len());
    assert!(store.contains("section.leveling"));
}
