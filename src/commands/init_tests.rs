use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::InitArgs;
use crate::config::AppConfig;
use crate::model::Platform;
use crate::session::PersistMode;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_is_valid_config() {
    let template = generate_config_template();
    let config: AppConfig = toml::from_str(&template).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.platform, Platform::Pc);
    assert_eq!(config.persist, PersistMode::Immediate);
}

#[test]
fn generate_config_template_documents_optional_keys() {
    let template = generate_config_template();
    assert!(template.contains("# preset = "));
    assert!(template.contains("# store_dir = "));
    assert!(template.contains("# [overrides.currency]"));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".filter-forge.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    assert!(run_init_impl(&args).is_ok());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("platform = \"pc\""));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".filter-forge.toml");
    std::fs::write(&config_path, "existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "existing");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".filter-forge.toml");
    std::fs::write(&config_path, "existing").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("persist = \"immediate\""));
}
