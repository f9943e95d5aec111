//! Unit Tests for Configuration Loading

use std::env;
use std::fs;

use realmterm::config::loader::{ConfigLoader, LoadOptions, CONFIG_ENV_VAR};
use realmterm::{Config, Error, GatedRealm};
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("realmterm.toml");
    fs::write(
        &path,
        r#"
[terminal]
scrollback_limit = 50
user = "visitor"

[realms]
game = "PLAYER_ONE"

[[profile.projects]]
name = "Realm Terminal"
status = "Live"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.terminal.scrollback_limit, 50);
    assert_eq!(config.terminal.user, "visitor");
    assert_eq!(config.terminal.history_display_limit, 15);
    assert_eq!(config.realms.secret(GatedRealm::Game), "PLAYER_ONE");
    assert_eq!(config.realms.secret(GatedRealm::Design), "DESIGN_2024");
    assert_eq!(config.profile.projects.len(), 1);
    assert_eq!(config.profile.name, "Hailegiorgis Wagaye");
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("realmterm.json");
    fs::write(&path, r#"{ "timing": { "transition_ms": 250 } }"#).unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.timing.transition_ms, 250);
    assert_eq!(config.timing.notice_ms, 5000);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("realmterm.toml");
    fs::write(&path, "[terminal]\nscrollback_limit = 0\n").unwrap();

    match ConfigLoader::load_from_path(&path) {
        Err(Error::ConfigValidationFailed { field, .. }) => {
            assert_eq!(field, "terminal.scrollback_limit")
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_parse_errors_name_the_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("realmterm.toml");
    fs::write(&path, "[terminal\nscrollback_limit = ").unwrap();
    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigParseFailed { format, .. }) if format == "TOML"
    ));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.window.maximize_inset = 20.0;
    config.realms.design = "PALETTE".to_string();

    let loader = ConfigLoader::with_search_paths(Vec::new());
    loader.save_to_path(&config, &path).unwrap();
    assert_eq!(ConfigLoader::load_from_path(&path).unwrap(), config);
}

#[test]
fn test_search_skips_broken_files() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("first");
    let good = dir.path().join("second");
    fs::write(broken.with_extension("toml"), "not = [valid").unwrap();
    fs::write(good.with_extension("json"), r#"{ "terminal": { "user": "json" } }"#).unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![broken, good.clone()]);
    let config = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(config.terminal.user, "json");
    assert_eq!(loader.current_path(), Some(good.with_extension("json").as_path()));
}

#[test]
fn test_missing_files() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("absent")]);
    assert_eq!(
        loader.load_with_options(LoadOptions::default()).unwrap(),
        Config::default()
    );
    assert!(loader.current_path().is_none());

    let strict = LoadOptions {
        create_default: false,
        validate: true,
    };
    assert!(matches!(
        loader.load_with_options(strict),
        Err(Error::ConfigNotFound)
    ));
}

#[test]
fn test_init_with_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[window]\nmaximize_inset = 0.0\n").unwrap();
    let config = realmterm::init_with_config(&path).unwrap();
    assert_eq!(config.window.maximize_inset, 0.0);
}

// The only test in this binary that touches the environment variable
#[test]
fn test_env_var_file_is_loaded_as_named() {
    let dir = TempDir::new().unwrap();
    let dotted = dir.path().join("realm.prod.toml");
    let conf = dir.path().join("realmterm.conf");
    fs::write(&dotted, "[terminal]\nuser = \"from_env\"\n").unwrap();
    fs::write(&conf, "[terminal]\nuser = \"from_conf\"\n").unwrap();
    // Decoys the old extension stripping would have picked up
    fs::write(dir.path().join("realm.toml"), "[terminal]\nuser = \"decoy\"\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &dotted);
    let mut loader = ConfigLoader::new();
    let config = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(config.terminal.user, "from_env");
    assert_eq!(loader.current_path(), Some(dotted.as_path()));

    env::set_var(CONFIG_ENV_VAR, &conf);
    let mut loader = ConfigLoader::new();
    let config = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(config.terminal.user, "from_conf");

    env::set_var(CONFIG_ENV_VAR, dir.path().join("absent.toml"));
    let mut loader = ConfigLoader::new();
    let result = loader.load_with_options(LoadOptions::default());
    env::remove_var(CONFIG_ENV_VAR);
    assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
}
