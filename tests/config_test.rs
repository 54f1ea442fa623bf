//! Integration tests for layered Settings loading

use std::fs;

use langlab::config::{RawSettings, Settings};
use langlab::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_no_overlay_when_using_defaults_then_documented_values() {
    let settings = Settings::default();
    assert_eq!(settings.default_factor, 2);
    assert_eq!(settings.max_tree_depth, 64);
    assert_eq!(settings.seed, None);
}

#[test]
fn given_template_when_written_then_every_key_commented_out() {
    let path = std::env::temp_dir().join(format!("langlab-template-{}.toml", std::process::id()));
    Settings::write_template(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    assert!(content.contains("# default_factor = 2"));
    assert!(content.contains("# max_tree_depth = 64"));
    assert!(content.contains("# seed = 42"));

    // every key is commented out, so parsing yields an empty overlay
    let raw: RawSettings = toml::from_str(&content).unwrap();
    assert!(raw.default_factor.is_none());
    assert!(raw.max_tree_depth.is_none());
    assert!(raw.seed.is_none());
}

#[test]
fn given_settings_when_rendering_toml_then_scalars_survive() {
    let settings = Settings {
        default_factor: 3,
        max_tree_depth: 32,
        seed: Some(9),
    };
    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, settings);
}
