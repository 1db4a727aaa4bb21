use std::collections::HashMap;
use std::fs;

use lightbox_config::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigSource, LightboxConfig,
};
use tempfile::TempDir;

fn vars(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = TempDir::new().unwrap();
    let (config, source) =
        LightboxConfig::load_with(vars(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, LightboxConfig::default());
}

#[test]
fn explicit_path_wins_over_inline_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[carousel]\nanimation_ms = 200\nfallback_ms = 260\neasing = \"ease-in-out\"\n\n[review]\nadd_key = \"site_add\"\n",
    )
    .unwrap();

    let lookup = vars(&[
        (CONFIG_PATH_ENV, path.display().to_string()),
        (CONFIG_JSON_ENV, r#"{"carousel":{"animation_ms":999}}"#.to_owned()),
    ]);
    let (config, source) = LightboxConfig::load_with(lookup, dir.path()).unwrap();

    assert_eq!(source, ConfigSource::EnvPath(path));
    assert_eq!(config.carousel.animation_ms, 200);
    assert_eq!(config.review.add_key, "site_add");
    assert_eq!(config.review.remove_key, "lightbox_remove");
}

#[test]
fn inline_json_is_used_without_a_path() {
    let dir = TempDir::new().unwrap();
    let lookup = vars(&[(
        CONFIG_JSON_ENV,
        r#"{"carousel":{"commit_fraction":0.4}}"#.to_owned(),
    )]);
    let (config, source) = LightboxConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvInline);
    assert!((config.carousel.commit_fraction - 0.4).abs() < f32::EPSILON);
}

#[test]
fn default_file_is_discovered_under_config_dir() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let file = dir.path().join("config/lightbox.json");
    fs::write(&file, r#"{"carousel":{"dead_zone_px":14.0}}"#).unwrap();

    let (config, source) =
        LightboxConfig::load_with(vars(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(file));
    assert_eq!(config.carousel.dead_zone_px, 14.0);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let lookup = vars(&[(
        CONFIG_JSON_ENV,
        r#"{"carousel":{"edge_resistance":0.0}}"#.to_owned(),
    )]);
    let err = LightboxConfig::load_with(lookup, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("edge_resistance"), "{err:#}");
}

#[test]
fn unparseable_inline_json_reports_the_variable() {
    let dir = TempDir::new().unwrap();
    let lookup = vars(&[(CONFIG_JSON_ENV, "{".to_owned())]);
    let err = LightboxConfig::load_with(lookup, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(CONFIG_JSON_ENV));
}

#[test]
fn extensionless_file_falls_back_to_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lightboxrc");
    fs::write(&path, r#"{"review":{"remove_key":"drop"}}"#).unwrap();
    let config = LightboxConfig::load_from_file(&path).unwrap();
    assert_eq!(config.review.remove_key, "drop");
}
