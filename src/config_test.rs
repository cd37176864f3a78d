use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    AppConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn from_vars_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.content_path, None);
    assert_eq!(cfg.stylesheet_path, None);
    assert_eq!(cfg.default_theme, Theme::Light);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SENSORSYNC_CONTENT", "/etc/sensorsync/page.yaml"),
        ("SENSORSYNC_STYLESHEET", "/etc/sensorsync/theme.css"),
        ("SENSORSYNC_THEME", "dark"),
    ])
    .unwrap();

    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.content_path, Some(PathBuf::from("/etc/sensorsync/page.yaml")));
    assert_eq!(cfg.stylesheet_path, Some(PathBuf::from("/etc/sensorsync/theme.css")));
    assert_eq!(cfg.default_theme, Theme::Dark);
}

#[test]
fn from_vars_treats_blank_values_as_unset() {
    let cfg = config_from(&[("PORT", " "), ("SENSORSYNC_CONTENT", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.content_path, None);
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = config_from(&[("PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "70000"));
}

#[test]
fn from_vars_rejects_unknown_theme() {
    let err = config_from(&[("SENSORSYNC_THEME", "neon")]).unwrap_err();
    assert!(matches!(err, ConfigError::Theme(_)));
}
