use std::collections::HashMap;
use std::path::Path;

use super::*;

fn fixture_dir() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site").display().to_string()
}

fn lookup_from(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_static_dir_is_set() {
    let config = ServeConfig::from_lookup(lookup_from(&[("STATIC_DIR", fixture_dir())])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_bind_addr_are_parsed() {
    let config = ServeConfig::from_lookup(lookup_from(&[
        ("STATIC_DIR", fixture_dir()),
        ("PORT", " 8080 ".into()),
        ("BIND_ADDR", "127.0.0.1".into()),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServeConfig::from_lookup(lookup_from(&[("STATIC_DIR", fixture_dir()), ("PORT", "http".into())]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServeConfig::from_lookup(lookup_from(&[("STATIC_DIR", fixture_dir()), ("BIND_ADDR", "localhost".into())]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}

#[test]
fn missing_static_dir_is_rejected() {
    let err = ServeConfig::from_lookup(lookup_from(&[("STATIC_DIR", "/definitely/not/here".into())])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingStaticDir(_)));
    assert!(err.to_string().contains("/definitely/not/here"));
}
