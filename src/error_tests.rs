//! Tests for QpickError type

use std::path::PathBuf;

use super::*;

#[test]
fn test_config_read_error_names_the_path() {
    let error = QpickError::ConfigRead {
        path: PathBuf::from("/etc/qpick/config.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let msg = error.to_string();
    assert!(msg.contains("read config file"));
    assert!(msg.contains("/etc/qpick/config.toml"));
    assert!(msg.contains("no such file"));
}

#[test]
fn test_config_parse_error_names_the_path() {
    let source = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let error = QpickError::ConfigParse {
        path: PathBuf::from("qpick.toml"),
        source,
    };
    let msg = error.to_string();
    assert!(msg.contains("Invalid config file"));
    assert!(msg.contains("qpick.toml"));
}

#[test]
fn test_empty_form_error_points_at_the_fix() {
    let msg = QpickError::EmptyForm.to_string();
    assert!(msg.contains("[[fields]]"));
}

#[test]
fn test_error_debug_names_the_variant() {
    let debug_str = format!("{:?}", QpickError::EmptyForm);
    assert!(debug_str.contains("EmptyForm"));
}
