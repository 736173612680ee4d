// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! OverlayConfig tests
//!
//! Loading from disk, defaults for missing fields and validation.

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{ConfigError, OverlayConfig, DEFAULT_NAMESPACE};
use crate::core::Modifier;

/// Helper: Writes `content` to a temporary overlay.toml
fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("overlay.toml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.modifier, Modifier::Alt);
    assert_eq!(config.reserved, vec!['S', 'C', 'H']);
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
}

#[test]
fn test_load_full_config() {
    let (_temp_dir, path) = create_test_config(
        r#"
modifier = "Ctrl"
reserved = ["Q", "W"]
namespace = "mnemonic"
"#,
    );

    let config = OverlayConfig::load(&path).unwrap();
    assert_eq!(config.modifier, Modifier::Ctrl);
    assert_eq!(config.reserved, vec!['Q', 'W']);
    assert_eq!(config.namespace, "mnemonic");
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = OverlayConfig::from_toml("reserved = []").unwrap();
    assert_eq!(config.modifier, Modifier::Alt);
    assert!(config.reserved.is_empty());
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.toml");

    match OverlayConfig::load(&path) {
        Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_invalid_toml() {
    let result = OverlayConfig::from_toml("modifier = [");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_rejects_shift_modifier() {
    let result = OverlayConfig::from_toml(r#"modifier = "Shift""#);
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn test_rejects_empty_namespace() {
    let result = OverlayConfig::from_toml(r#"namespace = "  ""#);
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn test_rejects_punctuation_reserved() {
    let result = OverlayConfig::from_toml(r#"reserved = ["+"]"#);
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}
