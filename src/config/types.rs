// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::lookup::EndpointKind;

/// Bounds for the lookup quiet period. Values outside this range are
/// clamped so a typo cannot hammer the server or make the picker feel dead.
pub const MIN_DEBOUNCE_MS: u64 = 180;
pub const MAX_DEBOUNCE_MS: u64 = 250;

/// Lookup server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_primary_path")]
    pub primary_path: String,
    #[serde(default = "default_component_path")]
    pub component_path: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            primary_path: default_primary_path(),
            component_path: default_component_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Picker behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl PickerConfig {
    /// Quiet period with out-of-range values clamped into bounds
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS))
    }

    /// Panel height in rows, never zero
    pub fn visible_rows(&self) -> usize {
        self.max_visible.max(1)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            debounce_ms: default_debounce_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// One visible form field
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl FieldSpec {
    /// Display label, falling back to the field name
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// One hidden id slot
#[derive(Debug, Clone, Deserialize)]
pub struct HiddenSpec {
    pub name: String,
}

/// Attach a remote picker to a named field
#[derive(Debug, Clone, Deserialize)]
pub struct BindingSpec {
    pub input: String,
    #[serde(default)]
    pub hidden: Option<String>,
    #[serde(default)]
    pub endpoint: EndpointKind,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub hidden: Vec<HiddenSpec>,
    #[serde(default)]
    pub pickers: Vec<BindingSpec>,
}

impl Config {
    /// Built-in demo form used when no config file exists
    pub fn demo() -> Self {
        Config {
            server: ServerConfig::default(),
            picker: PickerConfig::default(),
            fields: vec![
                FieldSpec {
                    name: "item".to_string(),
                    label: Some("Item".to_string()),
                },
                FieldSpec {
                    name: "component".to_string(),
                    label: Some("Component".to_string()),
                },
                FieldSpec {
                    name: "notes".to_string(),
                    label: Some("Notes".to_string()),
                },
            ],
            hidden: vec![
                HiddenSpec {
                    name: "item_id".to_string(),
                },
                HiddenSpec {
                    name: "component_id".to_string(),
                },
            ],
            pickers: vec![
                BindingSpec {
                    input: "item".to_string(),
                    hidden: Some("item_id".to_string()),
                    endpoint: EndpointKind::Primary,
                },
                BindingSpec {
                    input: "component".to_string(),
                    hidden: Some("component_id".to_string()),
                    endpoint: EndpointKind::Component,
                },
            ],
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_primary_path() -> String {
    "/autocomplete/items/".to_string()
}

fn default_component_path() -> String {
    "/autocomplete/components/".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_max_visible() -> usize {
    10
}
