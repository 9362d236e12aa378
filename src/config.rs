//! Widget configuration - the option tree, theme and rendering options

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{UiError, UiResult};
use crate::key::{check_segment, FlatKey};

/// Markup convention used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Theme {
    /// daisyUI card with collapse panels
    #[default]
    DaisyUi,
    /// Bootstrap accordion
    Bootstrap,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::DaisyUi => "daisyui",
            Theme::Bootstrap => "bootstrap",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daisyui" => Ok(Theme::DaisyUi),
            "bootstrap" => Ok(Theme::Bootstrap),
            other => Err(UiError::UnsupportedTheme(other.to_string())),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = UiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.name().to_string()
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiOptions {
    /// Markup convention
    pub theme: Theme,
    /// DOM id of the bootstrap accordion container; headers collapse siblings within it
    pub accordion_id: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            accordion_id: "accordionExample".to_string(),
        }
    }
}

impl UiOptions {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Set the accordion container id
    pub fn with_accordion_id(mut self, id: &str) -> Self {
        self.accordion_id = id.to_string();
        self
    }
}

/// Initial value of a leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafValue {
    /// Human-readable label; the option starts unselected
    Label(String),
    /// A boolean carried over from a previous state export; the option key doubles as label
    Preset(bool),
}

/// A single toggleable option within a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionConfig {
    pub key: String,
    pub value: LeafValue,
}

impl OptionConfig {
    /// Text shown next to the checkbox
    pub fn label(&self) -> &str {
        match &self.value {
            LeafValue::Label(label) => label,
            LeafValue::Preset(_) => &self.key,
        }
    }
}

/// Content of a top-level group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBody {
    Options(Vec<OptionConfig>),
    /// A falsy group value (`null`, `false`, `0`, `""`); never rendered
    Absent(Value),
}

/// A top-level group of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub key: String,
    pub body: GroupBody,
}

impl GroupConfig {
    pub fn options(&self) -> Option<&[OptionConfig]> {
        match &self.body {
            GroupBody::Options(options) => Some(options),
            GroupBody::Absent(_) => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.options().is_some()
    }
}

/// The validated two-level option tree, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct UiConfig {
    groups: Vec<GroupConfig>,
}

impl UiConfig {
    /// Validate a JSON value of shape `{ group: { option: label } | falsy }`
    pub fn from_value(value: &Value) -> UiResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            UiError::InvalidConfiguration(format!(
                "root must be a JSON object, found {}",
                kind_of(value)
            ))
        })?;

        let groups = root
            .iter()
            .map(|(key, body)| parse_group(key, body))
            .collect::<UiResult<Vec<_>>>()?;

        log::debug!("loaded configuration with {} groups", groups.len());
        Ok(Self { groups })
    }

    pub fn from_json_str(json: &str) -> UiResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_path(path: impl AsRef<Path>) -> UiResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// All groups, including absent ones
    pub fn groups(&self) -> &[GroupConfig] {
        &self.groups
    }

    /// Groups that render, with their options
    pub fn visible_groups(&self) -> impl Iterator<Item = (&str, &[OptionConfig])> {
        self.groups
            .iter()
            .filter_map(|g| g.options().map(|opts| (g.key.as_str(), opts)))
    }

    /// Every leaf, in document order
    pub fn leaves(&self) -> impl Iterator<Item = (FlatKey, &OptionConfig)> {
        self.visible_groups().flat_map(|(group, options)| {
            options.iter().filter_map(move |opt| {
                FlatKey::new(group, &opt.key).ok().map(|key| (key, opt))
            })
        })
    }

    pub fn option(&self, key: &FlatKey) -> Option<&OptionConfig> {
        self.groups
            .iter()
            .find(|g| g.key == key.group())?
            .options()?
            .iter()
            .find(|opt| opt.key == key.option())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl TryFrom<Value> for UiConfig {
    type Error = UiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn parse_group(key: &str, body: &Value) -> UiResult<GroupConfig> {
    check_segment(key)
        .and_then(|()| check_id_safe(key))
        .map_err(|reason| UiError::InvalidConfiguration(format!("group '{key}': {reason}")))?;

    if is_falsy(body) {
        return Ok(GroupConfig {
            key: key.to_string(),
            body: GroupBody::Absent(body.clone()),
        });
    }

    let options = match body {
        Value::Object(map) => parse_options(key, map)?,
        other => {
            return Err(UiError::InvalidConfiguration(format!(
                "group '{key}' must be an object of options, found {}",
                kind_of(other)
            )))
        }
    };

    Ok(GroupConfig {
        key: key.to_string(),
        body: GroupBody::Options(options),
    })
}

/// Group keys end up in DOM ids and `#id` selectors
fn check_id_safe(key: &str) -> Result<(), String> {
    const SELECTOR_CHARS: &[char] = &[
        '#', '.', ':', '[', ']', '(', ')', '>', '+', '~', ',', '*', '"', '\'', '\\', '/', '=',
    ];
    match key.chars().find(|c| SELECTOR_CHARS.contains(c)) {
        Some(c) => Err(format!("identifier '{key}' contains '{c}', which breaks its DOM id")),
        None => Ok(()),
    }
}

fn parse_options(group: &str, map: &Map<String, Value>) -> UiResult<Vec<OptionConfig>> {
    map.iter()
        .map(|(key, value)| {
            check_segment(key).map_err(|reason| {
                UiError::InvalidConfiguration(format!("option in group '{group}': {reason}"))
            })?;
            let value = match value {
                Value::String(label) => LeafValue::Label(label.clone()),
                Value::Bool(checked) => LeafValue::Preset(*checked),
                Value::Object(_) => {
                    return Err(UiError::InvalidConfiguration(format!(
                        "option '{group}-{key}' nests deeper than group -> option"
                    )))
                }
                other => {
                    return Err(UiError::InvalidConfiguration(format!(
                        "option '{group}-{key}' must be a label string, found {}",
                        kind_of(other)
                    )))
                }
            };
            Ok(OptionConfig {
                key: key.clone(),
                value,
            })
        })
        .collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_names() {
        assert_eq!("daisyui".parse::<Theme>().unwrap(), Theme::DaisyUi);
        assert_eq!("bootstrap".parse::<Theme>().unwrap(), Theme::Bootstrap);
        assert!(matches!(
            "tailwind".parse::<Theme>(),
            Err(UiError::UnsupportedTheme(name)) if name == "tailwind"
        ));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: UiOptions = serde_json::from_value(json!({ "theme": "bootstrap" })).unwrap();
        assert_eq!(options.theme, Theme::Bootstrap);
        assert_eq!(options.accordion_id, "accordionExample");

        let bad = serde_json::from_value::<UiOptions>(json!({ "theme": "bulma" }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_groups_keep_document_order() {
        let config = UiConfig::from_value(&json!({
            "wallet": { "PAYTM": "Paytm" },
            "netbanking": { "HDFC": "HDFC Bank", "AXIS": "Axis Bank" },
        }))
        .unwrap();

        let keys: Vec<String> = config.leaves().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["wallet-PAYTM", "netbanking-HDFC", "netbanking-AXIS"]);
    }

    #[test]
    fn test_falsy_groups_are_absent() {
        let config = UiConfig::from_value(&json!({
            "upi": null, "emi": false, "cod": 0, "paylater": "", "cards": { "VISA": "Visa" },
        }))
        .unwrap();

        assert_eq!(config.groups().len(), 5);
        let visible: Vec<&str> = config.visible_groups().map(|(g, _)| g).collect();
        assert_eq!(visible, vec!["cards"]);
        assert_eq!(config.groups()[0].body, GroupBody::Absent(Value::Null));
        assert_eq!(config.groups()[1].body, GroupBody::Absent(json!(false)));
        assert!(!config.groups()[3].is_visible());
    }

    #[test]
    fn test_preset_leaf_uses_key_as_label() {
        let config = UiConfig::from_value(&json!({ "cards": { "VISA": true } })).unwrap();
        let key = FlatKey::parse("cards-VISA").unwrap();
        let option = config.option(&key).unwrap();
        assert_eq!(option.value, LeafValue::Preset(true));
        assert_eq!(option.label(), "VISA");
    }

    #[test]
    fn test_rejects_malformed_trees() {
        let cases = [
            json!(["not", "an", "object"]),
            json!({ "cards": "Visa" }),
            json!({ "cards": { "VISA": { "debit": "Debit" } } }),
            json!({ "cards": { "VISA": 4 } }),
            json!({ "net-banking": { "AXIS": "Axis Bank" } }),
            json!({ "cards": { "MASTER-CARD": "Mastercard" } }),
            json!({ "": { "AXIS": "Axis Bank" } }),
            json!({ "cards": { "VISA": null } }),
        ];
        for case in cases {
            assert!(
                matches!(UiConfig::from_value(&case), Err(UiError::InvalidConfiguration(_))),
                "expected rejection of {case}"
            );
        }
    }

    #[test]
    fn test_rejects_keys_unusable_as_dom_ids() {
        let cases = [
            json!({ "net banking": { "AXIS": "Axis Bank" } }),
            json!({ "netbanking\t": { "AXIS": "Axis Bank" } }),
            json!({ "netbanking": { "AXIS BANK": "Axis Bank" } }),
            json!({ "net.banking": { "AXIS": "Axis Bank" } }),
            json!({ "net#banking": { "AXIS": "Axis Bank" } }),
            json!({ "cards[0]": { "VISA": "Visa" } }),
        ];
        for case in cases {
            assert!(
                matches!(UiConfig::from_value(&case), Err(UiError::InvalidConfiguration(_))),
                "expected rejection of {case}"
            );
        }

        assert!(UiConfig::from_value(&json!({ "net_banking": { "AXIS_1": "Axis" } })).is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let config: UiConfig =
            serde_json::from_str(r#"{ "netbanking": { "AXIS": "Axis Bank" }, "upi": null }"#)
                .unwrap();
        assert_eq!(config.groups().len(), 2);
        assert_eq!(config.leaves().count(), 1);

        let err = serde_json::from_str::<UiConfig>(r#"{ "net banking": { "AXIS": "Axis Bank" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("whitespace"), "{err}");
    }
}
