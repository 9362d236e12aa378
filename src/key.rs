//! Flat key encoding
//!
//! A leaf is addressed by its `[group, option]` path. On the wire (input
//! names, lookup tables) the path is joined with [`SEPARATOR`] into a single
//! string, e.g. `netbanking-AXIS`. Checkbox inputs carry the key behind the
//! [`INPUT_PREFIX`], e.g. `Ui-netbanking-AXIS`.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{UiError, UiResult};

/// Separator between path segments of a flat key
pub const SEPARATOR: char = '-';

/// Prefix of every checkbox `name` attribute emitted by the renderers
pub const INPUT_PREFIX: &str = "Ui-";

/// A `group-option` path to a single leaf
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlatKey {
    group: String,
    option: String,
}

impl FlatKey {
    /// Build a key from its two segments
    pub fn new(group: &str, option: &str) -> UiResult<Self> {
        check_segment(group).map_err(|_| UiError::InvalidKey(format!("{group}{SEPARATOR}{option}")))?;
        check_segment(option).map_err(|_| UiError::InvalidKey(format!("{group}{SEPARATOR}{option}")))?;
        Ok(Self {
            group: group.to_string(),
            option: option.to_string(),
        })
    }

    /// Decode `group-option`
    pub fn parse(key: &str) -> UiResult<Self> {
        let (group, option) = key
            .split_once(SEPARATOR)
            .ok_or_else(|| UiError::InvalidKey(key.to_string()))?;
        if option.contains(SEPARATOR) {
            return Err(UiError::InvalidKey(key.to_string()));
        }
        Self::new(group, option)
    }

    /// Decode the `name` attribute of a rendered checkbox (`Ui-group-option`)
    pub fn from_input_name(name: &str) -> UiResult<Self> {
        let key = name
            .strip_prefix(INPUT_PREFIX)
            .ok_or_else(|| UiError::InvalidKey(name.to_string()))?;
        Self::parse(key)
    }

    /// The `name` attribute for this key's checkbox
    pub fn input_name(&self) -> String {
        format!("{INPUT_PREFIX}{self}")
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn option(&self) -> &str {
        &self.option
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.group, SEPARATOR, self.option)
    }
}

impl FromStr for FlatKey {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check that a single identifier can take part in a flat key.
///
/// Returns a human-readable reason on failure.
pub fn check_segment(segment: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err("identifier is empty".to_string());
    }
    if segment.contains(SEPARATOR) {
        return Err(format!(
            "identifier '{segment}' contains the key separator '{SEPARATOR}'"
        ));
    }
    if segment.chars().any(char::is_whitespace) {
        return Err(format!("identifier '{segment}' contains whitespace"));
    }
    Ok(())
}

/// Nest every separator-joined key of a JSON object under its parent.
///
/// `{"a-b": true, "a": {"c": false}}` becomes `{"a": {"c": false, "b": true}}`.
/// Keys are split at their last separator and the pass repeats on each level
/// until no joined key remains, then descends into object values. A joined
/// entry wins over a clashing nested one; a non-object value sitting where a
/// parent object is needed gets replaced by that object.
pub fn unflatten(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(unflatten_map(map)),
        other => other,
    }
}

fn unflatten_map(mut map: Map<String, Value>) -> Map<String, Value> {
    loop {
        let mut changed = false;
        let mut next = Map::new();
        for (key, value) in map {
            match key.rsplit_once(SEPARATOR) {
                Some((parent, child)) => {
                    changed = true;
                    insert_child(&mut next, parent, child, value);
                }
                None => insert_entry(&mut next, key, value),
            }
        }
        map = next;
        if !changed {
            break;
        }
    }

    map.into_iter().map(|(k, v)| (k, unflatten(v))).collect()
}

fn insert_child(map: &mut Map<String, Value>, parent: &str, child: &str, value: Value) {
    let slot = map
        .entry(parent.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(children) = slot {
        children.insert(child.to_string(), value);
    }
}

fn insert_entry(map: &mut Map<String, Value>, key: String, value: Value) {
    match (map.get_mut(&key), value) {
        (Some(Value::Object(existing)), Value::Object(incoming)) => {
            for (k, v) in incoming {
                existing.entry(k).or_insert(v);
            }
        }
        // A parent object was already built from joined keys
        (Some(Value::Object(_)), _) => {}
        (_, value) => {
            map.insert(key, value);
        }
    }
}
