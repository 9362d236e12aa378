//! Selection state - the nested per-leaf state tree

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{GroupBody, LeafValue, UiConfig};
use crate::error::{UiError, UiResult};
use crate::key::{self, FlatKey};

/// Current value of one leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LeafState {
    /// Untouched since construction; holds the configured label
    Label(String),
    /// Set by the user (or preset in configuration)
    Checked(bool),
}

impl LeafState {
    pub fn is_checked(&self) -> bool {
        matches!(self, LeafState::Checked(true))
    }

    fn to_value(&self) -> Value {
        match self {
            LeafState::Label(label) => Value::String(label.clone()),
            LeafState::Checked(checked) => Value::Bool(*checked),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupState {
    key: String,
    leaves: Vec<(String, LeafState)>,
    /// Exported in place of `leaves` for groups that were absent in configuration
    placeholder: Option<Value>,
}

/// Nested `group -> option -> state` tree with a flat-key index.
///
/// The selected-key set always equals the set of leaves holding
/// `Checked(true)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    groups: Vec<GroupState>,
    index: HashMap<FlatKey, (usize, usize)>,
    selected: HashSet<FlatKey>,
}

impl SelectionState {
    /// Default state for a configuration.
    ///
    /// Every rendered leaf starts at its configured value. Absent groups keep
    /// their falsy value, with `null` read as an empty group.
    pub fn from_config(config: &UiConfig) -> Self {
        let mut state = Self::default();

        for group_config in config.groups() {
            let group = group_config.key.as_str();
            let options = match &group_config.body {
                GroupBody::Options(options) => options,
                GroupBody::Absent(value) => {
                    let placeholder = match value {
                        Value::Null => Value::Object(Map::new()),
                        other => other.clone(),
                    };
                    state.groups.push(GroupState {
                        key: group.to_string(),
                        leaves: Vec::new(),
                        placeholder: Some(placeholder),
                    });
                    continue;
                }
            };

            let group_idx = state.groups.len();
            let mut leaves = Vec::with_capacity(options.len());

            for option in options {
                let leaf = match &option.value {
                    LeafValue::Label(label) => LeafState::Label(label.clone()),
                    LeafValue::Preset(checked) => LeafState::Checked(*checked),
                };
                // Keys were validated when the configuration was loaded
                if let Ok(flat) = FlatKey::new(group, &option.key) {
                    if leaf.is_checked() {
                        state.selected.insert(flat.clone());
                    }
                    state.index.insert(flat, (group_idx, leaves.len()));
                }
                leaves.push((option.key.clone(), leaf));
            }

            state.groups.push(GroupState {
                key: group.to_string(),
                leaves,
                placeholder: None,
            });
        }

        state
    }

    /// Record the checked state of a leaf
    pub fn set(&mut self, key: &FlatKey, checked: bool) -> UiResult<()> {
        let &(g, l) = self
            .index
            .get(key)
            .ok_or_else(|| UiError::UnknownOption(key.to_string()))?;

        self.groups[g].leaves[l].1 = LeafState::Checked(checked);
        if checked {
            self.selected.insert(key.clone());
        } else {
            self.selected.remove(key);
        }

        log::debug!("{key} -> {checked}");
        Ok(())
    }

    pub fn get(&self, key: &FlatKey) -> Option<&LeafState> {
        let &(g, l) = self.index.get(key)?;
        Some(&self.groups[g].leaves[l].1)
    }

    pub fn contains(&self, key: &FlatKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn is_selected(&self, key: &FlatKey) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in configuration order
    pub fn selected_keys(&self) -> Vec<FlatKey> {
        let mut keys: Vec<FlatKey> = self.selected.iter().cloned().collect();
        keys.sort_by_key(|k| self.index.get(k).copied());
        keys
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The state tree as a JSON object
    pub fn to_value(&self) -> Value {
        let groups: Map<String, Value> = self
            .groups
            .iter()
            .map(|group| {
                if let Some(placeholder) = &group.placeholder {
                    return (group.key.clone(), placeholder.clone());
                }
                let leaves: Map<String, Value> = group
                    .leaves
                    .iter()
                    .map(|(key, leaf)| (key.clone(), leaf.to_value()))
                    .collect();
                (group.key.clone(), Value::Object(leaves))
            })
            .collect();
        Value::Object(groups)
    }

    /// The state tree as a JSON object, passed through the joined-key repair
    pub fn to_nested_json(&self) -> Value {
        key::unflatten(self.to_value())
    }
}
