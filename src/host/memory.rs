//! In-process view host

use std::collections::BTreeSet;

use super::{ChangeEvent, ChangeHandler, ClassList, ClickHandler, ViewHost};
use crate::error::UiResult;
use crate::render::markup::escape;

/// Keeps the mounted markup as a string and dispatches simulated events.
///
/// Selectors are recorded but not evaluated: a change is delivered only when
/// the mounted markup contains an input with the given name, and clicks go to
/// every click listener.
#[derive(Default)]
pub struct MemoryHost {
    markup: String,
    mounts: usize,
    change_handlers: Vec<(String, ChangeHandler)>,
    click_handlers: Vec<(String, ClickHandler)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted markup
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// How many times content was replaced
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Listeners bound to the current content
    pub fn listener_count(&self) -> usize {
        self.change_handlers.len() + self.click_handlers.len()
    }

    /// Fire `change` on the input named `name`; returns the number of listeners invoked
    pub fn change(&mut self, name: &str, checked: bool) -> usize {
        let needle = format!("name=\"{}\"", escape(name));
        if !self.markup.contains(&needle) {
            log::debug!("no mounted input named '{name}'");
            return 0;
        }

        let event = ChangeEvent {
            name: name.to_string(),
            checked,
        };
        for (_, handler) in &mut self.change_handlers {
            handler(&event);
        }
        self.change_handlers.len()
    }

    /// Fire `click` on a header whose parent carries `classes`
    pub fn click(&mut self, classes: &mut ClassSet) -> usize {
        for (_, handler) in &mut self.click_handlers {
            handler(&mut *classes);
        }
        self.click_handlers.len()
    }

    /// Selectors with a bound listener, in binding order
    pub fn selectors(&self) -> Vec<&str> {
        self.change_handlers
            .iter()
            .map(|(s, _)| s.as_str())
            .chain(self.click_handlers.iter().map(|(s, _)| s.as_str()))
            .collect()
    }
}

impl ViewHost for MemoryHost {
    fn set_markup(&mut self, markup: &str) -> UiResult<()> {
        self.markup = markup.to_string();
        self.mounts += 1;
        self.change_handlers.clear();
        self.click_handlers.clear();
        Ok(())
    }

    fn on_change(&mut self, selector: &str, handler: ChangeHandler) -> UiResult<()> {
        self.change_handlers.push((selector.to_string(), handler));
        Ok(())
    }

    fn on_click(&mut self, selector: &str, handler: ClickHandler) -> UiResult<()> {
        self.click_handlers.push((selector.to_string(), handler));
        Ok(())
    }
}

/// A plain class list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new(classes: &str) -> Self {
        Self(classes.split_whitespace().map(str::to_string).collect())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }
}

impl ClassList for ClassSet {
    fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }
}
