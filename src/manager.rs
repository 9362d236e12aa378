//! UiManager - renders the option tree into a view host and tracks selections

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::config::{Theme, UiConfig, UiOptions};
use crate::error::{UiError, UiResult};
use crate::host::{
    ChangeEvent, ClassList, ViewHost, CHECKBOX_SELECTOR, COLLAPSED_CLASS, HEADER_SELECTOR,
};
use crate::key::FlatKey;
use crate::render::{self, Renderer};
use crate::state::SelectionState;

/// The checkbox accordion widget.
///
/// Owns its view host and selection state. Event listeners registered on the
/// host share the state through an `Rc<RefCell<_>>`, so a change event and a
/// later [`UiManager::get_ui_state`] see the same tree.
pub struct UiManager<H: ViewHost> {
    host: H,
    config: UiConfig,
    options: UiOptions,
    renderer: Box<dyn Renderer>,
    state: Rc<RefCell<SelectionState>>,
}

impl<H: ViewHost> UiManager<H> {
    /// Create a widget with default options for `theme`
    pub fn new(host: H, config: UiConfig, theme: Theme) -> Self {
        Self::with_options(host, config, UiOptions::new(theme))
    }

    pub fn with_options(host: H, config: UiConfig, options: UiOptions) -> Self {
        let state = Self::set_default_ui_state(&config);
        let renderer = render::renderer_for(&options);
        Self {
            host,
            config,
            options,
            renderer,
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Create a widget from an untyped option tree and theme name.
    ///
    /// Fails with [`UiError::UnsupportedTheme`] or [`UiError::InvalidConfiguration`].
    pub fn from_json(host: H, config: &Value, theme: &str) -> UiResult<Self> {
        let theme: Theme = theme.parse()?;
        let config = UiConfig::from_value(config)?;
        Ok(Self::new(host, config, theme))
    }

    fn set_default_ui_state(config: &UiConfig) -> SelectionState {
        SelectionState::from_config(config)
    }

    /// Mount fresh markup into the host and bind listeners to it
    pub fn render(&mut self) -> UiResult<()> {
        let markup = self.render_ui();
        self.host.set_markup(&markup)?;
        self.add_event_listeners()?;
        log::debug!(
            "rendered {} options with theme {}",
            self.state.borrow().len(),
            self.options.theme
        );
        Ok(())
    }

    /// Markup for the whole widget, reflecting the current selection
    pub fn render_ui(&self) -> String {
        let state = self.state.borrow();
        render::render_ui(self.renderer.as_ref(), &self.config, &state)
    }

    /// Markup for a single group, `None` for unknown or absent groups
    pub fn render_element(&self, group: &str) -> Option<String> {
        let (group, options) = self.config.visible_groups().find(|(g, _)| *g == group)?;
        let state = self.state.borrow();
        Some(render::render_element(self.renderer.as_ref(), group, options, &state))
    }

    fn add_event_listeners(&mut self) -> UiResult<()> {
        let state = Rc::clone(&self.state);
        self.host.on_change(
            CHECKBOX_SELECTOR,
            Box::new(move |event: &ChangeEvent| {
                if let Err(e) = apply_change(&state, event) {
                    log::warn!("ignoring change on '{}': {}", event.name, e);
                }
            }),
        )?;

        self.host.on_click(
            HEADER_SELECTOR,
            Box::new(|classes: &mut dyn ClassList| {
                classes.toggle(COLLAPSED_CLASS);
            }),
        )?;
        Ok(())
    }

    /// Set the leaf named by a `group-option` key
    pub fn update_ui_state(&mut self, key: &str, value: bool) -> UiResult<()> {
        let key = FlatKey::parse(key)?;
        self.set_selected(&key, value)
    }

    pub fn set_selected(&mut self, key: &FlatKey, checked: bool) -> UiResult<()> {
        self.state.borrow_mut().set(key, checked)
    }

    /// Copy of the selection state as `{ group: { option: label | bool } }`
    pub fn get_ui_state(&self) -> Value {
        self.state.borrow().to_value()
    }

    /// Copy of the selection state with every joined key nested under its parent
    pub fn get_state_json(&self) -> Value {
        self.state.borrow().to_nested_json()
    }

    pub fn is_selected(&self, key: &str) -> UiResult<bool> {
        let key = FlatKey::parse(key)?;
        let state = self.state.borrow();
        if !state.contains(&key) {
            return Err(UiError::UnknownOption(key.to_string()));
        }
        Ok(state.is_selected(&key))
    }

    /// Selected options in configuration order
    pub fn selected_keys(&self) -> Vec<FlatKey> {
        self.state.borrow().selected_keys()
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.options.theme
    }

    pub fn options(&self) -> &UiOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

fn apply_change(state: &RefCell<SelectionState>, event: &ChangeEvent) -> UiResult<()> {
    let key = FlatKey::from_input_name(&event.name)?;
    state.borrow_mut().set(&key, event.checked)
}
