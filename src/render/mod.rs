//! Markup rendering
//!
//! Theme-specific markup lives behind the [`Renderer`] trait; the functions in
//! this module walk the configuration and selection state and delegate each
//! piece to the active renderer.

pub mod accordion;
pub mod card;
pub mod markup;

pub use accordion::AccordionRenderer;
pub use card::CardRenderer;

use crate::config::{OptionConfig, Theme, UiConfig, UiOptions};
use crate::key::FlatKey;
use crate::state::SelectionState;

/// A single checkbox as handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct LeafView<'a> {
    pub key: &'a FlatKey,
    pub label: &'a str,
    pub checked: bool,
}

/// One markup convention
pub trait Renderer {
    /// Outer container around all groups
    fn wrap_all(&self, groups: &str) -> String;

    /// Collapsible section with a header and the rendered leaves as body
    fn render_group(&self, group: &str, title: &str, body: &str) -> String;

    /// Checkbox plus label
    fn render_leaf(&self, leaf: &LeafView<'_>) -> String;
}

/// Renderer for the configured theme
pub fn renderer_for(options: &UiOptions) -> Box<dyn Renderer> {
    match options.theme {
        Theme::DaisyUi => Box::new(CardRenderer),
        Theme::Bootstrap => Box::new(AccordionRenderer::new(&options.accordion_id)),
    }
}

/// Full widget markup; groups without options are skipped
pub fn render_ui(renderer: &dyn Renderer, config: &UiConfig, state: &SelectionState) -> String {
    let groups: String = config
        .visible_groups()
        .map(|(group, options)| render_element(renderer, group, options, state))
        .collect();
    renderer.wrap_all(&groups)
}

/// One group: header plus its options
pub fn render_element(
    renderer: &dyn Renderer,
    group: &str,
    options: &[OptionConfig],
    state: &SelectionState,
) -> String {
    let body = render_sub_elements(renderer, group, options, state);
    renderer.render_group(group, &titleize(group), &body)
}

/// The checkboxes of one group
pub fn render_sub_elements(
    renderer: &dyn Renderer,
    group: &str,
    options: &[OptionConfig],
    state: &SelectionState,
) -> String {
    options
        .iter()
        .filter_map(|option| {
            let key = FlatKey::new(group, &option.key).ok()?;
            Some(renderer.render_leaf(&LeafView {
                key: &key,
                label: option.label(),
                checked: state.is_selected(&key),
            }))
        })
        .collect()
}

/// Uppercase the first character: `netbanking` -> `Netbanking`
pub fn titleize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
