//! View host - the mounting target the widget renders into
//!
//! In a browser this is a DOM element (see the `wasm` feature); tests and the
//! command line use [`MemoryHost`].

pub mod memory;

pub use memory::{ClassSet, MemoryHost};

use crate::error::UiResult;

/// Selector matching every rendered checkbox
pub const CHECKBOX_SELECTOR: &str = r#"input[type="checkbox"]"#;

/// Selector matching collapsible group headers
pub const HEADER_SELECTOR: &str = ".accordion-button";

/// Class toggled on a header's parent when the header is clicked
pub const COLLAPSED_CLASS: &str = "collapsed";

/// A checkbox changed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// `name` attribute of the input
    pub name: String,
    pub checked: bool,
}

/// The class list of an element
pub trait ClassList {
    /// Toggle `class`, returning whether it is now present
    fn toggle(&mut self, class: &str) -> bool;
}

pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;

/// Receives the class list of the clicked element's parent
pub type ClickHandler = Box<dyn FnMut(&mut dyn ClassList)>;

/// Minimal surface of a DOM element
pub trait ViewHost {
    /// Replace all content. Listeners bound to the previous content are dropped with it.
    fn set_markup(&mut self, markup: &str) -> UiResult<()>;

    /// Listen for `change` on every current descendant matching `selector`
    fn on_change(&mut self, selector: &str, handler: ChangeHandler) -> UiResult<()>;

    /// Listen for `click` on every current descendant matching `selector`
    fn on_click(&mut self, selector: &str, handler: ClickHandler) -> UiResult<()>;
}
