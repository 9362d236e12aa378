//! ui-accordion - a nested checkbox selector rendered from a JSON option tree
//!
//! The widget takes a two-level configuration (group -> option -> label),
//! renders it as a collapsible checkbox tree in one of two CSS conventions
//! (daisyUI cards or a Bootstrap accordion), tracks which options the user
//! checks and hands the selection back as JSON.
//!
//! ## Example
//! ```rust
//! use ui_accordion::prelude::*;
//! use serde_json::json;
//!
//! let config = UiConfig::from_value(&json!({
//!     "netbanking": { "AXIS": "Axis Bank", "HDFC": "HDFC Bank" },
//! }))
//! .unwrap();
//!
//! let mut ui = UiManager::new(MemoryHost::new(), config, Theme::Bootstrap);
//! ui.render().unwrap();
//!
//! // The user ticks "Axis Bank"
//! ui.host_mut().change("Ui-netbanking-AXIS", true);
//!
//! assert_eq!(
//!     ui.get_state_json(),
//!     json!({ "netbanking": { "AXIS": true, "HDFC": "HDFC Bank" } })
//! );
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod key;
pub mod manager;
pub mod render;
pub mod state;

// Re-export common types
pub mod prelude {
    pub use crate::config::{GroupBody, GroupConfig, LeafValue, OptionConfig, Theme, UiConfig, UiOptions};
    pub use crate::error::{UiError, UiResult};
    pub use crate::host::{ChangeEvent, ClassList, ClassSet, MemoryHost, ViewHost};
    pub use crate::key::{unflatten, FlatKey};
    pub use crate::manager::UiManager;
    pub use crate::render::{AccordionRenderer, CardRenderer, Renderer};
    pub use crate::state::{LeafState, SelectionState};
}

#[cfg(feature = "wasm")]
pub mod wasm;
