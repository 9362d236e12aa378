//! Render a checkbox accordion from a JSON option tree
//!
//! ```text
//! accordion-render payments.json --theme bootstrap --select netbanking-AXIS
//! accordion-render payments.json --select netbanking-AXIS --state
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ui_accordion::prelude::*;

/// Command-line arguments for accordion-render.
#[derive(Parser)]
#[command(name = "accordion-render", version, about = "Render a checkbox accordion from a JSON option tree")]
struct Cli {
    /// Path to the JSON option tree ({ group: { option: label } })
    config: PathBuf,

    /// Markup convention: daisyui or bootstrap
    #[arg(short, long, default_value = "daisyui")]
    theme: String,

    /// DOM id of the accordion container (bootstrap only)
    #[arg(long)]
    accordion_id: Option<String>,

    /// Mark an option checked, e.g. netbanking-AXIS (repeatable)
    #[arg(short, long)]
    select: Vec<String>,

    /// Mark an option unchecked (repeatable)
    #[arg(short, long)]
    deselect: Vec<String>,

    /// Print the nested selection state as JSON instead of markup
    #[arg(long)]
    state: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = UiConfig::from_path(&cli.config)
        .with_context(|| format!("Failed to load option tree '{}'", cli.config.display()))?;
    let theme: Theme = cli.theme.parse()?;

    let mut options = UiOptions::new(theme);
    if let Some(id) = &cli.accordion_id {
        options = options.with_accordion_id(id);
    }

    let mut ui = UiManager::with_options(MemoryHost::new(), config, options);
    for key in &cli.select {
        ui.update_ui_state(key, true)
            .with_context(|| format!("Cannot select '{key}'"))?;
    }
    for key in &cli.deselect {
        ui.update_ui_state(key, false)
            .with_context(|| format!("Cannot deselect '{key}'"))?;
    }
    log::info!("{} option(s) selected", ui.selected_keys().len());

    if cli.state {
        println!("{}", serde_json::to_string_pretty(&ui.get_state_json())?);
    } else {
        ui.render()?;
        println!("{}", ui.host().markup());
    }
    Ok(())
}
