use anyhow::Result;

use starlit_core::AppConfig;
use starlit_tui::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    let active = config.ui.theme.name.as_str();

    println!("Built-in themes:\n");
    for name in available_themes() {
        let marker = if name == active { "*" } else { " " };
        println!("  {marker} {name}");
    }
    println!("\nPick one with `starlit --theme <name>` or set it in the config file.");

    Ok(())
}
