//! Init command - write a default config file

use anyhow::Result;
use colored::*;

use quotemood::core::config::{Config, CONFIG_FILE_NAME};
use quotemood::core::paths::get_home_root;

pub fn run(force: bool) -> Result<()> {
    let root = get_home_root();
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        println!(
            "{} {} already exists (use --force to overwrite)",
            "→".blue(),
            config_path.display()
        );
        return Ok(());
    }

    Config::default().save(&root)?;
    println!("{} Wrote {}", "✓".green(), config_path.display());

    Ok(())
}
