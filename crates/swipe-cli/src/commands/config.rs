use anyhow::{Context, Result};
use swipe_infrastructure::{ConfigService, SwipePaths};

pub fn run(service: &ConfigService) -> Result<()> {
    let config = service.get_config().context("Failed to load configuration")?;

    println!("📄 Config file: {}", service.path().display());
    match SwipePaths::roster_file(&config) {
        Ok(path) => println!("🖼  Roster:      {}", path.display()),
        Err(err) => println!("🖼  Roster:      <{}>", err),
    }
    match SwipePaths::ledger_file(&config) {
        Ok(path) => println!("📒 Ledger:      {}", path.display()),
        Err(err) => println!("📒 Ledger:      <{}>", err),
    }
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).context("Failed to render configuration")?
    );

    Ok(())
}
