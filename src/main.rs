use anyhow::Result;

use buddyterm::config::Config;
use buddyterm::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // `--init-config` writes the default config file and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Configuration error: {err:#}");
            eprintln!("\n💡 Fix the config file or regenerate it with: buddyterm --init-config");
            return Ok(());
        }
    };

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
