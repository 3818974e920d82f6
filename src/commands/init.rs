use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Riskmap Configuration

[output]
# terminal, json, or markdown
default_format = "terminal"

[storage]
# Where the latest assessment is kept; defaults to the per-user data dir
# dir = "/var/lib/riskmap"

[catalog]
# Custom question catalog; the built-in one is used when unset
# path = "catalog.toml"

[company]
# Defaults applied when `assess` flags are omitted
# name = "Acme Corp"
# industry = "Manufacturing"
# employee_count = 250
# annual_revenue = 12000000.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
